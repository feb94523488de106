//! UI components and pages.
//!
//! Leptos SSR components rendered to HTML strings on the server,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`class`]: Class-string combining utility
//! - [`components`]: Reusable status components
//! - [`pages`]: Full pages built from the components
//! - [`render`]: SSR helpers and the document shell

pub mod class;
pub mod components;
pub mod pages;
pub mod render;

pub use class::cn;
pub use render::{Document, render_fragment};
