//! Status Kit
//!
//! Stateless, server-rendered status components (loading spinner, sync
//! status indicator, badge) built with Leptos SSR, plus a small Axum host
//! that serves a showcase page and per-component HTML fragments.
//!
//! # Architecture
//!
//! - **UI**: Leptos components rendered to strings; typed size/variant enums
//!   select fixed utility-class sets
//! - **Server**: Axum router serving the showcase page, fragments and static
//!   assets
//!
//! # Modules
//!
//! - [`ui`]: Components, pages and SSR helpers
//! - [`server`]: HTTP routes and server startup
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`telemetry`]: Tracing subscriber setup
//! - [`error`]: Crate error type

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;

pub use error::{Error, Result};
pub use server::AppState;
