//! ShadCN-style status components.
//!
//! Every component here is stateless: it maps its typed props to a fixed
//! set of utility classes and renders static markup.
//!
//! # Components
//!
//! - [`LoadingSpinner`]: Animated loader with optional message
//! - [`SyncStatusIndicator`]: Icon + label for a [`SyncState`]
//! - [`Badge`]: Status badge/tag
//! - [`icons`]: SVG icon components

mod badge;
pub mod icons;
mod spinner;
mod sync_status;

pub use badge::{Badge, BadgeVariant};
pub use icons::*;
pub use spinner::{DEFAULT_LOADING_MESSAGE, LoadingSpinner, SpinnerSize};
pub use sync_status::{SyncState, SyncStatusIndicator};
