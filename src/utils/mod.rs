//! Utility functions.
//!
//! - [`app_data`] - Configuration file and data directory management (XDG-compliant)

pub mod app_data;

pub use app_data::*;
