//! Utilities for the command-line front end.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the app data directory
//! - [`input`] - Loading text from arguments, files or stdin

pub mod app_data;
pub mod input;

pub use app_data::*;
pub use input::*;
