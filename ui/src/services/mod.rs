//! Services Layer
//!
//! - **config**: Form limits and display text, loadable from JSON
//! - **errors**: Error types for the configuration layer

pub mod config;
pub mod errors;

pub use errors::*;
