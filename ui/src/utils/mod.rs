//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: Logging macros for the browser console (tracing on native targets)
//! - **validation**: CSS class and style helpers for validation states

pub mod console_macros;
pub mod validation;

pub use validation::*;
