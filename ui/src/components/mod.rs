//! User Interface Components
//!
//! Reusable Dioxus components for the profile settings UI:
//!
//! - **forms**: The profile form-field group
//! - **display**: Avatar and contact/feedback text
//! - **inputs**: Labeled and username inputs, validation feedback

pub mod display;
pub mod forms;
pub mod inputs;
