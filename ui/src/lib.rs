//! This crate contains the shared UI components for profile settings.

pub mod app;
pub use app::ProfileSettings;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use components::display::ContactFeedbackNotice;
pub use components::forms::ProfileFieldsEditor;
pub use features::profile::ProfileValue;

#[cfg(test)]
mod test_utils;
