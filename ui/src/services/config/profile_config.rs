//! Profile form configuration
//!
//! Limits and display text for the profile settings page. Every field has a
//! default, so a partial JSON document is enough to override one setting.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_FEEDBACK_HEADER, USER_DISPLAY_NAME_MAX_LENGTH};
use crate::services::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFormConfig {
    /// Maximum characters accepted by the display name input
    pub display_name_max_length: usize,

    /// Header text for the contact notice under the form
    pub feedback_header_text: String,
}

impl Default for ProfileFormConfig {
    fn default() -> Self {
        Self {
            display_name_max_length: USER_DISPLAY_NAME_MAX_LENGTH,
            feedback_header_text: DEFAULT_FEEDBACK_HEADER.to_string(),
        }
    }
}

impl ProfileFormConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.display_name_max_length == 0 {
            return Err(ConfigError::Invalid {
                field: "display_name_max_length".to_string(),
                value: self.display_name_max_length.to_string(),
            });
        }
        if self.feedback_header_text.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "feedback_header_text".to_string(),
                value: self.feedback_header_text.clone(),
            });
        }
        Ok(())
    }
}
