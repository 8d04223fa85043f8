pub mod profile_config;

pub use profile_config::*;

/// Maximum length of a user's display name
pub const USER_DISPLAY_NAME_MAX_LENGTH: usize = 255;

/// Maximum length of a username
pub const USERNAME_MAX_LENGTH: usize = 255;

/// Header shown before the contact links when none is supplied
pub const DEFAULT_FEEDBACK_HEADER: &str = "Questions/feedback?";

pub const CONTACT_TWITTER_URL: &str = "https://twitter.com/sourcegraph";
pub const CONTACT_TWITTER_HANDLE: &str = "@sourcegraph";
pub const CONTACT_SUPPORT_EMAIL: &str = "support@sourcegraph.com";
pub const CONTACT_SUPPORT_MAILTO: &str = "mailto:support@sourcegraph.com";
pub const ISSUE_TRACKER_URL: &str = "https://github.com/sourcegraph/issues/issues";
