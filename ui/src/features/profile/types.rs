use serde::{Deserialize, Serialize};

/// The editable subset of a user's profile.
///
/// Owned by the caller. Components never mutate it; edits produce a new value
/// through the `with_*` methods and are handed back through `on_change`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ProfileValue {
    pub username: String,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "avatarURL", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileValue {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Copy of this value with only the username replaced
    pub fn with_username(&self, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..self.clone()
        }
    }

    /// Copy of this value with only the display name replaced.
    /// An empty edit is kept as `Some("")`, exactly what the input reported.
    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..self.clone()
        }
    }

    /// Copy of this value with only the avatar URL replaced
    pub fn with_avatar_url(&self, avatar_url: impl Into<String>) -> Self {
        Self {
            avatar_url: Some(avatar_url.into()),
            ..self.clone()
        }
    }

    pub fn display_name_or_empty(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn avatar_url_or_empty(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or_default()
    }

    /// Whether an avatar preview should be shown.
    /// Any non-empty string counts; the URL is not checked for well-formedness.
    pub fn has_avatar(&self) -> bool {
        self.avatar_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Which of the three profile inputs accept edits
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FieldAccess {
    pub username_disabled: bool,
    pub display_name_disabled: bool,
    pub avatar_url_disabled: bool,
}

impl FieldAccess {
    /// `username_field_disabled` only locks the username; `disabled` locks everything.
    pub fn resolve(username_field_disabled: bool, disabled: bool) -> Self {
        Self {
            username_disabled: username_field_disabled || disabled,
            display_name_disabled: disabled,
            avatar_url_disabled: disabled,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum UsernameValidation {
    Empty,
    Valid,
    TooLong,
    InvalidCharacters,
    LeadingDot,
    LeadingHyphen,
    TrailingDot,
    ConsecutiveSeparators,
}

impl UsernameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, UsernameValidation::Valid)
    }
}

/// Caller-side state for the profile settings page
#[derive(Clone, PartialEq, Debug)]
pub struct ProfileSettingsState {
    pub profile: ProfileValue,
    pub saved_profile: ProfileValue,
    pub username_validation: UsernameValidation,
    pub display_name_max_length: usize,
    pub save_message: Option<SaveMessage>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SaveMessage {
    Saved,
    Rejected(String),
}

#[derive(Clone, Debug)]
pub enum ProfileAction {
    SetProfile(ProfileValue),
    Save,
    Reset,
}

impl Default for ProfileSettingsState {
    fn default() -> Self {
        Self::new(
            ProfileValue::default(),
            crate::services::config::USER_DISPLAY_NAME_MAX_LENGTH,
        )
    }
}

impl ProfileSettingsState {
    pub fn new(profile: ProfileValue, display_name_max_length: usize) -> Self {
        let username_validation = super::validate_username(&profile.username);
        Self {
            saved_profile: profile.clone(),
            profile,
            username_validation,
            display_name_max_length,
            save_message: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.profile != self.saved_profile
    }

    pub fn reduce_in_place(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::SetProfile(profile) => {
                self.username_validation = super::validate_username(&profile.username);
                self.profile = profile;
                self.save_message = None;
            }
            ProfileAction::Save => match super::get_profile_validation_message(self) {
                Some(message) => {
                    self.save_message = Some(SaveMessage::Rejected(message));
                }
                None => {
                    self.saved_profile = self.profile.clone();
                    self.save_message = Some(SaveMessage::Saved);
                }
            },
            ProfileAction::Reset => {
                self.profile = self.saved_profile.clone();
                self.username_validation = super::validate_username(&self.profile.username);
                self.save_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileValue {
        ProfileValue {
            username: "alice".to_string(),
            display_name: Some("Alice Liddell".to_string()),
            avatar_url: Some("https://example.com/a.png".to_string()),
        }
    }

    #[test]
    fn test_single_field_edits_leave_other_fields_untouched() {
        let value = sample();

        let edited = value.with_username("bob");
        assert_eq!(edited.username, "bob");
        assert_eq!(edited.display_name, value.display_name);
        assert_eq!(edited.avatar_url, value.avatar_url);

        let edited = value.with_display_name("Bob");
        assert_eq!(edited.username, value.username);
        assert_eq!(edited.display_name.as_deref(), Some("Bob"));
        assert_eq!(edited.avatar_url, value.avatar_url);

        let edited = value.with_avatar_url("");
        assert_eq!(edited.username, value.username);
        assert_eq!(edited.display_name, value.display_name);
        assert_eq!(edited.avatar_url.as_deref(), Some(""));

        // The source value is never touched
        assert_eq!(value, sample());
    }

    #[test]
    fn test_malformed_input_passes_through_unchanged() {
        let value = ProfileValue::new("alice");
        assert_eq!(value.with_username(".-bad name!").username, ".-bad name!");
        assert_eq!(
            value.with_avatar_url("not a url").avatar_url.as_deref(),
            Some("not a url")
        );
    }

    #[test]
    fn test_absent_fields_render_as_empty() {
        let value = ProfileValue::new("alice");
        assert_eq!(value.display_name_or_empty(), "");
        assert_eq!(value.avatar_url_or_empty(), "");
    }

    #[test]
    fn test_has_avatar_requires_non_empty_url() {
        let value = ProfileValue::new("alice");
        assert!(!value.has_avatar());
        assert!(!value.with_avatar_url("").has_avatar());
        assert!(value.with_avatar_url("x").has_avatar());
    }

    #[test]
    fn test_field_access() {
        assert_eq!(FieldAccess::resolve(false, false), FieldAccess::default());

        let access = FieldAccess::resolve(true, false);
        assert!(access.username_disabled);
        assert!(!access.display_name_disabled);
        assert!(!access.avatar_url_disabled);

        for username_field_disabled in [false, true] {
            let access = FieldAccess::resolve(username_field_disabled, true);
            assert!(access.username_disabled);
            assert!(access.display_name_disabled);
            assert!(access.avatar_url_disabled);
        }
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["displayName"], "Alice Liddell");
        assert_eq!(json["avatarURL"], "https://example.com/a.png");

        let parsed: ProfileValue = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(parsed, ProfileValue::new("bob"));
    }

    #[test]
    fn test_reduce_save_and_reset() {
        let mut state = ProfileSettingsState::new(ProfileValue::new("alice"), 10);
        assert!(!state.is_dirty());

        state.reduce_in_place(ProfileAction::SetProfile(state.profile.with_username("bob")));
        assert!(state.is_dirty());
        assert!(state.username_validation.is_valid());

        state.reduce_in_place(ProfileAction::Save);
        assert_eq!(state.save_message, Some(SaveMessage::Saved));
        assert_eq!(state.saved_profile.username, "bob");
        assert!(!state.is_dirty());

        state.reduce_in_place(ProfileAction::SetProfile(state.profile.with_username(".bob")));
        assert_eq!(state.username_validation, UsernameValidation::LeadingDot);
        state.reduce_in_place(ProfileAction::Save);
        assert!(matches!(state.save_message, Some(SaveMessage::Rejected(_))));
        assert_eq!(state.saved_profile.username, "bob");

        state.reduce_in_place(ProfileAction::Reset);
        assert_eq!(state.profile.username, "bob");
        assert!(state.username_validation.is_valid());
        assert_eq!(state.save_message, None);
    }

    #[test]
    fn test_reduce_rejects_long_display_name() {
        let mut state = ProfileSettingsState::new(ProfileValue::new("alice"), 3);
        state.reduce_in_place(ProfileAction::SetProfile(state.profile.with_display_name("Alice")));
        state.reduce_in_place(ProfileAction::Save);
        assert!(matches!(state.save_message, Some(SaveMessage::Rejected(_))));
        assert_eq!(state.saved_profile, ProfileValue::new("alice"));
    }
}
