use crate::features::profile::types::*;
use crate::services::config::USERNAME_MAX_LENGTH;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '.'
}

/// Checks a username against the allowed character set: letters, digits,
/// hyphens, dots and underscores, not beginning or ending with a dot and not
/// beginning with a hyphen. A dot or hyphen must be followed by a word
/// character, except for a single trailing hyphen.
pub fn validate_username(username: &str) -> UsernameValidation {
    if username.is_empty() {
        return UsernameValidation::Empty;
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return UsernameValidation::TooLong;
    }
    if !username.chars().all(|c| is_word_char(c) || is_separator(c)) {
        return UsernameValidation::InvalidCharacters;
    }
    if username.starts_with('.') {
        return UsernameValidation::LeadingDot;
    }
    if username.starts_with('-') {
        return UsernameValidation::LeadingHyphen;
    }
    if username.ends_with('.') {
        return UsernameValidation::TrailingDot;
    }

    // The last character never starts a pair, so a single trailing hyphen passes.
    let chars: Vec<char> = username.chars().collect();
    if chars
        .windows(2)
        .any(|pair| is_separator(pair[0]) && !is_word_char(pair[1]))
    {
        return UsernameValidation::ConsecutiveSeparators;
    }

    UsernameValidation::Valid
}

/// Gets user-friendly validation message for the current profile, if it cannot be saved
pub fn get_profile_validation_message(state: &ProfileSettingsState) -> Option<String> {
    match state.username_validation {
        UsernameValidation::Valid => {}
        UsernameValidation::Empty => return Some("Please enter a username".to_string()),
        UsernameValidation::TooLong => {
            return Some(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            ))
        }
        _ => return Some("Username contains characters that are not allowed".to_string()),
    }

    let display_name_len = state.profile.display_name_or_empty().chars().count();
    if display_name_len > state.display_name_max_length {
        return Some(format!(
            "Display name must be at most {} characters",
            state.display_name_max_length
        ));
    }

    None
}
