use crate::features::profile::UsernameValidation;

pub fn username_validation_class(validation: &UsernameValidation) -> &'static str {
    match validation {
        UsernameValidation::Empty => "input-field",
        UsernameValidation::Valid => "input-field input-valid",
        _ => "input-field input-invalid",
    }
}

pub fn username_validation_style(validation: &UsernameValidation) -> &'static str {
    match validation {
        UsernameValidation::Empty | UsernameValidation::Valid => "",
        _ => "border: 2px solid #ef4444; background-color: #fef2f2;",
    }
}

/// Feedback text for a username; `None` when there is nothing to report
pub fn username_validation_message(validation: &UsernameValidation) -> Option<&'static str> {
    match validation {
        UsernameValidation::Empty | UsernameValidation::Valid => None,
        UsernameValidation::TooLong => Some("Username is too long"),
        UsernameValidation::InvalidCharacters => {
            Some("Only letters, numbers, hyphens, dots and underscores are allowed")
        }
        UsernameValidation::LeadingDot => Some("Username may not begin with a dot"),
        UsernameValidation::LeadingHyphen => Some("Username may not begin with a hyphen"),
        UsernameValidation::TrailingDot => Some("Username may not end with a dot"),
        UsernameValidation::ConsecutiveSeparators => {
            Some("A dot or hyphen must be followed by a letter, number or underscore")
        }
    }
}
