//! Input components for the profile form

use crate::features::profile::{validate_username, UsernameValidation};
use crate::services::config::USERNAME_MAX_LENGTH;
use crate::utils::validation::{
    username_validation_class, username_validation_message, username_validation_style,
};
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug, Default)]
pub enum InputType {
    #[default]
    Text,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Url => "url",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub label: String,
    #[props(into)]
    pub value: String,
    #[props(default, into)]
    pub placeholder: String,
    #[props(default)]
    pub input_type: InputType,
    #[props(default, into)]
    pub class: String,
    #[props(default)]
    pub disabled: bool,
    #[props(default = true)]
    pub spellcheck: bool,
    /// `None` leaves the input unbounded
    #[props(!optional)]
    pub max_length: Option<usize>,
    pub on_change: EventHandler<String>,
}

/// A label and its input, stacked in a form group
#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    let spellcheck = if props.spellcheck { "true" } else { "false" };

    rsx! {
        div {
            class: "form-group {props.class}",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                spellcheck: spellcheck,
                maxlength: props.max_length.map(|len| len.to_string()),
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct UsernameInputProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub value: String,
    #[props(default, into)]
    pub class: String,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default, into)]
    pub aria_describedby: String,
    pub on_change: EventHandler<String>,
}

/// Username text input.
///
/// Marks itself invalid when the current value breaks the username rules but
/// never blocks or rewrites what the user types.
#[component]
pub fn UsernameInput(props: UsernameInputProps) -> Element {
    let validation = validate_username(&props.value);
    let aria_invalid = match validation {
        UsernameValidation::Empty | UsernameValidation::Valid => "false",
        _ => "true",
    };

    rsx! {
        input {
            id: "{props.id}",
            class: "{username_validation_class(&validation)} {props.class}",
            style: "{username_validation_style(&validation)}",
            r#type: "text",
            value: "{props.value}",
            placeholder: "Username",
            required: props.required,
            disabled: props.disabled,
            spellcheck: "false",
            "autocapitalize": "off",
            autocomplete: "username",
            maxlength: "{USERNAME_MAX_LENGTH}",
            aria_describedby: "{props.aria_describedby}",
            aria_invalid: aria_invalid,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct UsernameValidationFeedbackProps {
    pub validation: UsernameValidation,
}

#[component]
pub fn UsernameValidationFeedback(props: UsernameValidationFeedbackProps) -> Element {
    match username_validation_message(&props.validation) {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ {message}"
            }
        },
        None => rsx! { div {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{input_tag, render_app as render};

    #[test]
    fn test_input_type_as_str() {
        assert_eq!(InputType::Text.as_str(), "text");
        assert_eq!(InputType::Url.as_str(), "url");
        assert_eq!(InputType::default(), InputType::Text);
    }

    #[test]
    fn test_labeled_input_renders_label_and_value() {
        fn app() -> Element {
            rsx! {
                LabeledInput {
                    id: "avatar",
                    label: "Avatar URL",
                    value: "https://example.com/a.png",
                    input_type: InputType::Url,
                    max_length: None,
                    on_change: move |_: String| {}
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Avatar URL"));
        assert!(html.contains("https://example.com/a.png"));
        assert!(html.contains("url"));
    }

    #[test]
    fn test_labeled_input_max_length_is_optional() {
        fn bounded() -> Element {
            rsx! {
                LabeledInput {
                    id: "display-name",
                    label: "Display name",
                    value: "",
                    max_length: Some(64),
                    on_change: move |_: String| {}
                }
            }
        }
        fn unbounded() -> Element {
            rsx! {
                LabeledInput {
                    id: "display-name",
                    label: "Display name",
                    value: "",
                    max_length: None,
                    on_change: move |_: String| {}
                }
            }
        }

        let html = render(bounded);
        assert!(input_tag(&html, "display-name").contains("maxlength=\"64\""));

        let html = render(unbounded);
        assert!(!input_tag(&html, "display-name").contains("maxlength"));
    }

    #[test]
    fn test_username_input_flags_invalid_value() {
        fn invalid() -> Element {
            rsx! {
                UsernameInput {
                    id: "username",
                    value: ".alice",
                    on_change: move |_: String| {}
                }
            }
        }
        fn valid() -> Element {
            rsx! {
                UsernameInput {
                    id: "username",
                    value: "alice",
                    on_change: move |_: String| {}
                }
            }
        }

        let html = render(invalid);
        assert!(html.contains("input-invalid"));
        assert!(html.contains(".alice"));

        let html = render(valid);
        assert!(html.contains("input-valid"));
        assert!(!html.contains("input-invalid"));
    }

    #[test]
    fn test_username_feedback_only_for_problems() {
        fn leading_hyphen() -> Element {
            rsx! { UsernameValidationFeedback { validation: UsernameValidation::LeadingHyphen } }
        }
        fn valid() -> Element {
            rsx! { UsernameValidationFeedback { validation: UsernameValidation::Valid } }
        }

        assert!(render(leading_hyphen).contains("may not begin with a hyphen"));
        assert!(!render(valid).contains("validation-feedback"));
    }
}
