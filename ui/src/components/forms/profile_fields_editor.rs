use dioxus::prelude::*;

use crate::components::{
    display::UserAvatar,
    inputs::{InputType, LabeledInput, UsernameInput},
};
use crate::console_debug;
use crate::features::profile::{FieldAccess, ProfileValue};
use crate::services::config::USER_DISPLAY_NAME_MAX_LENGTH;

pub const USERNAME_HELP_TEXT: &str = "A username consists of letters, numbers, hyphens (-), dots (.), underscore (_) and may not begin or end with a dot, nor begin with a hyphen.";

/// One of the three editable profile inputs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProfileField {
    Username,
    DisplayName,
    AvatarUrl,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Username,
        ProfileField::DisplayName,
        ProfileField::AvatarUrl,
    ];

    pub fn input_id(&self) -> &'static str {
        match self {
            ProfileField::Username => "ProfileFieldsEditor__username",
            ProfileField::DisplayName => "ProfileFieldsEditor__displayName",
            ProfileField::AvatarUrl => "ProfileFieldsEditor__avatarURL",
        }
    }

    /// The text shown in this field's input
    pub fn read<'a>(&self, value: &'a ProfileValue) -> &'a str {
        match self {
            ProfileField::Username => &value.username,
            ProfileField::DisplayName => value.display_name_or_empty(),
            ProfileField::AvatarUrl => value.avatar_url_or_empty(),
        }
    }

    pub fn apply(&self, value: &ProfileValue, text: String) -> ProfileValue {
        match self {
            ProfileField::Username => value.with_username(text),
            ProfileField::DisplayName => value.with_display_name(text),
            ProfileField::AvatarUrl => value.with_avatar_url(text),
        }
    }
}

/// Handler for one input: replaces `field` in a copy of `value` and passes it on
pub fn edit_handler(
    value: ProfileValue,
    field: ProfileField,
    on_change: EventHandler<ProfileValue>,
) -> EventHandler<String> {
    EventHandler::new(move |text: String| {
        console_debug!("[ProfileFieldsEditor] {:?} changed", field);
        on_change.call(field.apply(&value, text));
    })
}

#[derive(Props, PartialEq, Clone)]
pub struct ProfileFieldsEditorProps {
    pub value: ProfileValue,
    pub on_change: EventHandler<ProfileValue>,
    #[props(default)]
    pub username_field_disabled: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default = USER_DISPLAY_NAME_MAX_LENGTH)]
    pub display_name_max_length: usize,
}

/// Username, display name and avatar URL inputs bound to a caller-owned value.
///
/// Holds no state of its own: each edit clones `value`, replaces the edited
/// field and hands the result to `on_change`.
#[component]
pub fn ProfileFieldsEditor(props: ProfileFieldsEditorProps) -> Element {
    let access = FieldAccess::resolve(props.username_field_disabled, props.disabled);
    let edit = |field: ProfileField| edit_handler(props.value.clone(), field, props.on_change);

    rsx! {
        div {
            "data-testid": "user-profile-form-fields",
            class: "profile-fields",

            div {
                class: "form-group",
                label {
                    class: "input-label",
                    r#for: ProfileField::Username.input_id(),
                    "Username"
                }
                UsernameInput {
                    id: ProfileField::Username.input_id(),
                    class: "profile-fields-username",
                    value: props.value.username.clone(),
                    required: true,
                    disabled: access.username_disabled,
                    aria_describedby: "ProfileFieldsEditor__username-help",
                    on_change: edit(ProfileField::Username)
                }
                small {
                    id: "ProfileFieldsEditor__username-help",
                    class: "form-text text-muted",
                    "{USERNAME_HELP_TEXT}"
                }
            }

            LabeledInput {
                id: ProfileField::DisplayName.input_id(),
                label: "Display name",
                value: props.value.display_name_or_empty().to_string(),
                placeholder: "Display name",
                disabled: access.display_name_disabled,
                spellcheck: false,
                max_length: Some(props.display_name_max_length),
                on_change: edit(ProfileField::DisplayName)
            }

            div {
                class: "avatar-url-row",
                LabeledInput {
                    id: ProfileField::AvatarUrl.input_id(),
                    label: "Avatar URL",
                    class: "avatar-url-input",
                    value: props.value.avatar_url_or_empty().to_string(),
                    placeholder: "URL to avatar photo",
                    input_type: InputType::Url,
                    disabled: access.avatar_url_disabled,
                    spellcheck: false,
                    max_length: None,
                    on_change: edit(ProfileField::AvatarUrl)
                }
                if props.value.has_avatar() {
                    UserAvatar {
                        user: props.value.clone(),
                        class: "profile-avatar-preview"
                    }
                }
            }
        }
    }
}
