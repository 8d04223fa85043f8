use crate::{console_info, console_warn};
use dioxus::prelude::*;

use crate::components::display::ContactFeedbackNotice;
use crate::components::forms::ProfileFieldsEditor;
use crate::components::inputs::UsernameValidationFeedback;
use crate::features::profile::{
    ProfileAction, ProfileSettingsState, ProfileValue, SaveMessage,
};
use crate::services::config::ProfileFormConfig;

#[derive(Props, PartialEq, Clone)]
pub struct ProfileSettingsProps {
    #[props(default)]
    pub initial_profile: ProfileValue,
    #[props(default)]
    pub config: ProfileFormConfig,
    /// Usernames managed by an external provider cannot be edited here
    #[props(default)]
    pub username_locked: bool,
}

/// Profile settings page: owns the profile state and feeds it to the form fields
#[component]
pub fn ProfileSettings(props: ProfileSettingsProps) -> Element {
    let initial_profile = props.initial_profile.clone();
    let display_name_max_length = props.config.display_name_max_length;
    let mut state = use_signal(move || {
        ProfileSettingsState::new(initial_profile, display_name_max_length)
    });

    // In-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: ProfileAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let current = state();

    rsx! {
        div {
            class: "profile-settings-container",

            h2 {
                class: "form-title",
                "Profile"
            }

            ProfileFieldsEditor {
                value: current.profile.clone(),
                on_change: move |profile: ProfileValue| {
                    dispatch.call(ProfileAction::SetProfile(profile));
                },
                username_field_disabled: props.username_locked,
                display_name_max_length: current.display_name_max_length,
            }

            UsernameValidationFeedback {
                validation: current.username_validation.clone()
            }

            div {
                class: "button-section",
                button {
                    class: "save-button",
                    disabled: !current.is_dirty(),
                    onclick: move |_| {
                        dispatch.call(ProfileAction::Save);
                        match state().save_message {
                            Some(SaveMessage::Saved) => {
                                console_info!("[ProfileSettings] Profile saved");
                            }
                            Some(SaveMessage::Rejected(reason)) => {
                                console_warn!("[ProfileSettings] Save rejected: {}", reason);
                            }
                            None => {}
                        }
                    },
                    "Save"
                }
                button {
                    class: "reset-button",
                    disabled: !current.is_dirty(),
                    onclick: move |_| dispatch.call(ProfileAction::Reset),
                    "Reset"
                }
            }

            {
                match &current.save_message {
                    Some(SaveMessage::Saved) => rsx! {
                        div {
                            class: "save-success",
                            "Profile saved."
                        }
                    },
                    Some(SaveMessage::Rejected(reason)) => rsx! {
                        div {
                            class: "validation-error",
                            "⚠️ {reason}"
                        }
                    },
                    None => rsx! {},
                }
            }

            ContactFeedbackNotice {
                header_text: props.config.feedback_header_text.clone(),
                class: "profile-settings-feedback"
            }
        }
    }
}
