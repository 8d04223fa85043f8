use crate::features::profile::ProfileValue;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct UserAvatarProps {
    pub user: ProfileValue,
    #[props(default, into)]
    pub class: String,
}

/// Up to two uppercase initials, taken from the display name or else the username
pub fn user_initials(user: &ProfileValue) -> String {
    let name = match user.display_name.as_deref().map(str::trim) {
        Some(display_name) if !display_name.is_empty() => display_name,
        _ => user.username.as_str(),
    };

    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn UserAvatar(props: UserAvatarProps) -> Element {
    if props.user.has_avatar() {
        rsx! {
            img {
                class: "user-avatar {props.class}",
                src: "{props.user.avatar_url_or_empty()}",
                alt: ""
            }
        }
    } else {
        rsx! {
            span {
                class: "user-avatar user-avatar-initials {props.class}",
                title: "{props.user.username}",
                "{user_initials(&props.user)}"
            }
        }
    }
}
