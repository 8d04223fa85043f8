use crate::services::config::{
    CONTACT_SUPPORT_EMAIL, CONTACT_SUPPORT_MAILTO, CONTACT_TWITTER_HANDLE, CONTACT_TWITTER_URL,
    DEFAULT_FEEDBACK_HEADER, ISSUE_TRACKER_URL,
};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ContactFeedbackNoticeProps {
    #[props(default = DEFAULT_FEEDBACK_HEADER.to_string(), into)]
    pub header_text: String,
    #[props(default)]
    pub footer_text: Option<String>,
    #[props(default, into)]
    pub class: String,
}

/// A sentence pointing users at our contact channels
#[component]
pub fn ContactFeedbackNotice(props: ContactFeedbackNoticeProps) -> Element {
    rsx! {
        p {
            class: "feedback-text {props.class}",
            "{props.header_text} Contact us at "
            a {
                href: CONTACT_TWITTER_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "{CONTACT_TWITTER_HANDLE}"
            }
            " or "
            a {
                href: CONTACT_SUPPORT_MAILTO,
                target: "_blank",
                rel: "noopener noreferrer",
                "{CONTACT_SUPPORT_EMAIL}"
            }
            ", or file issues on our "
            a {
                href: ISSUE_TRACKER_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "public issue tracker"
            }
            ". "
            if let Some(footer_text) = &props.footer_text {
                "{footer_text}"
            }
        }
    }
}
