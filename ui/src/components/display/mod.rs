pub mod contact_feedback_notice;
pub mod user_avatar;

pub use contact_feedback_notice::*;
pub use user_avatar::*;
