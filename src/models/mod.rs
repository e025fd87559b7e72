//! Service models that flags can decode into.
//!
//! One module per service. Each model implements `DecodableModel` for
//! decoding and `Serialize` so the CLI can print what it decoded.

pub mod global_tagging;
pub mod projects;
pub mod user_management;

pub use global_tagging::Resource;
pub use projects::NotificationEvent;
pub use user_management::{InviteUser, InviteUserIamPolicy};
