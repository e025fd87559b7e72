/*!
Target kinds selectable from the command line.

  ScalarKind  element/scalar type for `value` and `list`
  ModelKind   service model for `model`

Both carry the human-readable label that ends up in parsing error messages.
*/

use std::fmt;

/// Scalar types a `value` or `list` flag can decode into.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    /// Any text; bare words need no quoting
    String,
    /// 64-bit signed integer
    Integer,
    /// Floating point number
    Number,
    /// true / false
    Boolean,
}

impl ScalarKind {
    /// Label used in `Error parsing flag ... as '<label>'`.
    pub fn label(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
        }
    }

    pub fn list_label(&self) -> String {
        format!("{} array", self.label())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Service models a `model` flag can decode into.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ModelKind {
    /// Projects: notification event
    NotificationEvent,
    /// Global Tagging: tagged resource
    Resource,
    /// User Management: user invitation
    InviteUser,
    /// User Management: IAM policy for invited users
    InviteUserIamPolicy,
}

impl ModelKind {
    /// Model name as it appears in `... as 'model <name>'`.
    pub fn model_name(&self) -> &'static str {
        match self {
            ModelKind::NotificationEvent => "NotificationEvent",
            ModelKind::Resource => "Resource",
            ModelKind::InviteUser => "InviteUser",
            ModelKind::InviteUserIamPolicy => "InviteUserIamPolicy",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

/* --------------------------------- Tests ---------------------------------- */
