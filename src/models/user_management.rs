//! User Management service models.

use serde::Serialize;

use crate::deserialize::model::{unmarshal_model_slice, unmarshal_primitive};
use crate::deserialize::{DecodableModel, ModelError, RawFields};

/// A user to invite into an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InviteUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_role: Option<String>,
}

impl DecodableModel for InviteUser {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(InviteUser {
            email: unmarshal_primitive(fields, "email")?,
            account_role: unmarshal_primitive(fields, "account_role")?,
        })
    }
}

/// IAM policy granted to invited users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InviteUserIamPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<PolicyResource>>,
}

impl DecodableModel for InviteUserIamPolicy {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(InviteUserIamPolicy {
            roles: unmarshal_model_slice(fields, "roles")?,
            resources: unmarshal_model_slice(fields, "resources")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
}

impl DecodableModel for Role {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(Role {
            role_id: unmarshal_primitive(fields, "role_id")?,
        })
    }
}

/// Resource scope of a policy, as a list of IAM attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl DecodableModel for PolicyResource {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(PolicyResource {
            attributes: unmarshal_model_slice(fields, "attributes")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DecodableModel for Attribute {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(Attribute {
            name: unmarshal_primitive(fields, "name")?,
            value: unmarshal_primitive(fields, "value")?,
        })
    }
}
