//! Global Tagging service models.

use serde::Serialize;

use crate::deserialize::model::{unmarshal_primitive, unmarshal_required};
use crate::deserialize::{DecodableModel, ModelError, RawFields};

/// A resource that tags are attached to or detached from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    /// The CRN or IMS ID of the resource.
    pub resource_id: String,
    /// The IMS resource type of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl DecodableModel for Resource {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError> {
        Ok(Resource {
            resource_id: unmarshal_required(fields, "resource_id")?,
            resource_type: unmarshal_primitive(fields, "resource_type")?,
        })
    }
}
