/*!
Generic model envelope.

Model flags are decoded in two stages:
  1. shallow: the JSON object becomes a map of field name -> raw JSON text
     (`RawFields`), a JSON array becomes a list of such maps
  2. delegated: the target type builds itself from the raw fields through
     `DecodableModel`, one field at a time

Stage 2 lives with each model, so this module knows nothing about any
particular model's fields or which of them are required. The `unmarshal_*`
helpers are the field-level building blocks those implementations use.
*/

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

/// Top-level fields of one JSON object, values left undecoded.
pub type RawFields = HashMap<String, Box<RawValue>>;

/// A domain model that can build itself from shallow-decoded fields.
pub trait DecodableModel: Sized {
    fn from_raw_fields(fields: &RawFields) -> Result<Self, ModelError>;
}

#[derive(Debug)]
pub enum ModelError {
    /// A required field is absent or `null`.
    MissingField(String),
    /// A field is present but does not decode into the field's type.
    InvalidField {
        field: String,
        source: serde_json::Error,
    },
    /// Element `index` of a model list was rejected.
    InvalidElement {
        index: usize,
        source: Box<ModelError>,
    },
    /// A nested model field was rejected.
    InvalidNested {
        field: String,
        source: Box<ModelError>,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingField(field) => write!(f, "missing required field '{field}'"),
            ModelError::InvalidField { field, source } => {
                write!(f, "invalid value for field '{field}': {source}")
            }
            ModelError::InvalidElement { index, source } => write!(f, "element {index}: {source}"),
            ModelError::InvalidNested { field, source } => write!(f, "field '{field}': {source}"),
        }
    }
}

impl StdError for ModelError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ModelError::MissingField(_) => None,
            ModelError::InvalidField { source, .. } => Some(source),
            ModelError::InvalidElement { source, .. } | ModelError::InvalidNested { source, .. } => {
                Some(source.as_ref())
            }
        }
    }
}

pub fn shallow_object(bytes: &[u8]) -> Result<RawFields, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn shallow_array(bytes: &[u8]) -> Result<Vec<RawFields>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Build one model per element, keeping order. The first rejected element
/// fails the whole list.
pub fn decode_all<M: DecodableModel>(items: &[RawFields]) -> Result<Vec<M>, ModelError> {
    items
        .iter()
        .enumerate()
        .map(|(index, fields)| {
            M::from_raw_fields(fields).map_err(|e| ModelError::InvalidElement {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Optional field. Absent and `null` both yield `None`.
pub fn unmarshal_primitive<T: DeserializeOwned>(
    fields: &RawFields,
    key: &str,
) -> Result<Option<T>, ModelError> {
    let Some(raw) = fields.get(key) else {
        return Ok(None);
    };
    serde_json::from_str::<Option<T>>(raw.get()).map_err(|source| ModelError::InvalidField {
        field: key.to_string(),
        source,
    })
}

pub fn unmarshal_required<T: DeserializeOwned>(
    fields: &RawFields,
    key: &str,
) -> Result<T, ModelError> {
    unmarshal_primitive(fields, key)?.ok_or_else(|| ModelError::MissingField(key.to_string()))
}

/// Optional field holding a list of nested models.
pub fn unmarshal_model_slice<M: DecodableModel>(
    fields: &RawFields,
    key: &str,
) -> Result<Option<Vec<M>>, ModelError> {
    let Some(items) = unmarshal_primitive::<Vec<RawFields>>(fields, key)? else {
        return Ok(None);
    };
    decode_all(&items)
        .map(Some)
        .map_err(|e| ModelError::InvalidNested {
            field: key.to_string(),
            source: Box::new(e),
        })
}
