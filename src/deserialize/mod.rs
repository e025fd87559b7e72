//! Flag value decoding.
//!
//! Entry points, one per kind of flag:
//!   single_value  scalar (string, number, boolean, date-like)
//!   list          comma separated list or JSON array
//!   json          arbitrary JSON, inline or `@file`
//!   file          open file handle for streaming uploads
//!   model         one service model, inline or `@file`
//!   model_slice   list of service models, inline or `@file`
//!
//! `flag_name` and `type_name` only feed the error message; the target type
//! is picked by the caller through the generic parameter.

pub mod coerce;
pub mod error;
pub mod model;
pub mod source;

use serde::de::DeserializeOwned;
use std::fs::File;

use crate::log_debug;

pub use coerce::ListElement;
pub use error::{DecodeError, ErrorKind};
pub use model::{DecodableModel, ModelError, RawFields};

/// Decode a scalar flag. Bare words are treated as strings.
pub fn single_value<T: DeserializeOwned>(
    flag: &str,
    flag_name: &str,
    type_name: &str,
) -> Result<T, DecodeError> {
    let canonical = coerce::to_json_value(flag);
    log_debug!("flag '{flag_name}' as value: {canonical}");
    decode_json(canonical.as_bytes(), flag_name, type_name)
}

/// Decode a list flag, either `a,b,c` or a JSON array.
pub fn list<T: ListElement + DeserializeOwned>(
    flag: &str,
    flag_name: &str,
    type_name: &str,
) -> Result<Vec<T>, DecodeError> {
    let canonical = coerce::to_json_array(flag, T::KIND);
    log_debug!("flag '{flag_name}' as {:?} list: {canonical}", T::KIND);
    decode_json(canonical.as_bytes(), flag_name, type_name)
}

/// Decode a JSON flag. `@path` reads the JSON from `path`.
pub fn json<T: DeserializeOwned>(
    flag: &str,
    flag_name: &str,
    type_name: &str,
) -> Result<T, DecodeError> {
    let bytes = source::read_source(flag)?;
    decode_json(&bytes, flag_name, type_name)
}

/// Open the file named by `flag` without reading it. The caller owns the
/// handle.
pub fn file(flag: &str) -> Result<File, DecodeError> {
    source::open_file(flag)
}

/// Decode a single model from a JSON object flag.
pub fn model<M: DecodableModel>(
    flag: &str,
    flag_name: &str,
    model_name: &str,
) -> Result<M, DecodeError> {
    let bytes = source::read_source(flag)?;
    let fields = model::shallow_object(&bytes)
        .map_err(|e| DecodeError::parsing(ErrorKind::Parse, flag_name, "JSON", e))?;
    M::from_raw_fields(&fields).map_err(|e| model_error(flag_name, model_name, e))
}

/// Decode a list of models from a JSON array flag.
pub fn model_slice<M: DecodableModel>(
    flag: &str,
    flag_name: &str,
    model_name: &str,
) -> Result<Vec<M>, DecodeError> {
    let bytes = source::read_source(flag)?;
    let items = model::shallow_array(&bytes)
        .map_err(|e| DecodeError::parsing(ErrorKind::Parse, flag_name, "JSON", e))?;
    log_debug!("flag '{flag_name}' holds {} {model_name} item(s)", items.len());
    model::decode_all(&items).map_err(|e| model_error(flag_name, model_name, e))
}

fn decode_json<T: DeserializeOwned>(
    bytes: &[u8],
    flag_name: &str,
    type_name: &str,
) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes)
        .map_err(|e| DecodeError::parsing(ErrorKind::Parse, flag_name, type_name, e))
}

fn model_error(flag_name: &str, model_name: &str, e: ModelError) -> DecodeError {
    DecodeError::parsing(
        ErrorKind::Model,
        flag_name,
        &format!("model {model_name}"),
        e,
    )
}
