//! Literal-vs-file resolution for flag values.
//!
//! A value starting with `@` names a file whose contents replace the value.

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use super::error::DecodeError;
use crate::log_trace;

const FILE_PREFIX: char = '@';

pub fn is_file_reference(value: &str) -> bool {
    value.starts_with(FILE_PREFIX)
}

/// Bytes to decode for `value`: the file contents for `@path`, otherwise the
/// value itself.
pub fn read_source(value: &str) -> Result<Cow<'_, [u8]>, DecodeError> {
    if !is_file_reference(value) {
        return Ok(Cow::Borrowed(value.as_bytes()));
    }

    let path = Path::new(&value[FILE_PREFIX.len_utf8()..]);
    log_trace!("reading flag value from file {}", path.display());
    std::fs::read(path)
        .map(Cow::Owned)
        .map_err(|e| DecodeError::reading(path, e))
}

/// Open `path` for streaming. The `@` convention does not apply here: the
/// whole value is the path. Dropping the returned handle closes the file.
pub fn open_file(path: &str) -> Result<File, DecodeError> {
    let path = Path::new(path);
    log_trace!("opening {} for streaming", path.display());
    File::open(path).map_err(|e| DecodeError::opening(path, e))
}
