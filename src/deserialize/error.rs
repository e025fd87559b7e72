use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::i18n::translate;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The payload is not valid JSON, or does not fit the requested type.
    Parse,
    /// A referenced file could not be opened or read.
    File,
    /// A model implementation rejected otherwise well-formed JSON.
    Model,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::File => "file",
            ErrorKind::Model => "model",
        }
    }
}

/// Failure of one decode entry point.
///
/// Carries two views of the same failure: [`DecodeError::cause`] is the
/// untouched underlying error (a `serde_json` syntax error, an I/O error or a
/// model error) and [`DecodeError::message`] is the translated text naming
/// the flag and the type it was parsed as. `Display` shows the message.
#[derive(Debug)]
pub struct DecodeError {
    kind: ErrorKind,
    message: String,
    flag: Option<String>,
    path: Option<PathBuf>,
    source: Box<dyn StdError + Send + Sync>,
}

impl DecodeError {
    pub fn new(kind: ErrorKind, source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            kind,
            message: String::new(),
            flag: None,
            path: None,
            source: Box::new(source),
        }
    }

    /// `Error parsing flag '<flag>' as '<type>'`.
    pub fn parsing(
        kind: ErrorKind,
        flag_name: &str,
        type_name: &str,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        let message = translate(
            "parsing-error",
            &[("FLAG_NAME", flag_name), ("TYPE", type_name)],
        );
        Self::new(kind, source)
            .with_message(message)
            .with_flag(flag_name)
    }

    pub fn reading(path: &Path, source: std::io::Error) -> Self {
        Self::file("file-reading-error", path, source)
    }

    pub fn opening(path: &Path, source: std::io::Error) -> Self {
        Self::file("file-opening-error", path, source)
    }

    fn file(id: &str, path: &Path, source: std::io::Error) -> Self {
        let name = path.display().to_string();
        Self::new(ErrorKind::File, source)
            .with_message(translate(id, &[("FILENAME", &name)]))
            .with_path(path)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn exit_code(&self) -> i32 {
        to_exit_code(self.kind)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{:?}: {}", self.kind, self.source)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Parse => 2,
        ErrorKind::File => 3,
        ErrorKind::Model => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (ErrorKind::Parse, 2),
            (ErrorKind::File, 3),
            (ErrorKind::Model, 4),
        ];

        for (kind, code) in cases {
            assert_eq!(to_exit_code(kind), code);
            assert_eq!(DecodeError::new(kind, std::io::Error::other("x")).exit_code(), code);
        }
    }

    #[test]
    fn parsing_error_keeps_cause_and_message_apart() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause_text = cause.to_string();
        let err = DecodeError::parsing(ErrorKind::Parse, "tags", "string array", cause);

        assert_eq!(err.message(), "Error parsing flag 'tags' as 'string array'");
        assert_eq!(err.to_string(), err.message());
        assert_eq!(err.cause().to_string(), cause_text);
        assert_eq!(err.flag(), Some("tags"));
        assert!(err.source().is_some());
    }

    #[test]
    fn file_errors_name_the_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DecodeError::reading(Path::new("missing.json"), io);
        assert_eq!(err.kind(), ErrorKind::File);
        assert_eq!(err.message(), "Error reading file 'missing.json'");
        assert_eq!(err.path(), Some(Path::new("missing.json")));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn display_without_message_falls_back_to_cause() {
        let io = std::io::Error::other("boom");
        let err = DecodeError::new(ErrorKind::File, io);
        assert_eq!(err.to_string(), "File: boom");
    }
}
