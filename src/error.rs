use std::path::PathBuf;
use thiserror::Error;

use crate::types::Format;

#[derive(Debug, Error)]
pub enum HomeConfigError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path} as {format}: {reason}")]
    ParseError {
        path: PathBuf,
        format: Format,
        reason: String,
    },

    #[error("Expected a key/value mapping in {path}, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("No supported format could parse {path}")]
    UnrecognizedFormat { path: PathBuf },

    #[error("Cannot make '{path}' absolute: {source}")]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_path_and_format() {
        let err = HomeConfigError::ParseError {
            path: "/home/user/.local/share/.myapp.json".into(),
            format: Format::Json,
            reason: "expected value at line 1 column 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".myapp.json"));
        assert!(msg.contains("JSON"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn not_a_mapping_formats() {
        let err = HomeConfigError::NotAMapping {
            path: "/tmp/list.yaml".into(),
            found: "a sequence",
        };
        assert_eq!(
            err.to_string(),
            "Expected a key/value mapping in /tmp/list.yaml, found a sequence"
        );
    }

    #[test]
    fn key_not_found_formats() {
        let err = HomeConfigError::KeyNotFound("database.url".into());
        assert!(err.to_string().contains("database.url"));
    }
}
