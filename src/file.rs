//! Reading and parsing config files.
//!
//! [`FileParser`] is the boundary the resolver loads through. [`AnyFormat`] is
//! the stock implementation: it reads each path and parses it as INI, JSON,
//! YAML or TOML, into a [`ConfigMap`].
//!
//! # Format selection
//!
//! With `use_ext` on, the extension picks the format (see
//! [`Format::from_extension`]); files with an extension no format claims are
//! skipped. With `use_ext` off, formats are tried in [`Format::GUESS_ORDER`]
//! and the first one producing a mapping wins.
//!
//! # What counts as loadable
//!
//! Missing files and empty documents are skipped silently. Only I/O errors
//! other than NotFound, and content that exists but does not parse into a
//! mapping, are propagated.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::HomeConfigError;
use crate::types::{ConfigMap, Format};

/// Loads config files into maps.
pub trait FileParser: Send + Sync {
    /// Load every loadable file in `paths`, in order. Paths that do not exist
    /// are left out of the result.
    fn load_files(
        &self,
        paths: &[PathBuf],
        use_ext: bool,
    ) -> Result<Vec<(PathBuf, ConfigMap)>, HomeConfigError>;
}

/// [`FileParser`] for INI, JSON, YAML and TOML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFormat;

impl FileParser for AnyFormat {
    fn load_files(
        &self,
        paths: &[PathBuf],
        use_ext: bool,
    ) -> Result<Vec<(PathBuf, ConfigMap)>, HomeConfigError> {
        let mut loaded = Vec::new();
        for path in paths {
            let format = if use_ext {
                match Format::from_path(path) {
                    Some(format) => Some(format),
                    None => {
                        debug!(path = %path.display(), "no format for extension, skipping");
                        continue;
                    }
                }
            } else {
                None
            };

            let Some(content) = read_optional(path)? else {
                trace!(path = %path.display(), "config file not found");
                continue;
            };

            let parsed = match format {
                Some(format) => parse_as(format, &content, path)?,
                None => parse_guess(&content, path)?,
            };
            if let Some(map) = parsed {
                loaded.push((path.clone(), map));
            }
        }
        Ok(loaded)
    }
}

/// Read a file, treating NotFound as `None`.
fn read_optional(path: &Path) -> Result<Option<String>, HomeConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HomeConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parse `content` as `format`. Blank documents yield `None`.
pub fn parse_as(
    format: Format,
    content: &str,
    path: &Path,
) -> Result<Option<ConfigMap>, HomeConfigError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let value = parse_value(format, content).map_err(|reason| HomeConfigError::ParseError {
        path: path.to_path_buf(),
        format,
        reason,
    })?;
    into_map(value, path)
}

/// Try each format in [`Format::GUESS_ORDER`] until one yields a mapping.
fn parse_guess(content: &str, path: &Path) -> Result<Option<ConfigMap>, HomeConfigError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    for format in Format::GUESS_ORDER {
        match parse_value(format, content) {
            Ok(Value::Object(map)) => {
                trace!(path = %path.display(), %format, "format guessed");
                return Ok(Some(map));
            }
            Ok(_) | Err(_) => continue,
        }
    }
    Err(HomeConfigError::UnrecognizedFormat {
        path: path.to_path_buf(),
    })
}

fn parse_value(format: Format, content: &str) -> Result<Value, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        Format::Ini => parse_ini(content),
    }
}

/// INI keeps section and key names exactly as written. Keys outside any
/// section land at the top level; each section becomes a nested map of
/// string values. Repeated sections merge, later keys winning. A section
/// named like a top-level key is an error.
fn parse_ini(content: &str) -> Result<Value, String> {
    let ini = ini::Ini::load_from_str(content).map_err(|e| e.to_string())?;
    let mut root = ConfigMap::new();
    for (section, props) in ini.iter() {
        let target = match section {
            Some(name) => root
                .entry(name.to_string())
                .or_insert_with(|| Value::Object(ConfigMap::new()))
                .as_object_mut()
                .ok_or_else(|| format!("section [{name}] clashes with a top-level key"))?,
            None => &mut root,
        };
        for (key, value) in props.iter() {
            target.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    Ok(Value::Object(root))
}

fn into_map(value: Value, path: &Path) -> Result<Option<ConfigMap>, HomeConfigError> {
    let found = match value {
        Value::Object(map) => return Ok(Some(map)),
        Value::Null => return Ok(None),
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
    };
    Err(HomeConfigError::NotAMapping {
        path: path.to_path_buf(),
        found,
    })
}
