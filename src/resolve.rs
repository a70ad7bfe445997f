//! The lazy resolution chain.
//!
//! [`HomeConfig`] holds four memoized stages, each computed on first access:
//!
//! 1. `config_dir`   directory the default file lives in
//! 2. `config_file`  file name inside that directory
//! 3. `config_files` ordered candidate paths, most significant first
//! 4. `config`       map loaded from the first candidate that yields one
//!
//! Each stage only pulls the stages above it when it has no override of its
//! own, so an explicit file list never touches the home directory and an
//! explicit map never touches the filesystem. Cells are `OnceCell`s from
//! `once_cell::sync`: the chain is `Sync` and every successful stage runs at
//! most once per instance, even under concurrent first access.

use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::dirs::{self, HomeDirs};
use crate::error::HomeConfigError;
use crate::file::FileParser;
use crate::naming;
use crate::ops;
use crate::types::{ConfigDir, ConfigMap};

/// Lazily resolved configuration for one owning value.
///
/// Build one with [`HomeConfig::builder`], [`HomeConfig::builder_for`] or
/// [`HomeConfig::for_source`].
pub struct HomeConfig {
    pub(crate) type_name: String,
    pub(crate) file_name_hook: Option<fn() -> Option<String>>,
    pub(crate) dir_source: ConfigDir,
    pub(crate) files_override: Option<Vec<PathBuf>>,
    pub(crate) use_ext: bool,
    pub(crate) homes: Box<dyn HomeDirs>,
    pub(crate) parser: Box<dyn FileParser>,
    pub(crate) dir: OnceCell<PathBuf>,
    pub(crate) file: OnceCell<String>,
    pub(crate) files: OnceCell<Vec<PathBuf>>,
    pub(crate) config: OnceCell<ConfigMap>,
}

impl HomeConfig {
    /// Directory holding the default config file.
    pub fn config_dir(&self) -> &Path {
        self.dir.get_or_init(|| {
            let dir = dirs::resolve_config_dir(&self.dir_source, self.homes.as_ref());
            debug!(dir = %dir.display(), "config dir resolved");
            dir
        })
    }

    /// Name of the default config file.
    ///
    /// Precedence: an explicit name from the builder, then the owning type's
    /// [`ConfigSource::config_filename`](crate::ConfigSource::config_filename),
    /// then a name derived from the type name (see [`naming::derive_file_name`]).
    pub fn config_file(&self) -> &str {
        self.file.get_or_init(|| {
            let name = self
                .file_name_hook
                .and_then(|hook| hook())
                .unwrap_or_else(|| naming::derive_file_name(&self.type_name));
            debug!(file = %name, type_name = %self.type_name, "config file name resolved");
            name
        })
    }

    /// Candidate files, most significant first.
    ///
    /// Without an explicit list this is `[config_dir / config_file]`.
    pub fn config_files(&self) -> Result<&[PathBuf], HomeConfigError> {
        self.files
            .get_or_try_init(|| match &self.files_override {
                Some(list) => list.iter().map(|p| dirs::absolutize(p)).collect(),
                None => Ok(vec![self.config_dir().join(self.config_file())]),
            })
            .map(Vec::as_slice)
    }

    /// The loaded configuration.
    ///
    /// The first candidate that parses to a non-empty map is returned whole;
    /// later candidates are never read. Missing files fall through to the
    /// next candidate, and an empty map is returned when none loads. A file
    /// that exists but fails to parse is an error, not a fall-through.
    ///
    /// A successful load is cached for the lifetime of `self`; a failed one
    /// is not.
    pub fn config(&self) -> Result<&ConfigMap, HomeConfigError> {
        self.config.get_or_try_init(|| self.load())
    }

    fn load(&self) -> Result<ConfigMap, HomeConfigError> {
        for path in self.config_files()? {
            let loaded = self
                .parser
                .load_files(std::slice::from_ref(path), self.use_ext)?;
            if let Some((source, map)) = loaded.into_iter().find(|(_, map)| !map.is_empty()) {
                debug!(path = %source.display(), keys = map.len(), "config loaded");
                return Ok(map);
            }
        }
        debug!("no config file found, using empty config");
        Ok(ConfigMap::new())
    }

    /// Look up a value by dotted key (e.g. `"database.url"`). Keys that
    /// contain dots themselves, like INI's `host.name`, are still reachable.
    pub fn get(&self, key: &str) -> Result<&Value, HomeConfigError> {
        ops::map_get(self.config()?, key).ok_or_else(|| HomeConfigError::KeyNotFound(key.into()))
    }

    /// All values as flattened `(dotted_key, display_value)` pairs.
    pub fn entries(&self) -> Result<Vec<(String, String)>, HomeConfigError> {
        Ok(ops::list_entries(self.config()?))
    }

    /// Deserialize the loaded map into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, HomeConfigError> {
        let value = Value::Object(self.config()?.clone());
        serde_json::from_value(value).map_err(|e| HomeConfigError::InvalidValue {
            key: "<root>".into(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for HomeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomeConfig")
            .field("type_name", &self.type_name)
            .field("dir_source", &self.dir_source)
            .field("files_override", &self.files_override)
            .field("use_ext", &self.use_ext)
            .field("dir", &self.dir.get())
            .field("file", &self.file.get())
            .field("files", &self.files.get())
            .field("config", &self.config.get())
            .finish_non_exhaustive()
    }
}
