use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::HomeConfigError;
use crate::resolve::HomeConfig;
use crate::types::ConfigMap;

/// Gives a type a lazily loaded home-directory configuration.
///
/// Implementors embed a [`HomeConfig`] (usually built with
/// [`HomeConfig::for_source::<Self>()`](HomeConfig::for_source)) and expose it
/// through [`home_config`](Self::home_config); everything else is provided.
///
/// ```ignore
/// struct Server {
///     home: HomeConfig,
/// }
///
/// impl ConfigSource for Server {
///     fn home_config(&self) -> &HomeConfig {
///         &self.home
///     }
/// }
///
/// let server = Server { home: HomeConfig::for_source::<Server>() };
/// let port = server.config_value("server.port")?;
/// ```
pub trait ConfigSource: Sized + 'static {
    /// File name to use instead of the one derived from the type name.
    fn config_filename() -> Option<String> {
        None
    }

    fn home_config(&self) -> &HomeConfig;

    fn config_dir(&self) -> &Path {
        self.home_config().config_dir()
    }

    fn config_file(&self) -> &str {
        self.home_config().config_file()
    }

    fn config_files(&self) -> Result<&[PathBuf], HomeConfigError> {
        self.home_config().config_files()
    }

    fn config(&self) -> Result<&ConfigMap, HomeConfigError> {
        self.home_config().config()
    }

    fn config_value(&self, key: &str) -> Result<&Value, HomeConfigError> {
        self.home_config().get(key)
    }
}
