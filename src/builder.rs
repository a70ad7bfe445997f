use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::dirs::{self, HomeDirs, PlatformDirs};
use crate::file::{AnyFormat, FileParser};
use crate::resolve::HomeConfig;
use crate::source::ConfigSource;
use crate::types::{ConfigDir, ConfigMap};

impl HomeConfig {
    /// Start a builder for a value whose type is named `type_name`
    /// (e.g. `"My::App::Server"`), used to derive the default file name.
    pub fn builder(type_name: &str) -> HomeConfigBuilder {
        HomeConfigBuilder::new(type_name.to_string(), None)
    }

    /// Start a builder for `T`, taking its type name and its
    /// [`ConfigSource::config_filename`].
    pub fn builder_for<T: ConfigSource>() -> HomeConfigBuilder {
        HomeConfigBuilder::new(
            std::any::type_name::<T>().to_string(),
            Some(T::config_filename as fn() -> Option<String>),
        )
    }

    /// A `HomeConfig` for `T` with every default in place.
    pub fn for_source<T: ConfigSource>() -> HomeConfig {
        Self::builder_for::<T>().build()
    }
}

/// Builder for a [`HomeConfig`].
///
/// Every setter is an override for one stage of the chain; stages left alone
/// fall back to their defaults when first accessed:
///
/// - [`config_dir()`](Self::config_dir) / [`search_dir()`](Self::search_dir):
///   where the file lives (default: [`ConfigDir::UserData`]).
/// - [`file_name()`](Self::file_name): the file's name (default: derived from
///   the type name).
/// - [`config_files()`](Self::config_files): the full candidate list, which
///   makes the two above irrelevant.
/// - [`config()`](Self::config): the map itself; nothing is read from disk.
pub struct HomeConfigBuilder {
    type_name: String,
    file_name_hook: Option<fn() -> Option<String>>,
    dir_source: ConfigDir,
    file_name: Option<String>,
    files: Option<Vec<PathBuf>>,
    config: Option<ConfigMap>,
    use_ext: bool,
    homes: Option<Box<dyn HomeDirs>>,
    parser: Option<Box<dyn FileParser>>,
}

impl HomeConfigBuilder {
    fn new(type_name: String, file_name_hook: Option<fn() -> Option<String>>) -> Self {
        Self {
            type_name,
            file_name_hook,
            dir_source: ConfigDir::default(),
            file_name: None,
            files: None,
            config: None,
            use_ext: true,
            homes: None,
            parser: None,
        }
    }

    /// Use an explicit config directory.
    pub fn config_dir(self, dir: impl AsRef<Path>) -> Self {
        self.search_dir(ConfigDir::Path(dirs::to_path(dir)))
    }

    /// Choose where the config directory comes from.
    pub fn search_dir(mut self, dir: ConfigDir) -> Self {
        self.dir_source = dir;
        self
    }

    /// Use an explicit file name inside the config directory.
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Replace the candidate list entirely. Entries are listed most
    /// significant first and made absolute on first access.
    pub fn config_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files = Some(files.into_iter().map(dirs::to_path).collect());
        self
    }

    /// Supply the configuration map directly.
    pub fn config(mut self, config: ConfigMap) -> Self {
        self.config = Some(config);
        self
    }

    /// Pick each file's format from its extension (default: `true`). When
    /// off, every format is tried in turn.
    pub fn use_ext(mut self, use_ext: bool) -> Self {
        self.use_ext = use_ext;
        self
    }

    /// Replace the platform directory lookup (default: [`PlatformDirs`]).
    pub fn home_dirs(mut self, homes: impl HomeDirs + 'static) -> Self {
        self.homes = Some(Box::new(homes));
        self
    }

    /// Replace the file parser (default: [`AnyFormat`]).
    pub fn parser(mut self, parser: impl FileParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    pub fn build(self) -> HomeConfig {
        HomeConfig {
            type_name: self.type_name,
            file_name_hook: self.file_name_hook,
            dir_source: self.dir_source,
            files_override: self.files,
            use_ext: self.use_ext,
            homes: self.homes.unwrap_or_else(|| Box::new(PlatformDirs)),
            parser: self.parser.unwrap_or_else(|| Box::new(AnyFormat)),
            dir: OnceCell::new(),
            file: self.file_name.map(OnceCell::with_value).unwrap_or_default(),
            files: OnceCell::new(),
            config: self.config.map(OnceCell::with_value).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = HomeConfig::builder("My::Class");
        assert_eq!(builder.type_name, "My::Class");
        assert_eq!(builder.dir_source, ConfigDir::UserData);
        assert!(builder.use_ext);
        assert!(builder.file_name.is_none());
        assert!(builder.files.is_none());
        assert!(builder.config.is_none());
        assert!(builder.file_name_hook.is_none());
    }

    #[test]
    fn config_dir_sets_path_source() {
        let builder = HomeConfig::builder("App").config_dir("/etc/myapp");
        assert_eq!(
            builder.dir_source,
            ConfigDir::Path(PathBuf::from("/etc/myapp"))
        );
    }

    #[test]
    fn file_name_prefills_stage() {
        let hc = HomeConfig::builder("App").file_name("app.json").build();
        assert_eq!(hc.file.get().map(String::as_str), Some("app.json"));
        assert!(hc.dir.get().is_none());
    }

    #[test]
    fn config_prefills_stage() {
        let hc = HomeConfig::builder("App").config(ConfigMap::new()).build();
        assert!(hc.config.get().is_some());
        assert!(hc.files.get().is_none());
    }

    #[test]
    fn config_files_keeps_order() {
        let builder = HomeConfig::builder("App").config_files(["/b.ini", "/a.ini"]);
        assert_eq!(
            builder.files,
            Some(vec![PathBuf::from("/b.ini"), PathBuf::from("/a.ini")])
        );
    }

    #[test]
    fn use_ext_can_be_disabled() {
        let hc = HomeConfig::builder("App").use_ext(false).build();
        assert!(!hc.use_ext);
    }

    #[test]
    fn nothing_is_resolved_at_build_time() {
        let hc = HomeConfig::builder("App").build();
        assert!(hc.dir.get().is_none());
        assert!(hc.file.get().is_none());
        assert!(hc.files.get().is_none());
        assert!(hc.config.get().is_none());
    }
}
