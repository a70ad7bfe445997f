use std::fmt;
use std::path::{Path, PathBuf};

/// A loaded configuration: string keys mapped to scalars, sequences or nested maps.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Where the configuration directory comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigDir {
    /// Platform user-data directory (`~/.local/share` on Linux,
    /// `~/Library/Application Support` on macOS).
    #[default]
    UserData,
    /// The user's home directory.
    Home,
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// A file format understood by [`AnyFormat`](crate::AnyFormat).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ini,
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Order in which formats are attempted when the extension is ignored.
    pub const GUESS_ORDER: [Format; 4] = [Format::Json, Format::Toml, Format::Yaml, Format::Ini];

    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ini" | "cfg" => Some(Format::Ini),
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Pick a format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Ini => "INI",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_to_formats() {
        assert_eq!(Format::from_extension("ini"), Some(Format::Ini));
        assert_eq!(Format::from_extension("cfg"), Some(Format::Ini));
        assert_eq!(Format::from_extension("JSON"), Some(Format::Json));
        assert_eq!(Format::from_extension("yml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("yaml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("toml"), Some(Format::Toml));
        assert_eq!(Format::from_extension("xml"), None);
    }

    #[test]
    fn dotfile_extension_is_detected() {
        assert_eq!(
            Format::from_path(Path::new("/home/u/.my_class.ini")),
            Some(Format::Ini)
        );
        assert_eq!(Format::from_path(Path::new("/home/u/.profile")), None);
    }

    #[test]
    fn default_dir_is_user_data() {
        assert_eq!(ConfigDir::default(), ConfigDir::UserData);
    }
}
