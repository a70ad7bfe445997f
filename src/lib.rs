//! Lazily loaded configuration from dotfiles in the user's home directory.
//!
//! Embed a [`HomeConfig`] in a type, implement [`ConfigSource`], and the type
//! gains a configuration map that is read the first time it is asked for:
//!
//! ```ignore
//! struct Server {
//!     home: HomeConfig,
//! }
//!
//! impl ConfigSource for Server {
//!     fn home_config(&self) -> &HomeConfig {
//!         &self.home
//!     }
//! }
//!
//! let server = Server { home: HomeConfig::for_source::<Server>() };
//! let config = server.config()?;
//! ```
//!
//! For a type at `my_app::Server` that reads
//! `~/.local/share/.my_app_server.ini` (the platform user-data directory on
//! Linux) and hands back its contents as a [`ConfigMap`].
//!
//! # The resolution chain
//!
//! Four values are resolved in order, each on first access and each cached
//! for the life of the [`HomeConfig`]:
//!
//! ```text
//! config_dir     platform user-data dir, or an explicit directory
//!      ↓
//! config_file    .<type_name>.ini, or ConfigSource::config_filename(),
//!      ↓         or an explicit name
//! config_files   [config_dir / config_file], or an explicit list
//!      ↓
//! config         first file in config_files that loads, or {}
//! ```
//!
//! Every stage can be overridden on the [`HomeConfigBuilder`], and an
//! override short-circuits everything above it: an explicit file list never
//! looks up the home directory; an explicit map never touches the disk.
//!
//! # Default file name
//!
//! The name is derived from the type's path as reported by
//! [`std::any::type_name`]: lower-cased, `::` replaced by `_`, wrapped as a
//! dotfile with an `.ini` extension. `My::App::Server` becomes
//! `.my_app_server.ini`. Implement [`ConfigSource::config_filename`] to pick a
//! fixed name instead.
//!
//! # First file wins
//!
//! Candidates are tried in order and the first one that parses to a non-empty
//! map is the whole configuration. There is no key-by-key merge; later files
//! are not even opened. Missing and empty files are skipped.
//!
//! # Formats
//!
//! [`AnyFormat`] reads INI, JSON, YAML and TOML, picking the format from the
//! file extension (see [`Format`]). Turn that off with
//! [`use_ext(false)`](HomeConfigBuilder::use_ext) and every format is tried
//! until one produces a map.
//!
//! # Error handling
//!
//! All fallible operations return [`HomeConfigError`]. A file that is absent
//! is not an error. A file that exists but cannot be parsed is: loading stops
//! with [`HomeConfigError::ParseError`] naming the path and the format,
//! rather than quietly falling through to the next candidate.
//!
//! # Logging
//!
//! Stage resolution and skipped files are reported as `tracing` events at
//! `debug` and `trace` level. Install a subscriber to see them.

pub mod error;
pub mod types;

mod builder;
mod dirs;
mod file;
mod naming;
mod ops;
mod resolve;
mod source;

#[cfg(test)]
mod fixtures;

pub use builder::HomeConfigBuilder;
pub use dirs::{HomeDirs, PlatformDirs, absolutize, to_path};
pub use error::HomeConfigError;
pub use file::{AnyFormat, FileParser};
pub use naming::derive_file_name;
pub use resolve::HomeConfig;
pub use source::ConfigSource;
pub use types::{ConfigDir, ConfigMap, Format};
