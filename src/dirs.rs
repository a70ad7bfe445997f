//! Directory resolution and path coercion.
//!
//! [`HomeDirs`] is the boundary to the platform: it reports the user-data and
//! home directories. [`PlatformDirs`] backs it with the `directories` crate.
//! Resolution never fails; when the platform has no answer (no `$HOME`, for
//! instance) the current working directory stands in, so callers always get a
//! location even if nothing exists there.

use std::path::{Path, PathBuf};

use crate::error::HomeConfigError;
use crate::types::ConfigDir;

/// Source of per-user directories.
pub trait HomeDirs: Send + Sync {
    /// Platform-appropriate user data directory.
    fn user_data_dir(&self) -> PathBuf;

    /// The user's home directory.
    fn home_dir(&self) -> PathBuf;
}

/// [`HomeDirs`] backed by the OS conventions (XDG on Linux, Known Folders on
/// Windows, `~/Library` on macOS).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirs;

impl HomeDirs for PlatformDirs {
    fn user_data_dir(&self) -> PathBuf {
        directories::BaseDirs::new()
            .map(|base| base.data_dir().to_path_buf())
            .unwrap_or_else(fallback_dir)
    }

    fn home_dir(&self) -> PathBuf {
        directories::UserDirs::new()
            .map(|user| user.home_dir().to_path_buf())
            .unwrap_or_else(fallback_dir)
    }
}

/// Any `Fn() -> PathBuf` answers both questions with the same directory.
impl<F> HomeDirs for F
where
    F: Fn() -> PathBuf + Send + Sync,
{
    fn user_data_dir(&self) -> PathBuf {
        self()
    }

    fn home_dir(&self) -> PathBuf {
        self()
    }
}

fn fallback_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a [`ConfigDir`] to a concrete directory.
pub fn resolve_config_dir(dir: &ConfigDir, homes: &dyn HomeDirs) -> PathBuf {
    match dir {
        ConfigDir::UserData => homes.user_data_dir(),
        ConfigDir::Home => homes.home_dir(),
        ConfigDir::Cwd => fallback_dir(),
        ConfigDir::Path(p) => p.clone(),
    }
}

/// Convert a caller-supplied string or path into an owned `PathBuf`. Every
/// path override on the builder goes through here.
pub fn to_path(raw: impl AsRef<Path>) -> PathBuf {
    raw.as_ref().to_path_buf()
}

/// Make `path` absolute against the current directory without touching the
/// filesystem (the file need not exist).
pub fn absolutize(path: &Path) -> Result<PathBuf, HomeConfigError> {
    std::path::absolute(path).map_err(|e| HomeConfigError::InvalidPath {
        path: path.to_path_buf(),
        source: e,
    })
}
