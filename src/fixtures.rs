#[cfg(test)]
pub mod test {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::dirs::HomeDirs;
    use crate::error::HomeConfigError;
    use crate::file::{AnyFormat, FileParser};
    use crate::types::ConfigMap;

    /// [`FileParser`] that counts calls and delegates to [`AnyFormat`].
    #[derive(Debug, Clone, Default)]
    pub struct CountingParser {
        calls: Arc<AtomicUsize>,
        paths_seen: Arc<AtomicUsize>,
    }

    impl CountingParser {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn paths_seen(&self) -> usize {
            self.paths_seen.load(Ordering::SeqCst)
        }
    }

    impl FileParser for CountingParser {
        fn load_files(
            &self,
            paths: &[PathBuf],
            use_ext: bool,
        ) -> Result<Vec<(PathBuf, ConfigMap)>, HomeConfigError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.paths_seen.fetch_add(paths.len(), Ordering::SeqCst);
            AnyFormat.load_files(paths, use_ext)
        }
    }

    /// [`HomeDirs`] pointing at a fixed directory, counting lookups.
    #[derive(Debug, Clone)]
    pub struct FixedHome {
        dir: PathBuf,
        lookups: Arc<AtomicUsize>,
    }

    impl FixedHome {
        pub fn new(dir: &Path) -> Self {
            Self {
                dir: dir.to_path_buf(),
                lookups: Arc::default(),
            }
        }

        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl HomeDirs for FixedHome {
        fn user_data_dir(&self) -> PathBuf {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.dir.clone()
        }

        fn home_dir(&self) -> PathBuf {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.dir.join("home")
        }
    }

    /// Write `content` to `dir/name` and return the full path.
    pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}
