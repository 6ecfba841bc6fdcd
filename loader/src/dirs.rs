//! Platform directory resolution.
//!
//! Wraps `directories-next` behind a trait so tests can point the local
//! repository at a temporary directory.

use camino::Utf8PathBuf;
use std::path::PathBuf;

/// Source of platform-specific base directories.
pub trait BaseDirs {
    /// The user's local data directory (e.g. `~/.local/share` on Linux).
    fn data_local_dir(&self) -> Option<PathBuf>;
}

/// Base directories of the current user, as reported by the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn data_local_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}

/// Default location of the local artifact repository.
///
/// Returns `None` when the platform reports no data directory or the path is
/// not valid UTF-8.
#[must_use]
pub fn default_repository_dir(dirs: &dyn BaseDirs) -> Option<Utf8PathBuf> {
    dirs.data_local_dir()
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .map(|p| p.join("jarstrap").join("repository"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDirs(Option<PathBuf>);

    impl BaseDirs for FixedDirs {
        fn data_local_dir(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn repository_dir_nests_under_data_dir() {
        let dirs = FixedDirs(Some(PathBuf::from("/data")));
        let dir = default_repository_dir(&dirs).expect("data dir available");
        assert_eq!(dir, Utf8PathBuf::from("/data").join("jarstrap").join("repository"));
    }

    #[test]
    fn missing_data_dir_yields_none() {
        assert_eq!(default_repository_dir(&FixedDirs(None)), None);
    }

    #[test]
    fn system_dirs_resolve_when_home_exists() {
        // Containers without a home directory legitimately report nothing.
        let Some(dir) = default_repository_dir(&SystemBaseDirs) else {
            return;
        };
        assert!(dir.as_str().contains("jarstrap"));
    }
}
