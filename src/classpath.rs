//! The code-search path assembled from resolved artifacts.

use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsString;

/// Ordered, de-duplicated list of artifact files.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use jarstrap::classpath::Classpath;
///
/// let mut classpath = Classpath::new();
/// classpath.push(Utf8PathBuf::from("/repo/a.jar"));
/// classpath.push(Utf8PathBuf::from("/repo/a.jar"));
/// assert_eq!(classpath.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath(Vec<Utf8PathBuf>);

impl Classpath {
    /// An empty classpath.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry unless it is already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn push(&mut self, entry: Utf8PathBuf) -> bool {
        if self.0.contains(&entry) {
            return false;
        }
        self.0.push(entry);
        true
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Utf8PathBuf] {
        &self.0
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.0.iter().map(Utf8PathBuf::as_path)
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the classpath is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join entries with the platform path-list separator.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry contains the separator itself.
    pub fn join(&self) -> Result<OsString, std::env::JoinPathsError> {
        std::env::join_paths(self.iter().map(Utf8Path::as_std_path))
    }
}

impl Extend<Utf8PathBuf> for Classpath {
    fn extend<I: IntoIterator<Item = Utf8PathBuf>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_first_insertion_order() {
        let mut classpath = Classpath::new();
        classpath.extend([
            Utf8PathBuf::from("b.jar"),
            Utf8PathBuf::from("a.jar"),
            Utf8PathBuf::from("b.jar"),
        ]);
        let entries: Vec<&str> = classpath.iter().map(Utf8Path::as_str).collect();
        assert_eq!(entries, ["b.jar", "a.jar"]);
    }

    #[cfg(unix)]
    #[test]
    fn join_uses_platform_separator() {
        let mut classpath = Classpath::new();
        classpath.extend([Utf8PathBuf::from("/r/a.jar"), Utf8PathBuf::from("/r/b.jar")]);
        let joined = classpath.join().expect("joinable entries");
        assert_eq!(joined, OsString::from("/r/a.jar:/r/b.jar"));
    }

    #[test]
    fn empty_classpath_joins_to_empty_string() {
        let joined = Classpath::new().join().expect("joinable entries");
        assert!(joined.is_empty());
    }
}
