//! Allowed-directory set: the read sandbox derived from loaded files.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::fs::FileSystem;

/// Canonical directories the compiler may read from.
///
/// Only [`AllowedDirectories::allow_file`] adds entries, so the set is exactly
/// the canonical parents of the files it was fed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedDirectories {
    dirs: BTreeSet<PathBuf>,
}

impl AllowedDirectories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the real parent directory of a loaded file.
    ///
    /// The file itself is canonicalized, so a symlinked file contributes the
    /// directory of its target. Returns the directory and whether it was new.
    pub fn allow_file(&mut self, fs: &dyn FileSystem, file: &Path) -> io::Result<(PathBuf, bool)> {
        let canonical = fs.canonicalize(file)?;
        let dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(canonical);
        let inserted = self.dirs.insert(dir.clone());
        if inserted {
            tracing::debug!(dir = %dir.display(), "allowed directory");
        }
        Ok((dir, inserted))
    }

    /// Whether a canonical file path lies inside the sandbox.
    pub fn permits(&self, canonical_file: &Path) -> bool {
        let Some(parent) = canonical_file.parent() else {
            return false;
        };
        self.dirs.iter().any(|dir| parent.starts_with(dir))
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<'a> IntoIterator for &'a AllowedDirectories {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter()
    }
}
