//! Filesystem access used by the input pipeline.
//!
//! Everything that touches the disk goes through [`FileSystem`] so the rest of
//! the pipeline stays platform-agnostic.

use std::io;
use std::path::{Component, Path, PathBuf};

/// What a path refers to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing exists at the path (or it cannot be inspected).
    Missing,
    /// A regular file, after following symlinks.
    File,
    /// Anything else: directory, socket, device...
    Other,
}

/// Native filesystem capability.
pub trait FileSystem {
    /// Resolve every symlink and `..` in `path`. Fails if it does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Classify `path`, following symlinks.
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn entry_kind(&self, path: &Path) -> EntryKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(_) => EntryKind::Missing,
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Canonicalize the longest existing prefix of `path` and append the rest.
///
/// Never fails: if no prefix can be canonicalized the path is returned as is.
pub fn weakly_canonical(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    if let Ok(canonical) = fs.canonicalize(path) {
        return canonical;
    }

    let mut existing = path.to_path_buf();
    let mut rest: Vec<Component<'_>> = Vec::new();
    for component in path.components().rev() {
        if !existing.pop() {
            break;
        }
        rest.push(component);
        if let Ok(mut canonical) = fs.canonicalize(&existing) {
            for component in rest.iter().rev() {
                match component {
                    Component::ParentDir => {
                        canonical.pop();
                    }
                    Component::CurDir => {}
                    other => canonical.push(other.as_os_str()),
                }
            }
            return canonical;
        }
    }

    path.to_path_buf()
}
