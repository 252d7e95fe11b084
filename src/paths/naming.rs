//! Source unit namer: maps a CLI path to its source unit name.

use std::path::{Path, PathBuf};

use crate::paths::normalize::{normalize_cli_path, LexicalPath, PathStyle};
use crate::paths::vroot::to_virtual_root;

/// Reserved source unit name for content read from standard input.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// Derives source unit names for one invocation.
///
/// A path is named relative to the first prefix it lies in: the base path
/// (or the working directory when no base path is set), then each include
/// path. A path under none of them gets its absolute virtual-root form.
/// Naming is lexical; symlinks never change a name.
#[derive(Debug, Clone)]
pub struct SourceUnitNamer {
    style: PathStyle,
    work_dir: LexicalPath,
    base_path: Option<LexicalPath>,
    include_paths: Vec<LexicalPath>,
}

impl SourceUnitNamer {
    /// `work_dir` must be absolute and already free of symlinks.
    pub fn new(work_dir: &Path, style: PathStyle) -> Self {
        Self {
            style,
            work_dir: LexicalPath::parse(&work_dir.to_string_lossy(), style),
            base_path: None,
            include_paths: Vec::new(),
        }
    }

    /// Set the base path. An empty string leaves it unset.
    pub fn with_base_path(mut self, base_path: Option<&str>) -> Self {
        self.base_path = base_path
            .filter(|path| !path.is_empty())
            .map(|path| self.normalize(path));
        self
    }

    pub fn with_include_paths(mut self, include_paths: &[String]) -> Self {
        self.include_paths = include_paths.iter().map(|path| self.normalize(path)).collect();
        self
    }

    /// Normalize a CLI path against the working directory.
    pub fn normalize(&self, cli_path: &str) -> LexicalPath {
        normalize_cli_path(cli_path, &self.work_dir, self.style)
    }

    /// Compute the source unit name for a CLI path.
    pub fn name(&self, cli_path: &str) -> String {
        let normalized = self.normalize(cli_path);
        let primary = self.base_path.as_ref().unwrap_or(&self.work_dir);

        std::iter::once(primary)
            .chain(self.include_paths.iter())
            .find_map(|prefix| normalized.strip_prefix(prefix))
            .map(|relative| relative.to_string())
            .unwrap_or_else(|| to_virtual_root(&normalized, &self.work_dir))
    }

    /// Native path a CLI path refers to, for filesystem access.
    ///
    /// This is the raw path joined onto the working directory, not the lexical
    /// form: `..` after a symlinked directory must follow the real layout.
    pub fn native_path(&self, cli_path: &str) -> PathBuf {
        self.work_dir.to_native().join(cli_path)
    }

    pub fn work_dir(&self) -> &LexicalPath {
        &self.work_dir
    }

    pub fn base_path(&self) -> Option<&LexicalPath> {
        self.base_path.as_ref()
    }

    pub fn include_paths(&self) -> &[LexicalPath] {
        &self.include_paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namer(work_dir: &str) -> SourceUnitNamer {
        SourceUnitNamer::new(Path::new(work_dir), PathStyle::Posix)
    }

    #[test]
    fn names_relative_to_work_dir_without_base_path() {
        let namer = namer("/w");
        assert_eq!(namer.name("contract1.sol"), "contract1.sol");
        assert_eq!(namer.name("c/d/contract2.sol"), "c/d/contract2.sol");
        assert_eq!(namer.name("/w/contract3.sol"), "contract3.sol");
        assert_eq!(namer.name("/other/contract4.sol"), "/other/contract4.sol");
    }

    #[test]
    fn base_path_replaces_work_dir_as_prefix() {
        let namer = namer("/w").with_base_path(Some("/base"));
        assert_eq!(namer.name("contract1.sol"), "/w/contract1.sol");
        assert_eq!(namer.name("/base/contract5.sol"), "contract5.sol");
        assert_eq!(namer.name("/base/sub/c.sol"), "sub/c.sol");
    }

    #[test]
    fn relative_base_path_is_resolved_against_work_dir() {
        let namer = namer("/w").with_base_path(Some("base"));
        assert_eq!(namer.base_path().unwrap().to_string(), "/w/base");
        assert_eq!(namer.name("base/contract2.sol"), "contract2.sol");
        assert_eq!(namer.name("contract1.sol"), "/w/contract1.sol");
        assert_eq!(namer.name("/o/base/contract6.sol"), "/o/base/contract6.sol");
    }

    #[test]
    fn empty_base_path_is_unset() {
        let namer = namer("/w").with_base_path(Some(""));
        assert!(namer.base_path().is_none());
        assert_eq!(namer.name("a.sol"), "a.sol");
    }

    #[test]
    fn include_paths_are_tried_after_base_path() {
        let namer = namer("/w")
            .with_base_path(Some("/w/src"))
            .with_include_paths(&["/w/lib".to_string(), "/w".to_string()]);
        assert_eq!(namer.name("src/a.sol"), "a.sol");
        assert_eq!(namer.name("lib/b.sol"), "b.sol");
        assert_eq!(namer.name("test/c.sol"), "test/c.sol");
        assert_eq!(namer.name("/x/d.sol"), "/x/d.sol");
    }

    #[test]
    fn unc_paths_are_never_stripped_by_slash_rooted_prefixes() {
        let namer = namer("/tmp");
        assert_eq!(namer.name("//tmp/x/c.sol"), "//tmp/x/c.sol");
    }

    #[test]
    fn windows_root_relative_and_drive_spellings_share_a_name() {
        let namer = SourceUnitNamer::new(Path::new("C:\\w"), PathStyle::Windows);
        assert_eq!(namer.name("C:\\w\\x.sol"), "x.sol");
        assert_eq!(namer.name("\\w\\x.sol"), "x.sol");
        assert_eq!(namer.name("\\other\\y.sol"), "/other/y.sol");
        assert_eq!(namer.name("D:\\z.sol"), "/D:/z.sol");
    }

    #[test]
    fn native_path_keeps_raw_segments() {
        let namer = namer("/w");
        assert_eq!(namer.native_path("a/../b.sol"), PathBuf::from("/w/a/../b.sol"));
        assert_eq!(namer.native_path("/abs/c.sol"), PathBuf::from("/abs/c.sol"));
    }
}
