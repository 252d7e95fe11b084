//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use solc_input::args::InputOptions;
use solc_input::input::{Diagnostics, InputError, InputResolver, ResolvedInput};
use solc_input::paths::OsFileSystem;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Result of one pipeline run plus everything it would have printed on stderr.
pub struct Outcome {
    pub result: Result<ResolvedInput, InputError>,
    pub stderr: String,
}

impl Outcome {
    pub fn resolved(&self) -> &ResolvedInput {
        match &self.result {
            Ok(resolved) => resolved,
            Err(err) => panic!("expected success, got: {err}\nstderr: {}", self.stderr),
        }
    }

    pub fn source_names(&self) -> Vec<String> {
        self.resolved().sources.names().map(String::from).collect()
    }

    pub fn allowed(&self) -> BTreeSet<PathBuf> {
        self.resolved()
            .allowed_directories
            .iter()
            .map(Path::to_path_buf)
            .collect()
    }
}

/// Run the input pipeline with an explicit working directory and stdin text.
pub fn resolve_in(work_dir: &Path, options: &InputOptions, stdin: &str) -> Outcome {
    let fs = OsFileSystem;
    let resolver = InputResolver::new(&fs, work_dir);
    let mut diagnostics = Diagnostics::new();
    let result = resolver.resolve(
        options,
        &mut Cursor::new(stdin.as_bytes().to_vec()),
        &mut diagnostics,
    );
    Outcome {
        result,
        stderr: diagnostics.to_string(),
    }
}

/// Create a temp directory with a recognizable prefix.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("file-reader-test-")
        .tempdir()
        .expect("Failed to create temp dir")
}

/// Symlink-free absolute form of `path`.
pub fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).expect("Failed to canonicalize")
}

/// Create empty files (and their parent directories) for CLI paths given
/// relative to `work_dir`. Absolute paths are used as is.
pub fn create_empty_files(work_dir: &Path, paths: &[String]) {
    for path in paths {
        let full = work_dir.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full, "").expect("Failed to create file");
    }
}

/// Owned string list from string slices.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Path as a string, for building CLI tokens and expected names.
pub fn text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
