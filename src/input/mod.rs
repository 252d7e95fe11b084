//! Input resolution: options record to sources, sandbox and remappings.
//!
//! ```text
//! InputOptions → InputPlan → FileLoader → ResolvedInput
//! ```

mod diagnostics;
mod error;
mod loader;
mod sources;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::args::{build_input_plan, InputMode, InputOptions, Remapping};
use crate::paths::{weakly_canonical, AllowedDirectories, FileSystem, PathStyle, SourceUnitNamer};

pub use diagnostics::Diagnostics;
pub use error::InputError;
pub use loader::{FileLoader, LoadedInputs};
pub use sources::SourceMap;

/// Everything the compiler pipeline receives from the input stage.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedInput {
    pub mode: InputMode,
    /// Whether standard input was read.
    pub add_stdin: bool,
    /// Input paths as typed, after deduplication.
    pub paths: Vec<String>,
    pub sources: SourceMap,
    /// The JSON document in Standard JSON mode.
    pub standard_json_input: Option<String>,
    /// Canonical parents of loaded files.
    pub allowed_directories: AllowedDirectories,
    /// Directory parts of remapping targets, as typed.
    pub remapping_directories: BTreeSet<PathBuf>,
    /// `--allow-paths` entries, as typed.
    pub allow_paths: Vec<PathBuf>,
    pub remappings: Vec<Remapping>,
    /// Normalized base path.
    pub base_path: Option<String>,
    /// Normalized include paths.
    pub include_paths: Vec<String>,
}

impl ResolvedInput {
    /// Every directory the later import resolver may read from.
    pub fn sandbox(&self) -> impl Iterator<Item = &Path> {
        self.allowed_directories
            .iter()
            .chain(self.remapping_directories.iter().map(PathBuf::as_path))
            .chain(self.allow_paths.iter().map(PathBuf::as_path))
    }
}

/// Runs the input pipeline for one invocation.
///
/// The working directory is fixed at construction; nothing reads the process
/// working directory afterwards.
pub struct InputResolver<'a> {
    fs: &'a dyn FileSystem,
    work_dir: PathBuf,
    style: PathStyle,
}

impl<'a> InputResolver<'a> {
    /// `work_dir` is weakly canonicalized so `..` never has to look through a
    /// symlinked ancestor of the working directory.
    pub fn new(fs: &'a dyn FileSystem, work_dir: &Path) -> Self {
        Self {
            fs,
            work_dir: weakly_canonical(fs, work_dir),
            style: PathStyle::native(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve `options`, reading stdin from `stdin` if requested.
    ///
    /// Warnings are appended to `diagnostics` as they occur. On failure the
    /// error is appended last, so `diagnostics` always holds the full stderr
    /// content of the invocation.
    pub fn resolve(
        &self,
        options: &InputOptions,
        stdin: &mut dyn Read,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResolvedInput, InputError> {
        self.try_resolve(options, stdin, diagnostics)
            .inspect_err(|err| diagnostics.error(err))
    }

    fn try_resolve(
        &self,
        options: &InputOptions,
        stdin: &mut dyn Read,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResolvedInput, InputError> {
        let plan = build_input_plan(options)?;

        let namer = SourceUnitNamer::new(&self.work_dir, self.style)
            .with_base_path(options.effective_base_path())
            .with_include_paths(&options.include_paths);

        let loaded =
            FileLoader::new(self.fs, &namer, options.ignore_missing).load(&plan, stdin, diagnostics)?;

        tracing::info!(
            mode = ?plan.mode,
            sources = loaded.sources.len(),
            allowed = loaded.allowed_directories.len(),
            "inputs resolved"
        );

        Ok(ResolvedInput {
            mode: plan.mode,
            add_stdin: plan.add_stdin,
            paths: plan.paths,
            sources: loaded.sources,
            standard_json_input: loaded.standard_json_input,
            allowed_directories: loaded.allowed_directories,
            remapping_directories: plan.remapping_directories,
            allow_paths: options.allow_paths.iter().map(PathBuf::from).collect(),
            remappings: plan.remappings,
            base_path: namer.base_path().map(ToString::to_string),
            include_paths: namer.include_paths().iter().map(ToString::to_string).collect(),
        })
    }
}
