//! File content loader: input plan → source map + allowed directories.

use std::io::{self, Read};

use crate::args::{InputMode, InputPlan};
use crate::input::{Diagnostics, InputError, SourceMap};
use crate::paths::{AllowedDirectories, EntryKind, FileSystem, SourceUnitNamer, STDIN_SOURCE_NAME};

/// Output of a successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadedInputs {
    pub sources: SourceMap,
    /// The JSON document in Standard JSON mode.
    pub standard_json_input: Option<String>,
    pub allowed_directories: AllowedDirectories,
}

/// Reads every planned input exactly once, in order.
pub struct FileLoader<'a> {
    fs: &'a dyn FileSystem,
    namer: &'a SourceUnitNamer,
    ignore_missing: bool,
}

impl<'a> FileLoader<'a> {
    pub fn new(fs: &'a dyn FileSystem, namer: &'a SourceUnitNamer, ignore_missing: bool) -> Self {
        Self {
            fs,
            namer,
            ignore_missing,
        }
    }

    /// Load stdin (if requested) and then each path of the plan.
    ///
    /// Missing and non-regular files are skipped with a warning when
    /// `ignore_missing` is set, and fatal otherwise. A skipped file never
    /// contributes an allowed directory.
    pub fn load(
        &self,
        plan: &InputPlan,
        stdin: &mut dyn Read,
        diagnostics: &mut Diagnostics,
    ) -> Result<LoadedInputs, InputError> {
        let mut loaded = LoadedInputs::default();

        if plan.add_stdin {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .map_err(|source| InputError::StdinReadFailed { source })?;
            let content = String::from_utf8_lossy(&buffer).into_owned();

            match plan.mode {
                InputMode::StandardJson => loaded.standard_json_input = Some(content),
                InputMode::Compiler => {
                    loaded.sources.insert(STDIN_SOURCE_NAME, content);
                }
            }
        }

        for path in &plan.paths {
            let native = self.namer.native_path(path);

            match self.fs.entry_kind(&native) {
                EntryKind::File => {}
                EntryKind::Missing if self.ignore_missing => {
                    diagnostics.warn(format!("\"{path}\" is not found. Skipping."));
                    continue;
                }
                EntryKind::Missing => return Err(InputError::NotFound { path: path.clone() }),
                EntryKind::Other if self.ignore_missing => {
                    diagnostics.warn(format!("\"{path}\" is not a valid file. Skipping."));
                    continue;
                }
                EntryKind::Other => {
                    return Err(InputError::NotAValidFile { path: path.clone() })
                }
            }

            let read_failed = |source: io::Error| InputError::ReadFailed {
                path: path.clone(),
                source,
            };
            let bytes = self.fs.read(&native).map_err(read_failed)?;
            let content = String::from_utf8_lossy(&bytes).into_owned();

            if plan.mode == InputMode::StandardJson {
                loaded.standard_json_input = Some(content);
                continue;
            }

            let name = self.namer.name(path);
            if loaded.sources.insert(name.clone(), content).is_some() {
                tracing::warn!(name = %name, path = %path, "source unit name reused, content replaced");
            } else {
                tracing::debug!(name = %name, path = %path, "source registered");
            }

            loaded
                .allowed_directories
                .allow_file(self.fs, &native)
                .map_err(read_failed)?;
        }

        if loaded.sources.is_empty() && loaded.standard_json_input.is_none() {
            return Err(InputError::AllInputsSkipped);
        }

        Ok(loaded)
    }
}
