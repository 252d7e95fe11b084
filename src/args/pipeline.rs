//! Input mode controller: classified tokens + mode → validated input plan.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::args::classifier::{classify, ClassifiedArg};
use crate::args::options::InputOptions;
use crate::args::remapping::Remapping;
use crate::args::InputMode;
use crate::input::InputError;

/// What to load, after every mode constraint has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPlan {
    pub mode: InputMode,
    /// Input paths as typed, duplicates removed, first occurrence kept.
    pub paths: Vec<String>,
    /// Read standard input. Always set in Standard JSON mode without a file.
    pub add_stdin: bool,
    /// Remappings in command-line order.
    pub remappings: Vec<Remapping>,
    /// Directory parts of remapping targets, as typed.
    pub remapping_directories: BTreeSet<PathBuf>,
}

/// Build the input plan from parsed options.
///
/// Remapping errors are reported in token order, before the file-count check,
/// so nothing is ever loaded for an invocation that violates its mode.
pub fn build_input_plan(options: &InputOptions) -> Result<InputPlan, InputError> {
    if !options.include_paths.is_empty() && options.effective_base_path().is_none() {
        return Err(InputError::IncludePathWithoutBasePath);
    }

    // Stage 1: Classify tokens
    let classified = classify(&options.tokens);

    // Stage 2: Collect, enforcing the remapping rules as we go
    let mut plan = InputPlan {
        mode: options.mode,
        paths: Vec::new(),
        add_stdin: false,
        remappings: Vec::new(),
        remapping_directories: BTreeSet::new(),
    };

    for arg in classified.args {
        match arg {
            ClassifiedArg::InvalidRemapping(token) => {
                return Err(InputError::InvalidRemapping { token });
            }
            ClassifiedArg::Remapping(_) if options.mode == InputMode::StandardJson => {
                return Err(InputError::RemappingInStandardJson);
            }
            ClassifiedArg::Remapping(remapping) => {
                if let Some(dir) = remapping.target_directory() {
                    plan.remapping_directories.insert(dir);
                }
                plan.remappings.push(remapping);
            }
            ClassifiedArg::Stdin => plan.add_stdin = true,
            ClassifiedArg::Path(path) => {
                if !plan.paths.contains(&path) {
                    plan.paths.push(path);
                }
            }
        }
    }

    // Stage 3: Mode-specific input count
    match options.mode {
        InputMode::StandardJson => match (plan.paths.len(), plan.add_stdin) {
            (0, _) => plan.add_stdin = true,
            (1, false) => {}
            _ => return Err(InputError::TooManyStandardJsonInputs),
        },
        InputMode::Compiler => {
            if plan.paths.is_empty() && !plan.add_stdin {
                return Err(InputError::NoInputFiles);
            }
        }
    }

    tracing::debug!(
        mode = ?plan.mode,
        paths = plan.paths.len(),
        stdin = plan.add_stdin,
        remappings = plan.remappings.len(),
        "input plan built"
    );

    Ok(plan)
}
