//! Command-line input handling.
//!
//! ```text
//! Positional tokens → Classify → Enforce mode → InputPlan
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod classifier;
mod options;
mod pipeline;
mod remapping;

use serde::{Deserialize, Serialize};

pub use classifier::{classify, ClassifiedArg, ClassifyResult, STDIN_MARKER};
pub use options::InputOptions;
pub use pipeline::{build_input_plan, InputPlan};
pub use remapping::Remapping;

/// How inputs are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputMode {
    /// Source files, optional stdin, optional remappings.
    #[default]
    Compiler,
    /// One JSON document from a single file or stdin. Terminal once selected.
    StandardJson,
}
