//! Token classifier: positional tokens → classified tokens.

use crate::args::remapping::Remapping;

/// The stdin marker token.
pub const STDIN_MARKER: &str = "-";

/// A classified positional token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// Well-formed import remapping.
    Remapping(Remapping),
    /// Contains `=` but has no prefix. Rejected later by the mode controller.
    InvalidRemapping(String),
    /// The `-` marker: read standard input.
    Stdin,
    /// Anything else is an input path, kept exactly as typed.
    Path(String),
}

/// Result of classifying positional tokens.
#[derive(Debug, Clone, Default)]
pub struct ClassifyResult {
    /// Classified tokens in command-line order.
    pub args: Vec<ClassifiedArg>,
}

impl ClassifyResult {
    pub fn remappings(&self) -> impl Iterator<Item = &Remapping> {
        self.args.iter().filter_map(|arg| match arg {
            ClassifiedArg::Remapping(remapping) => Some(remapping),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|arg| match arg {
            ClassifiedArg::Path(path) => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn wants_stdin(&self) -> bool {
        self.args.iter().any(|arg| matches!(arg, ClassifiedArg::Stdin))
    }
}

/// Classify positional tokens. Classification is purely syntactic.
pub fn classify(tokens: &[String]) -> ClassifyResult {
    let args = tokens
        .iter()
        .map(|token| {
            if token == STDIN_MARKER {
                ClassifiedArg::Stdin
            } else if Remapping::is_remapping(token) {
                match Remapping::parse(token) {
                    Some(remapping) => ClassifiedArg::Remapping(remapping),
                    None => ClassifiedArg::InvalidRemapping(token.clone()),
                }
            } else {
                ClassifiedArg::Path(token.clone())
            }
        })
        .collect();

    ClassifyResult { args }
}
