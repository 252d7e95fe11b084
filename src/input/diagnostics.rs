//! Diagnostic lines destined for stderr.

use std::fmt;

use crate::input::InputError;

/// Ordered diagnostic lines of one invocation.
///
/// Warnings are pushed while the pipeline runs; a terminal error is appended
/// last. [`fmt::Display`] renders the exact stderr content, one line each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    lines: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.lines.push(message);
    }

    /// Append the terminal error. Multi-line messages become several lines.
    pub fn error(&mut self, error: &InputError) {
        tracing::error!("{error}");
        self.lines.extend(error.to_string().lines().map(str::to_string));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_warnings_then_error() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("\"a.sol\" is not found. Skipping.");
        diagnostics.error(&InputError::AllInputsSkipped);

        assert_eq!(
            diagnostics.to_string(),
            "\"a.sol\" is not found. Skipping.\n\
             All specified input files either do not exist or are not regular files.\n"
        );
    }

    #[test]
    fn two_line_errors_become_two_lines() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error(&InputError::TooManyStandardJsonInputs);
        assert_eq!(diagnostics.lines().len(), 2);
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Diagnostics::new().to_string(), "");
    }
}
