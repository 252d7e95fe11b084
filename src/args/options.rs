//! Structured options record handed over by the option parser.

use serde::{Deserialize, Serialize};

use crate::args::InputMode;

/// Everything the input pipeline needs from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Selected by `--standard-json`.
    pub mode: InputMode,
    /// `--ignore-missing`.
    pub ignore_missing: bool,
    /// `--base-path`, as typed. Empty means unset.
    pub base_path: Option<String>,
    /// `--include-path`, as typed, in order.
    pub include_paths: Vec<String>,
    /// `--allow-paths`, split on commas.
    pub allow_paths: Vec<String>,
    /// Positional tokens: paths, remappings and `-`.
    pub tokens: Vec<String>,
}

impl InputOptions {
    /// Compiler-mode options for the given positional tokens.
    pub fn compiler<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Standard JSON options for the given positional tokens.
    pub fn standard_json<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: InputMode::StandardJson,
            ..Self::compiler(tokens)
        }
    }

    pub fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_include_path(mut self, include_path: impl Into<String>) -> Self {
        self.include_paths.push(include_path.into());
        self
    }

    pub fn with_allow_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Base path if one was given and it is not empty.
    pub fn effective_base_path(&self) -> Option<&str> {
        self.base_path.as_deref().filter(|path| !path.is_empty())
    }
}
