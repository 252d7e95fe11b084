use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied underneath command-line input options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Skip missing or non-regular input files instead of failing.
    #[serde(default)]
    pub ignore_missing: bool,
    /// Base path used when `--base-path` is not given.
    #[serde(default)]
    pub base_path: Option<String>,
    /// Include paths placed before any `--include-path` values.
    #[serde(default)]
    pub include_paths: Vec<String>,
    /// Extra sandbox directories placed before any `--allow-paths` values.
    #[serde(default)]
    pub allow_paths: Vec<String>,
}

/// Log output settings. Logging is only active when `SOLC_INPUT_LOG` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
