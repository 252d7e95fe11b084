//! Command-line option parser.

use std::path::PathBuf;

use clap::Parser;

use crate::args::{InputMode, InputOptions};
use crate::config::Config;

/// Resolve compiler inputs into named sources and a read sandbox.
#[derive(Debug, Parser)]
#[command(name = "solc-input", version, about)]
pub struct Cli {
    /// Read a single Standard JSON document from a file or stdin
    #[arg(long)]
    pub standard_json: bool,

    /// Skip missing or non-regular input files instead of failing
    #[arg(long)]
    pub ignore_missing: bool,

    /// Directory that source unit names are made relative to
    #[arg(long, value_name = "PATH")]
    pub base_path: Option<String>,

    /// Extra directory to strip from source unit names (repeatable)
    #[arg(long = "include-path", value_name = "PATH")]
    pub include_paths: Vec<String>,

    /// Comma-separated directories added to the read sandbox
    #[arg(long, value_name = "PATHS", value_delimiter = ',')]
    pub allow_paths: Vec<String>,

    /// Config file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input files, `-` for stdin and `[context:]prefix=target` remappings
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

impl Cli {
    /// Merge with config defaults. Flags win; lists append after config values.
    pub fn into_options(self, config: &Config) -> InputOptions {
        let defaults = &config.input;

        let mode = if self.standard_json {
            InputMode::StandardJson
        } else {
            InputMode::Compiler
        };

        let mut include_paths = defaults.include_paths.clone();
        include_paths.extend(self.include_paths);
        let mut allow_paths = defaults.allow_paths.clone();
        allow_paths.extend(self.allow_paths);

        InputOptions {
            mode,
            ignore_missing: self.ignore_missing || defaults.ignore_missing,
            base_path: self.base_path.or_else(|| defaults.base_path.clone()),
            include_paths,
            allow_paths,
            tokens: self.inputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputDefaults;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("solc-input").chain(args.iter().copied()))
            .expect("valid command line")
    }

    #[test]
    fn positionals_keep_order_and_dash() {
        let cli = parse(&["a=b", "x.sol", "-", "--ignore-missing", "y.sol"]);
        assert!(cli.ignore_missing);
        assert_eq!(cli.inputs, vec!["a=b", "x.sol", "-", "y.sol"]);
    }

    #[test]
    fn base_path_accepts_equals_form() {
        let cli = parse(&["--standard-json", "--base-path=/tmp/base"]);
        let options = cli.into_options(&Config::default());
        assert_eq!(options.mode, InputMode::StandardJson);
        assert_eq!(options.base_path.as_deref(), Some("/tmp/base"));
        assert!(options.tokens.is_empty());
    }

    #[test]
    fn allow_paths_split_on_commas() {
        let cli = parse(&["--allow-paths", "a,b/c", "x.sol"]);
        assert_eq!(cli.allow_paths, vec!["a", "b/c"]);
    }

    #[test]
    fn flags_override_config_defaults() {
        let config = Config {
            input: InputDefaults {
                ignore_missing: true,
                base_path: Some("from-config".into()),
                include_paths: vec!["lib".into()],
                allow_paths: vec!["shared".into()],
            },
            ..Config::default()
        };

        let options = parse(&["--base-path", "cli", "--include-path", "deps", "x.sol"])
            .into_options(&config);
        assert!(options.ignore_missing);
        assert_eq!(options.base_path.as_deref(), Some("cli"));
        assert_eq!(options.include_paths, vec!["lib", "deps"]);
        assert_eq!(options.allow_paths, vec!["shared"]);
    }
}
