use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use solc_input::cli::Cli;
use solc_input::config::Config;
use solc_input::input::{Diagnostics, InputResolver};
use solc_input::logging::init_tracing;
use solc_input::paths::OsFileSystem;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    init_tracing(&config.logging);

    let options = cli.into_options(&config);
    let work_dir = std::env::current_dir().context("failed to determine working directory")?;

    let fs = OsFileSystem;
    let resolver = InputResolver::new(&fs, &work_dir);
    let mut diagnostics = Diagnostics::new();
    let result = resolver.resolve(&options, &mut io::stdin().lock(), &mut diagnostics);

    eprint!("{diagnostics}");

    let Ok(resolved) = result else {
        return Ok(ExitCode::FAILURE);
    };

    let json = serde_json::to_string_pretty(&resolved).context("failed to serialize result")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write result")?;

    Ok(ExitCode::SUCCESS)
}
