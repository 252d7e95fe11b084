//! Input resolution for a compiler command line.
//!
//! Turns positional tokens (paths, `-`, `[context:]prefix=target` remappings)
//! plus `--base-path`-style options into uniquely named sources and the set of
//! directories a later import resolver may read from.

pub mod args;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod paths;
