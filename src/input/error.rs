//! Errors of the input pipeline.
//!
//! The `Display` text of each variant is the exact diagnostic printed on
//! stderr, so the wording is part of the interface.

use std::io;

use thiserror::Error;

/// Every way input resolution can fail.
#[derive(Debug, Error)]
pub enum InputError {
    #[error(
        "Too many input files for --standard-json.\n\
         Please either specify a single file name or provide its content on standard input."
    )]
    TooManyStandardJsonInputs,

    #[error(
        "Import remappings are not accepted on the command line in Standard JSON mode.\n\
         Please put them under 'settings.remappings' in the JSON input."
    )]
    RemappingInStandardJson,

    #[error("Invalid remapping: \"{token}\".")]
    InvalidRemapping { token: String },

    #[error(
        "No input files given. If you wish to use the standard input please specify \"-\" explicitly."
    )]
    NoInputFiles,

    #[error("--include-path option requires a non-empty base path.")]
    IncludePathWithoutBasePath,

    #[error("\"{path}\" is not found.")]
    NotFound { path: String },

    #[error("\"{path}\" is not a valid file.")]
    NotAValidFile { path: String },

    #[error("All specified input files either do not exist or are not regular files.")]
    AllInputsSkipped,

    #[error("\"{path}\" could not be read: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    StdinReadFailed {
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_line_diagnostics_keep_exact_wording() {
        assert_eq!(
            InputError::TooManyStandardJsonInputs.to_string(),
            "Too many input files for --standard-json.\n\
             Please either specify a single file name or provide its content on standard input."
        );
        assert_eq!(
            InputError::RemappingInStandardJson.to_string(),
            "Import remappings are not accepted on the command line in Standard JSON mode.\n\
             Please put them under 'settings.remappings' in the JSON input."
        );
    }

    #[test]
    fn per_file_diagnostics_quote_the_path() {
        let err = InputError::NotFound {
            path: "/tmp/x.sol".into(),
        };
        assert_eq!(err.to_string(), "\"/tmp/x.sol\" is not found.");
    }
}
