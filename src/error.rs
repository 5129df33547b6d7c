//! Application errors.

use std::path::PathBuf;

/// Enumerates application errors.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("While loading configuration from {config_path:?}")]
    LoadConfig {
        config_path: PathBuf,
        source: anyhow::Error,
    },
    #[error("Unknown configuration file extension {extension:?} in {config_path:?}")]
    UnknownConfigExtension {
        config_path: PathBuf,
        extension: Option<String>,
    },
    #[error("While reading file {input_path:?}")]
    ReadInput {
        input_path: PathBuf,
        source: anyhow::Error,
    },
    #[error("While reading standard input")]
    ReadStdin { source: anyhow::Error },
    #[error("While writing to standard output")]
    WriteOutput { source: anyhow::Error },
}
