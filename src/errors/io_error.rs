use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing a `TrainConfig` JSON file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure persisting or loading a profiling report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Cannot write profiling output under {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot (de)serialize profiling report {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
