//! Error types for job loading.

use std::path::PathBuf;

use geosample_tasks::SamplingError;

/// Error type for reading and building sampling jobs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the job file cannot be read.
    #[error("failed to read {}: {message}", path.display())]
    Io {
        /// Path of the job file.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },

    /// Returned when the job file is not valid TOML or has unknown keys.
    #[error("invalid job file: {0}")]
    Parse(String),

    /// Returned when a string option names nothing known.
    #[error("unknown {field}: {value:?}")]
    UnknownValue {
        /// Option name.
        field: &'static str,
        /// Offered value.
        value: String,
    },

    /// Returned when a sampler lacks an option its method needs.
    #[error("{method} sampler requires `{field}`")]
    MissingField {
        /// Sampling method.
        method: &'static str,
        /// Missing option.
        field: &'static str,
    },

    /// Returned when a fraction table key is not an integer class.
    #[error("fraction key {key:?} is not an integer class")]
    InvalidClass {
        /// Offending key.
        key: String,
    },

    /// Task construction failure.
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.message().to_string())
    }
}
