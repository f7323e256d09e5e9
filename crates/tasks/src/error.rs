//! Error types for the geosample-tasks crate.

use geosample_patch::PatchError;
use geosample_stratified::StratifiedError;
use geosample_window::WindowError;

/// Broad class of a [`SamplingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter is out of range or inconsistent.
    Validation,
    /// The data cannot supply the requested number of samples.
    Population,
    /// A block or grid does not fit the raster.
    Bounds,
    /// A feature is missing or has the wrong type or layout.
    Input,
}

/// Error type for all fallible operations in the geosample-tasks crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SamplingError {
    /// Returned when a task is built without features to sample.
    #[error("no features to sample")]
    NoFeatures,

    /// Returned when a sample amount is zero or a fraction is outside (0, 1].
    #[error("invalid amount: {reason}")]
    InvalidAmount {
        /// What is wrong with the amount.
        reason: String,
    },

    /// Returned when a sampling fraction is negative, non-finite, or above 1
    /// without replacement.
    #[error("invalid fraction {fraction} for {target}")]
    InvalidFraction {
        /// The rejected fraction.
        fraction: f64,
        /// `"all classes"` or the class the fraction belongs to.
        target: String,
    },

    /// Returned when a feature's spatial extent differs from the first
    /// feature's.
    #[error("feature {name} has spatial shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the offending feature.
        name: String,
        /// Extent of the first feature.
        expected: (usize, usize),
        /// Extent of the offending feature.
        got: (usize, usize),
    },

    /// Returned when the label feature is not an `(H, W, 1)` integer raster.
    #[error("label feature {name} must be an (H, W, 1) i64 raster, got {dtype} {shape:?}")]
    InvalidLabel {
        /// Name of the label feature.
        name: String,
        /// Element type found.
        dtype: &'static str,
        /// Shape found.
        shape: Vec<usize>,
    },

    /// Returned when a feature addressed for sampling is not a raster.
    #[error("feature {name} is not a raster")]
    NotARaster {
        /// Name of the offending feature.
        name: String,
    },

    /// Returned when more blocks are requested than there are valid origins.
    #[error("requested {requested} samples, only {available} valid origins")]
    InsufficientOrigins {
        /// Requested number of blocks.
        requested: usize,
        /// Number of positions where a block fits.
        available: usize,
    },

    /// Stratified draw failure.
    #[error(transparent)]
    Stratified(#[from] StratifiedError),

    /// Window or grid failure.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Feature store failure.
    #[error(transparent)]
    Patch(#[from] PatchError),
}

impl SamplingError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFeatures
            | Self::InvalidAmount { .. }
            | Self::InvalidFraction { .. }
            | Self::ShapeMismatch { .. } => ErrorKind::Validation,
            Self::InvalidLabel { .. } | Self::NotARaster { .. } | Self::Patch(_) => ErrorKind::Input,
            Self::InsufficientOrigins { .. } => ErrorKind::Population,
            Self::Stratified(e) => match e {
                StratifiedError::InsufficientPopulation { .. } => ErrorKind::Population,
                StratifiedError::NoSamplesRequested
                | StratifiedError::CountOverflow
                | StratifiedError::DuplicateValue { .. } => ErrorKind::Validation,
            },
            Self::Window(e) => match e {
                WindowError::BlockTooLarge { .. } | WindowError::OutOfBounds { .. } => {
                    ErrorKind::Bounds
                }
                WindowError::LengthMismatch { .. } | WindowError::ZeroSize { .. } => {
                    ErrorKind::Validation
                }
            },
        }
    }
}
