//! Error types for the pitchviz core.

use pitchviz_env::HostError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while importing, sampling, or building pitch geometry.
#[derive(Debug, Error)]
pub enum VizError {
    /// The source file does not exist
    #[error("File not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The file exists but could not be read as delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field present in a record is not a finite number
    #[error("Field '{field}' is not numeric: {value:?}")]
    Parse { field: String, value: String },

    /// Finite inputs whose kinematics overflowed to a non-finite position
    #[error("Trajectory overflowed: non-finite {0}")]
    NonFinite(&'static str),

    /// Fewer than two sample points were requested
    #[error("Need at least 2 sample points, got {0}")]
    InvalidSampleCount(usize),

    /// Visualization invoked with no imported records
    #[error("No pitch records to visualize")]
    NoData,

    /// Failure inside the scene host, passed through unmodified
    #[error(transparent)]
    Host(#[from] HostError),
}

impl VizError {
    /// Creates a parse error for a field.
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true if this error only affects the record that raised it.
    pub fn is_record_local(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NonFinite(_))
    }
}
