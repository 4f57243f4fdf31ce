//! Error types for hexframe operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hexframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting, degrading or scoring images.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Failed to load an image file.
    #[error("Image load failed: {path}: {reason}")]
    ImageLoad {
        /// Path to the image that failed to load.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Failed to write an image file.
    #[error("Image write failed: {path}: {reason}")]
    ImageWrite {
        /// Path to the image that failed to encode.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Hex text is malformed.
    #[error("Hex parse error at line {line}: {reason}")]
    HexParse {
        /// 1-based line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// Hex file does not exist.
    #[error("Hex file not found: {path}")]
    HexFileNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// Grid construction with inconsistent dimensions.
    #[error("Invalid grid dimensions: {rows}x{cols} with {samples} samples")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Number of samples actually supplied.
        samples: usize,
    },

    /// Noise intensity outside the accepted range.
    #[error("Invalid noise percent: {0} (expected 0-100)")]
    InvalidNoisePercent(u8),

    /// Grid dimensions don't match between reference and candidate.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (rows, cols).
        expected: (usize, usize),
        /// Actual dimensions (rows, cols).
        actual: (usize, usize),
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
