//! Signal quality metrics for grid comparison.
//!
//! The only metric is PSNR (peak signal-to-noise ratio) over single-channel
//! 8-bit grids. Higher is better; the value `0.0` is a sentinel meaning the
//! two grids are numerically identical, not a literal score.
//!
//! | Band | PSNR (dB) | Description |
//! |-----------|-----------|--------------------------------|
//! | Identical | sentinel  | Exact match |
//! | Excellent | >= 40     | Differences barely measurable |
//! | Good | >= 30 | Typical for light degradation |
//! | Fair | >= 20 | Clearly degraded |
//! | Poor | < 20 | Heavy degradation |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Squared-error sums at or below this are treated as "identical".
const SSE_EPSILON: f64 = 1e-10;

/// Compute the PSNR of `candidate` against `reference`, in decibels.
///
/// Returns the sentinel `0.0` when the grids are identical within a
/// negligible epsilon.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the grids differ in shape; no
/// implicit cropping or resizing is performed.
pub fn psnr(reference: &PixelGrid, candidate: &PixelGrid) -> Result<f64> {
    if reference.rows() != candidate.rows() || reference.cols() != candidate.cols() {
        return Err(Error::DimensionMismatch {
            expected: (reference.rows(), reference.cols()),
            actual: (candidate.rows(), candidate.cols()),
        });
    }

    let sse: f64 = reference
        .samples()
        .iter()
        .zip(candidate.samples())
        .map(|(a, b)| {
            let diff = f64::from(*a) - f64::from(*b);
            diff * diff
        })
        .sum();

    if sse <= SSE_EPSILON {
        return Ok(0.0);
    }
    // Single channel, so the divisor is just the sample count.
    let mse = sse / reference.sample_count() as f64;
    Ok(10.0 * (255.0_f64 * 255.0 / mse).log10())
}

/// Coarse quality classification of a PSNR value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityBand {
    /// Sentinel PSNR of 0 - grids are numerically identical.
    Identical,
    /// >= 40 dB.
    Excellent,
    /// >= 30 dB.
    Good,
    /// >= 20 dB.
    Fair,
    /// < 20 dB.
    Poor,
}

impl QualityBand {
    /// Classify a PSNR value as returned by [`psnr`].
    #[must_use]
    pub fn from_psnr(psnr_db: f64) -> Self {
        if psnr_db == 0.0 {
            Self::Identical
        } else if psnr_db >= 40.0 {
            Self::Excellent
        } else if psnr_db >= 30.0 {
            Self::Good
        } else if psnr_db >= 20.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Short code for compact report columns.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Identical => "IDENT",
            Self::Excellent => "EXC",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

impl std::fmt::Display for QualityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identical => write!(f, "Identical"),
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}
