//! Report types for quality comparison results.
//!
//! A [`QualityReport`] collects the PSNR scores of one or more degraded or
//! reconstructed candidates against a reference image, and can be persisted
//! as JSON or CSV.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::QualityBand;

/// Score of a single candidate against the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityEntry {
    /// Candidate label, e.g. `"noisy"` or `"filtered"`.
    pub label: String,

    /// PSNR in decibels; `0.0` is the identity sentinel.
    pub psnr_db: f64,

    /// Coarse classification of the score.
    pub band: QualityBand,
}

/// Comparison results for one reference image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Reference image name or path.
    pub image: String,

    /// Reference dimensions.
    pub rows: usize,
    pub cols: usize,

    /// When this report was generated.
    pub timestamp: DateTime<Utc>,

    /// One entry per compared candidate.
    pub entries: Vec<QualityEntry>,
}

impl QualityReport {
    /// Create an empty report for the given reference.
    #[must_use]
    pub fn new(image: String, rows: usize, cols: usize) -> Self {
        Self {
            image,
            rows,
            cols,
            timestamp: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Record a candidate score; the quality band is derived from the value.
    pub fn push(&mut self, label: &str, psnr_db: f64) {
        self.entries.push(QualityEntry {
            label: label.to_string(),
            psnr_db,
            band: QualityBand::from_psnr(psnr_db),
        });
    }

    /// Look up an entry by its label.
    #[must_use]
    pub fn entry(&self, label: &str) -> Option<&QualityEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Write the report as a flat CSV table, one row per entry.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["image", "rows", "cols", "label", "psnr_db", "band"])?;
        for entry in &self.entries {
            wtr.write_record([
                &self.image,
                &self.rows.to_string(),
                &self.cols.to_string(),
                &entry.label,
                &format!("{:.2}", entry.psnr_db),
                &entry.band.code().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
