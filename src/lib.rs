//! # hexframe
//!
//! Grayscale image <-> hex-text conversion, noise injection and quality
//! scoring.
//!
//! The pipeline prepares test inputs for an external filtering stage: load an
//! image as an intensity grid, degrade it with salt-and-pepper noise, hand it
//! over as a hex-text file, read the filtered hex file back, and score the
//! candidates against the original with PSNR.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hexframe::{load_image, salt_and_pepper, encode_to_file, decode_from_file, psnr};
//!
//! let original = load_image("photo.png")?;
//! let noisy = salt_and_pepper(&original, 20)?;
//! encode_to_file(&noisy, "inputImage")?;
//!
//! // ... the external stage filters inputImage.hex into outputImage.hex ...
//!
//! let filtered = decode_from_file("outputImage")?;
//! println!("filtered PSNR = {:.2} dB", psnr(&original, &filtered)?);
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`grid`]: The shared single-channel pixel grid
//! - [`image_io`]: Loading and writing real image files
//! - [`hex`]: The hex-text interchange codec
//! - [`noise`]: Salt-and-pepper degradation
//! - [`metrics`]: PSNR scoring and quality bands
//! - [`report`]: JSON/CSV comparison reports
//! - [`session`]: Named image slots for the presentation layer

pub mod error;
pub mod grid;
pub mod hex;
pub mod image_io;
pub mod metrics;
pub mod noise;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use hex::{decode, decode_from_file, encode, encode_to_file};
pub use image_io::{MAX_SAMPLES, load_image, write_image};
pub use metrics::{QualityBand, psnr};
pub use noise::{salt_and_pepper, salt_and_pepper_seeded, salt_and_pepper_with};
pub use report::{QualityEntry, QualityReport};
pub use session::{Session, Slot};
