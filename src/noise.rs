//! Salt-and-pepper noise injection.
//!
//! Degrades a grid by forcing randomly chosen pixels to pure white ("salt")
//! and pure black ("pepper"). Coordinates are drawn uniformly with
//! replacement, so the same pixel may be hit more than once and a later draw
//! overwrites an earlier one; all salt draws happen before any pepper draw.
//! These are deliberate simplifications kept for compatibility with the hex
//! files consumed by the downstream filtering stage — do not dedupe the
//! coordinates.

use rand::Rng;
use rand::rngs::StdRng;
use rand::{SeedableRng, thread_rng};

use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Intensity written by a salt draw.
pub const SALT: u8 = 255;
/// Intensity written by a pepper draw.
pub const PEPPER: u8 = 0;

/// Number of draws each of the salt and pepper passes performs for the given
/// intensity, `floor(rows * cols * percent / 200)`.
#[must_use]
pub fn noise_count(grid: &PixelGrid, percent: u8) -> usize {
    grid.sample_count() * usize::from(percent) / 200
}

/// Degrade `grid` with salt-and-pepper noise at the given intensity.
///
/// The source grid is untouched; the returned grid is an independent copy.
///
/// # Errors
///
/// Returns [`Error::InvalidNoisePercent`] if `percent > 100`.
pub fn salt_and_pepper(grid: &PixelGrid, percent: u8) -> Result<PixelGrid> {
    salt_and_pepper_with(grid, percent, &mut thread_rng())
}

/// Like [`salt_and_pepper`], but reproducible from a seed.
pub fn salt_and_pepper_seeded(grid: &PixelGrid, percent: u8, seed: u64) -> Result<PixelGrid> {
    salt_and_pepper_with(grid, percent, &mut StdRng::seed_from_u64(seed))
}

/// Like [`salt_and_pepper`], drawing coordinates from the supplied source.
pub fn salt_and_pepper_with<R: Rng>(
    grid: &PixelGrid,
    percent: u8,
    rng: &mut R,
) -> Result<PixelGrid> {
    if percent > 100 {
        return Err(Error::InvalidNoisePercent(percent));
    }
    let mut noisy = grid.clone();
    let draws = noise_count(grid, percent);
    scatter(&mut noisy, draws, SALT, rng);
    scatter(&mut noisy, draws, PEPPER, rng);
    Ok(noisy)
}

/// Write `value` at `draws` uniformly chosen coordinates, with replacement.
fn scatter<R: Rng>(grid: &mut PixelGrid, draws: usize, value: u8, rng: &mut R) {
    let rows = grid.rows();
    let cols = grid.cols();
    for _ in 0..draws {
        let col = rng.gen_range(0..cols);
        let row = rng.gen_range(0..rows);
        grid.set(row, col, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn gradient(rows: usize, cols: usize) -> PixelGrid {
        let samples = (0..rows * cols).map(|i| (i % 254 + 1) as u8).collect();
        PixelGrid::from_samples(samples, rows, cols).unwrap()
    }

    #[test]
    fn test_percent_out_of_range() {
        let grid = gradient(4, 4);
        assert!(matches!(
            salt_and_pepper(&grid, 101),
            Err(Error::InvalidNoisePercent(101))
        ));
    }

    #[test]
    fn test_noise_count_formula() {
        let grid = gradient(10, 10);
        assert_eq!(noise_count(&grid, 0), 0);
        assert_eq!(noise_count(&grid, 50), 25);
        assert_eq!(noise_count(&grid, 100), 50);
        // Floor division: 3x3 at 10% is 90/200 = 0.
        assert_eq!(noise_count(&gradient(3, 3), 10), 0);
    }

    #[test]
    fn test_zero_percent_is_identity() {
        let grid = gradient(8, 8);
        assert_eq!(salt_and_pepper(&grid, 0).unwrap(), grid);
    }

    #[test]
    fn test_source_grid_untouched() {
        let grid = gradient(16, 16);
        let before = grid.clone();
        let _ = salt_and_pepper(&grid, 80).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let grid = gradient(32, 32);
        let a = salt_and_pepper_seeded(&grid, 40, 7).unwrap();
        let b = salt_and_pepper_seeded(&grid, 40, 7).unwrap();
        assert_eq!(a, b);
        let c = salt_and_pepper_seeded(&grid, 40, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_only_extremes_written() {
        // The gradient only holds values in 1..=254, so every changed pixel
        // must be either salt or pepper.
        let grid = gradient(32, 32);
        let noisy = salt_and_pepper_seeded(&grid, 60, 42).unwrap();
        let changed = grid
            .samples()
            .iter()
            .zip(noisy.samples())
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed > 0);
        for (a, b) in grid.samples().iter().zip(noisy.samples()) {
            if a != b {
                assert!(*b == SALT || *b == PEPPER);
            }
        }
    }

    #[test]
    fn test_full_intensity_mostly_extremes() {
        // 100% performs rows*cols/2 draws per pass; collisions mean slightly
        // fewer than all pixels end up extreme, but the share must be high.
        let grid = gradient(64, 64);
        let noisy = salt_and_pepper_seeded(&grid, 100, 1).unwrap();
        let extremes = noisy
            .samples()
            .iter()
            .filter(|&&s| s == SALT || s == PEPPER)
            .count();
        assert!(extremes as f64 > grid.sample_count() as f64 * 0.5);
        assert!(extremes < grid.sample_count());
    }

    #[test]
    fn test_pepper_overwrites_salt_on_collision() {
        // An all-zeros generator always picks (0, 0); the pepper pass runs
        // strictly after the salt pass, so the pixel ends up black.
        let grid = gradient(2, 2);
        let mut rng = StepRng::new(0, 0);
        let noisy = salt_and_pepper_with(&grid, 100, &mut rng).unwrap();
        assert_eq!(noisy.get(0, 0), PEPPER);
        assert_eq!(noisy.get(0, 1), grid.get(0, 1));
        assert_eq!(noisy.get(1, 0), grid.get(1, 0));
        assert_eq!(noisy.get(1, 1), grid.get(1, 1));
    }
}
