//! Image to hex conversion command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hexframe::{encode_to_file, hex, load_image};

pub fn run(image: PathBuf, output: Option<PathBuf>, verbose: bool) -> Result<()> {
    let grid = load_image(&image).with_context(|| format!("loading {}", image.display()))?;
    if verbose {
        eprintln!(
            "Loaded {}: {}x{} ({} samples)",
            image.display(),
            grid.rows(),
            grid.cols(),
            grid.sample_count()
        );
    }

    let stem = output.unwrap_or_else(|| image.with_extension(""));
    encode_to_file(&grid, &stem)
        .with_context(|| format!("writing {}", hex::hex_path(&stem).display()))?;

    println!(
        "Wrote {} ({}x{})",
        hex::hex_path(&stem).display(),
        grid.rows(),
        grid.cols()
    );
    Ok(())
}
