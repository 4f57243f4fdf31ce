//! Noise injection command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hexframe::{
    encode_to_file, hex, load_image, noise, salt_and_pepper, salt_and_pepper_seeded, write_image,
};

pub fn run(
    image: PathBuf,
    percent: u8,
    output: PathBuf,
    seed: Option<u64>,
    preview: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let grid = load_image(&image).with_context(|| format!("loading {}", image.display()))?;
    if verbose {
        eprintln!(
            "Loaded {}: {}x{}, {} draws per pass at {}%",
            image.display(),
            grid.rows(),
            grid.cols(),
            noise::noise_count(&grid, percent),
            percent
        );
    }

    let noisy = match seed {
        Some(seed) => salt_and_pepper_seeded(&grid, percent, seed),
        None => salt_and_pepper(&grid, percent),
    }?;

    encode_to_file(&noisy, &output)
        .with_context(|| format!("writing {}", hex::hex_path(&output).display()))?;
    println!("Wrote {} ({}% noise)", hex::hex_path(&output).display(), percent);

    if let Some(preview) = preview {
        write_image(&noisy, &preview)
            .with_context(|| format!("writing preview {}", preview.display()))?;
        println!("Wrote preview {}", preview.display());
    }
    Ok(())
}
