//! Hex to image export command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hexframe::{decode_from_file, hex, write_image};

pub fn run(stem: PathBuf, output: PathBuf, verbose: bool) -> Result<()> {
    let grid = decode_from_file(&stem)
        .with_context(|| format!("reading {}", hex::hex_path(&stem).display()))?;
    if verbose {
        eprintln!("Decoded {}x{} grid", grid.rows(), grid.cols());
    }

    write_image(&grid, &output).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {} ({}x{})", output.display(), grid.rows(), grid.cols());
    Ok(())
}
