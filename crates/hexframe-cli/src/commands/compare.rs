//! PSNR comparison command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use hexframe::{
    Error, QualityBand, QualityReport, Session, Slot, decode_from_file, hex, load_image, psnr,
};

pub fn run(
    image: PathBuf,
    noisy: PathBuf,
    filtered: PathBuf,
    json: Option<PathBuf>,
    csv: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut session = Session::new();
    session.set(
        Slot::Original,
        load_image(&image).with_context(|| format!("loading {}", image.display()))?,
    );

    fill_slot(&mut session, Slot::Noisy, &noisy, verbose)?;
    fill_slot(&mut session, Slot::Filtered, &filtered, verbose)?;

    let Some(reference) = session.get(Slot::Original) else {
        bail!("original image not loaded");
    };
    let mut report =
        QualityReport::new(image.display().to_string(), reference.rows(), reference.cols());

    for slot in [Slot::Noisy, Slot::Filtered] {
        if let Some(candidate) = session.get(slot) {
            let db = psnr(reference, candidate)
                .with_context(|| format!("comparing {} against original", slot))?;
            println!("{} PSNR = {:.2} dB [{}]", slot, db, QualityBand::from_psnr(db));
            report.push(slot.label(), db);
        }
    }

    if report.entries.is_empty() {
        bail!("nothing to compare: neither a noisy nor a filtered hex file was found");
    }

    if let Some(path) = json {
        report
            .write_json(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = csv {
        report
            .write_csv(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Decode the hex file for `slot`; a missing file leaves the slot empty.
fn fill_slot(session: &mut Session, slot: Slot, stem: &Path, verbose: bool) -> Result<()> {
    match decode_from_file(stem) {
        Ok(grid) => {
            session.set(slot, grid);
            Ok(())
        }
        Err(Error::HexFileNotFound { path }) => {
            if verbose {
                eprintln!("No {} candidate: {} does not exist", slot, path.display());
            }
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("reading {}", hex::hex_path(stem).display())),
    }
}
