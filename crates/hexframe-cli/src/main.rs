//! hexframe CLI - image <-> hex conversion and noise evaluation tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Image <-> hex conversion and noise evaluation tool.
#[derive(Parser)]
#[command(name = "hexframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image file to the hex-text format
    Convert {
        /// Source image file
        image: PathBuf,

        /// Output stem (".hex" is appended); defaults to the image path
        /// without its extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Degrade an image with salt-and-pepper noise and write it as hex
    Noise {
        /// Source image file
        image: PathBuf,

        /// Noise intensity in percent (0-100)
        #[arg(short, long)]
        percent: u8,

        /// Output stem (".hex" is appended)
        #[arg(short, long, default_value = "inputImage")]
        output: PathBuf,

        /// Seed for reproducible noise
        #[arg(long)]
        seed: Option<u64>,

        /// Also write a viewable preview of the noisy grid (format by
        /// extension)
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Export a hex file back to a viewable image
    Export {
        /// Hex stem (".hex" is appended)
        stem: PathBuf,

        /// Output image path (format chosen by extension)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Score noisy/filtered hex files against the original image (PSNR)
    Compare {
        /// Original reference image
        image: PathBuf,

        /// Stem of the noisy hex file
        #[arg(long, default_value = "inputImage")]
        noisy: PathBuf,

        /// Stem of the filtered hex file
        #[arg(long, default_value = "outputImage")]
        filtered: PathBuf,

        /// Write the comparison report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the comparison report as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { image, output } => commands::convert::run(image, output, cli.verbose),
        Commands::Noise {
            image,
            percent,
            output,
            seed,
            preview,
        } => commands::noise::run(image, percent, output, seed, preview, cli.verbose),
        Commands::Export { stem, output } => commands::export::run(stem, output, cli.verbose),
        Commands::Compare {
            image,
            noisy,
            filtered,
            json,
            csv,
        } => commands::compare::run(image, noisy, filtered, json, csv, cli.verbose),
    }
}
