//! # Client Binary Entry Point
//!
//! Local command-line access to the codec, without the HTTP service.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin client -- embed --image photo.png --text "meet at noon" --output secret.png
//! cargo run --bin client -- extract --image secret.png
//! cargo run --bin client -- capacity --image photo.png
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use stegochat::processing::steganography::{capacity, embed_text_bytes, extract_text_bytes};
use stegochat::utils::logging::init_logger;

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide text in an image and write the result as PNG
    Embed {
        /// Carrier image (any format the image decoder understands)
        #[arg(short, long)]
        image: PathBuf,

        /// Text to hide (characters with codes 1-255)
        #[arg(short, long)]
        text: String,

        /// Where to write the PNG with the hidden text
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the text hidden in an image
    Extract {
        #[arg(short, long)]
        image: PathBuf,
    },

    /// Print how many characters an image can hold
    Capacity {
        #[arg(short, long)]
        image: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logger();

    match Args::parse().command {
        Command::Embed {
            image,
            text,
            output,
        } => {
            let image_data = read_image(&image)?;
            let carrier = embed_text_bytes(&image_data, &text)?;
            fs::write(&output, carrier)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(
                "✅ Embedded {} characters into {}",
                text.chars().count(),
                output.display()
            );
        }
        Command::Extract { image } => {
            let image_data = read_image(&image)?;
            let text = extract_text_bytes(&image_data)?;
            println!("{}", text);
        }
        Command::Capacity { image } => {
            let (width, height) = image::image_dimensions(&image)
                .with_context(|| format!("Failed to read {}", image.display()))?;
            println!(
                "{}x{} image holds up to {} characters",
                width,
                height,
                capacity(width, height)
            );
        }
    }

    Ok(())
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
