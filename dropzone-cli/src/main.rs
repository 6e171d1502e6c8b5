use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dropzone::payload::types;
use dropzone::{DragOperation, DropConfig, DropTarget, Pasteboard, PrintObserver};

#[derive(Parser, Debug)]
#[clap(name = "dropzone-cli")]
#[clap(about = "Simulate dropping files, images and URLs on a drop target", long_about = None)]
struct Cli {
    /// JSON drop target configuration
    #[clap(long)]
    config: Option<PathBuf>,

    /// Image file to offer as in-memory image data
    #[clap(long = "image")]
    images: Vec<PathBuf>,

    /// Paths or URLs to offer as URIs
    inputs: Vec<String>,
}

fn image_type_id(path: &Path) -> String {
    match mime_guess::from_path(path).first_raw() {
        Some("image/png") => types::PNG.to_string(),
        Some("image/tiff") => types::TIFF.to_string(),
        Some("image/jpeg") => types::JPEG.to_string(),
        Some(mime) => mime.to_string(),
        None => "public.image".to_string(),
    }
}

fn build_payload(cli: &Cli) -> Result<Pasteboard> {
    let mut payload = Pasteboard::new();
    for input in &cli.inputs {
        payload = payload.with_uri(input);
    }
    for path in &cli.images {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        payload = payload.with_image(image_type_id(path), data);
    }
    Ok(payload)
}

fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => DropConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DropConfig::default(),
    };
    let payload = build_payload(&cli)?;

    let mut target =
        DropTarget::new(config).with_observer(PrintObserver::new(io::stdout()));
    if target.drag_entered(&payload) == DragOperation::None {
        log::info!("drag refused");
        return Ok(false);
    }
    Ok(target.perform_drop(&payload))
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("Nothing acceptable was dropped");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
