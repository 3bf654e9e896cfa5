use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ocr-rename")]
#[command(about = "Rename photos by the time printed on them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// OCR every .jpg under FOLDER and copy it to "Fotos Renomeadas/<HH.MM.SS>.jpg"
    Process {
        folder: PathBuf,
    },
    /// Run OCR on a single image and show the recognized text and time
    Recognize {
        file: PathBuf,
    },
    /// Show the time token that would be extracted from TEXT
    Extract {
        text: String,
    },
    /// Print configuration values
    PrintConfig,
}
