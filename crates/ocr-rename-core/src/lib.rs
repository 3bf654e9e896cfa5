pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod platform;
pub mod progress;
pub mod scanner;

pub use config::{AppConfig, OcrConfig};
pub use engine::{BatchResult, RenameEngine, IMAGE_EXTENSION, OUTPUT_DIR_NAME};
pub use error::{Error, ErrorKind};
pub use extract::extract_time_token;
pub use ocr::{OcrClient, OcrResponse, Recognizer};
pub use progress::{ProgressReporter, SilentReporter};
