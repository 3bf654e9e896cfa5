pub mod client;
pub mod response;

pub use client::OcrClient;
pub use response::{ErrorMessage, OcrResponse, ParsedResult};

use crate::error::Error;
use std::path::Path;

/// Anything that can turn an image file into an OCR response.
///
/// `OcrClient` talks to the remote service; tests substitute scripted
/// implementations.
pub trait Recognizer {
    fn recognize(&self, path: &Path) -> Result<OcrResponse, Error>;
}

impl<R: Recognizer + ?Sized> Recognizer for &R {
    fn recognize(&self, path: &Path) -> Result<OcrResponse, Error> {
        (**self).recognize(path)
    }
}
