use super::{OcrResponse, Recognizer};
use crate::config::OcrConfig;
use crate::error::Error;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

/// Blocking client for the OCR.space `parse/image` endpoint.
pub struct OcrClient {
    config: OcrConfig,
    http: Client,
}

impl OcrClient {
    pub fn new(config: OcrConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// Use a preconfigured HTTP client (proxy settings, TLS roots, ...).
    /// `timeout_secs` is ignored in that case.
    pub fn with_http_client(config: OcrConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    fn build_form(&self, path: &Path, data: Vec<u8>) -> Result<Form, Error> {
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file_part = Part::bytes(data)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;

        Ok(Form::new()
            .text("apikey", self.config.api_key.clone())
            .text("language", self.config.language.clone())
            .text("OCREngine", self.config.engine.to_string())
            .text("isOverlayRequired", self.config.overlay.to_string())
            .part("file", file_part))
    }
}

impl Recognizer for OcrClient {
    /// Upload one image and decode the service's JSON answer.
    ///
    /// The file is read before any network traffic, so an unreadable file
    /// surfaces as an IO error. The HTTP status is not inspected: the
    /// service reports its own failures inside the JSON body.
    fn recognize(&self, path: &Path) -> Result<OcrResponse, Error> {
        let data = fs::read(path)?;
        let size = data.len();
        let form = self.build_form(path, data)?;

        let start = Instant::now();
        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()?;
        let status = response.status();
        let body = response.bytes()?;
        debug!(
            "OCR request for {} ({} bytes) returned {} in {:.2}s",
            path.display(),
            size,
            status,
            start.elapsed().as_secs_f64(),
        );

        let parsed: OcrResponse = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}
