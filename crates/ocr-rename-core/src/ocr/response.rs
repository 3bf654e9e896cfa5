use serde::Deserialize;

/// Body returned by the OCR.space `parse/image` endpoint.
///
/// Every field is optional: the service omits or nulls most of them on
/// failure, and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrResponse {
    #[serde(rename = "OCRExitCode")]
    pub ocr_exit_code: Option<i32>,
    #[serde(default)]
    pub is_errored_on_processing: bool,
    pub error_message: Option<ErrorMessage>,
    pub error_details: Option<String>,
    pub processing_time_in_milliseconds: Option<String>,
    pub processing_error: Option<String>,
    pub parsed_results: Option<Vec<ParsedResult>>,
}

/// The service sends `ErrorMessage` either as a single string or as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn joined(&self) -> String {
        match self {
            ErrorMessage::Single(msg) => msg.clone(),
            ErrorMessage::Many(msgs) => msgs.join("; "),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    pub text_overlay: Option<TextOverlay>,
    pub text_orientation: Option<String>,
    pub file_parse_exit_code: Option<i32>,
    #[serde(default)]
    pub parsed_text: String,
    pub error_message: Option<ErrorMessage>,
    pub error_details: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextOverlay {
    #[serde(default)]
    pub lines: Vec<OverlayLine>,
    #[serde(default)]
    pub has_overlay: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayLine {
    pub line_text: Option<String>,
    #[serde(default)]
    pub words: Vec<OverlayWord>,
    pub max_height: Option<f64>,
    pub min_top: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverlayWord {
    pub word_text: String,
    pub left: f64,
    pub top: f64,
    pub height: f64,
    pub width: f64,
}

impl OcrResponse {
    pub fn parsed_results(&self) -> &[ParsedResult] {
        self.parsed_results.as_deref().unwrap_or(&[])
    }

    /// Text of the first parsed result; later pages are never consulted.
    pub fn first_text(&self) -> Option<&str> {
        self.parsed_results()
            .first()
            .map(|result| result.parsed_text.as_str())
    }

    /// Human-readable summary of whatever the service reported as wrong.
    pub fn error_summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        if let Some(msg) = &self.error_message {
            parts.push(msg.joined());
        }
        if let Some(details) = &self.error_details {
            parts.push(details.clone());
        }
        if let Some(err) = &self.processing_error {
            parts.push(err.clone());
        }
        for result in self.parsed_results() {
            if let Some(msg) = &result.error_message {
                parts.push(msg.joined());
            }
            if let Some(details) = &result.error_details {
                parts.push(details.clone());
            }
        }

        parts.retain(|p| !p.trim().is_empty());
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
