use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected OCR response: {0}")]
    ResponseFormat(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification used by front ends to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileAccess,
    Network,
    ResponseFormat,
    Config,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Walk(_) => ErrorKind::FileAccess,
            Error::Network(_) => ErrorKind::Network,
            Error::ResponseFormat(_) => ErrorKind::ResponseFormat,
            Error::Config(_) => ErrorKind::Config,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_file_access() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_json_error_is_response_format() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::ResponseFormat);
    }
}
