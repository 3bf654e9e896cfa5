use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://api.ocr.space/parse/image";
pub const DEFAULT_LANGUAGE: &str = "pol";
pub const DEFAULT_ENGINE: u8 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub ocr: OcrConfig,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Settings sent with every OCR request.
#[derive(Clone, Deserialize)]
pub struct OcrConfig {
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_engine")]
    pub engine: u8,
    #[serde(default)]
    pub overlay: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_engine() -> u8 {
    DEFAULT_ENGINE
}

impl OcrConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: default_endpoint(),
            language: default_language(),
            engine: DEFAULT_ENGINE,
            overlay: false,
            timeout_secs: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

impl fmt::Debug for OcrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrConfig")
            .field("api_key", &redact(&self.api_key))
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("engine", &self.engine)
            .field("overlay", &self.overlay)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(2).collect();
    if secret.chars().count() <= 2 {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}

/// Layered load: built-in defaults, then an optional `Config.*` file, then
/// `OCR_RENAME_*` environment variables (`__` separates nested keys).
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .set_default("ocr.endpoint", DEFAULT_ENDPOINT)?
        .set_default("ocr.language", DEFAULT_LANGUAGE)?
        .set_default("ocr.engine", DEFAULT_ENGINE as i64)?
        .set_default("ocr.overlay", false)?
        .set_default("ignore_patterns", Vec::<String>::new())?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(environment())
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

/// `OCR_RENAME_IGNORE_PATTERNS` takes a comma-separated list.
fn environment() -> Environment {
    Environment::with_prefix("OCR_RENAME")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("ignore_patterns")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_config_defaults() {
        let config = OcrConfig::new("K123456");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.language, "pol");
        assert_eq!(config.engine, 2);
        assert!(!config.overlay);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = OcrConfig::new("K81163354788957");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("K81163354788957"));
        assert!(printed.contains("K8***"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                "[ocr]\napi_key = \"abc\"\nlanguage = \"eng\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let app: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(app.ocr.api_key, "abc");
        assert_eq!(app.ocr.language, "eng");
        assert_eq!(app.ocr.engine, DEFAULT_ENGINE);
        assert!(app.ignore_patterns.is_empty());
    }

    #[test]
    fn test_environment_overrides_and_lists() {
        let vars: config::Map<String, String> = [
            ("OCR_RENAME_OCR__API_KEY", "from-env"),
            ("OCR_RENAME_OCR__OVERLAY", "true"),
            ("OCR_RENAME_IGNORE_PATTERNS", "*/raw,*/thumbs"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::builder()
            .set_default("ignore_patterns", Vec::<String>::new())
            .unwrap()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let app: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(app.ocr.api_key, "from-env");
        assert!(app.ocr.overlay);
        assert_eq!(app.ignore_patterns, vec!["*/raw", "*/thumbs"]);
    }

    #[test]
    fn test_missing_api_key_fails() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                "[ocr]\nlanguage = \"eng\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        assert!(config.try_deserialize::<AppConfig>().is_err());
    }
}
