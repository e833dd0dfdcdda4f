use crate::model::ConfigError;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DATASET_VAR: &str = "MOENV_DATASET";
pub const API_KEY_VAR: &str = "MOENV_API_KEY";
pub const DEFAULT_DATASET: &str = "aqx_p_432";
pub const BASE_URL_TEMPLATE: &str = "https://data.moenv.gov.tw/api/v2/{dataset}";
pub const OUTPUT_PATH: &str = "aqi.json";

#[derive(Clone)]
pub struct AppConfig {
    pub dataset: String,
    pub api_key: String,
    /// `{dataset}` is substituted by [`AppConfig::source_url`].
    pub base_url_template: String,
    pub output_path: String,
    pub timeout: Duration,
    pub offset: u32,
    pub limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // sent exactly as given; only unset or empty counts as missing
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        // An empty MOENV_DATASET would only produce `/api/v2/`, so it falls back too
        let dataset = lookup(DATASET_VAR)
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());

        Ok(Self::new(dataset, api_key))
    }

    pub fn new(dataset: String, api_key: String) -> Self {
        Self {
            dataset,
            api_key,
            base_url_template: BASE_URL_TEMPLATE.to_string(),
            output_path: OUTPUT_PATH.to_string(),
            timeout: Duration::from_secs(20),
            offset: 0,
            limit: 1000,
        }
    }

    pub fn source_url(&self) -> String {
        self.base_url_template.replace("{dataset}", &self.dataset)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("dataset", &self.dataset)
            .field("api_key", &"<redacted>")
            .field("base_url_template", &self.base_url_template)
            .field("output_path", &self.output_path)
            .field("timeout", &self.timeout)
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .finish()
    }
}
