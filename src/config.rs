//! Backend location

use crate::error::{ErrorKind, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const BASE_URL_ENV: &str = "AULA_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the REST API, e.g. `http://localhost:8000/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ErrorKind::ConfigError("base url is empty".to_string()).into());
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ErrorKind::ConfigError(format!(
                "base url must start with http:// or https://: {base_url}"
            ))
            .into());
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Reads `AULA_API_BASE_URL`, falling back to the default backend
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: ApiConfig = serde_json::from_str(json)?;
        Self::new(&raw.base_url)
    }

    /// Joins a resource path (starting with `/`) onto the base url
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
