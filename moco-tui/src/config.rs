use anyhow::{Context, Result};
use moco::{Credentials, MocoClient, MocoURL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_CONFIG: &str = r#"# moco-tui configuration
#
# Values set here can be overridden with the MOCO_DOMAIN, MOCO_API_KEY and
# MOCO_API_URL environment variables (a .env file in the working directory is
# loaded as well).

# Account subdomain, e.g. "acme" for https://acme.mocoapp.com
# domain = ""

# Personal API key (MOCO: Profile > Integrations)
# api_key = ""

# Full API root, only needed for non-hosted setups
# api_url = "https://acme.mocoapp.com/api/v1"
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MocoConfig {
    /// Account subdomain, e.g. "acme" for acme.mocoapp.com
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the API root derived from `domain`
    #[serde(default)]
    pub api_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MOCO_DOMAIN and MOCO_API_KEY must be set (environment, .env or {path})")]
    MissingCredentials { path: String },
}

pub fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("moco-tui"))
}

impl MocoConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    /// Load config from disk and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Environment values win over file values; blank values count as unset.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(domain) = get("MOCO_DOMAIN") {
            self.domain = Some(domain);
        }
        if let Some(api_key) = get("MOCO_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(api_url) = get("MOCO_API_URL") {
            self.api_url = Some(api_url);
        }
        self
    }

    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let domain = self.domain.as_deref().map(str::trim).unwrap_or_default();
        let api_key = self.api_key.as_deref().map(str::trim).unwrap_or_default();
        if domain.is_empty() || api_key.is_empty() {
            let path = Self::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string());
            return Err(ConfigError::MissingCredentials { path });
        }
        Ok(Credentials::new(domain, api_key))
    }

    pub fn client(&self) -> Result<MocoClient, ConfigError> {
        let credentials = self.credentials()?;
        Ok(match self.api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                MocoClient::with_base_url(credentials, MocoURL::custom(url))
            }
            _ => MocoClient::new(credentials),
        })
    }

    /// Write the commented default config unless one exists. Returns the path.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config at {}", path.display()))?;
        }
        Ok(path)
    }
}
