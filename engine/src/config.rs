//! TOML configuration for the client.
//!
//! Read from `~/.polycalc/config.toml` when present; every field has a
//! working default so first run needs no setup. The service base URL can
//! also be overridden with the `POLYCALC_BASE_URL` environment variable,
//! which wins over the file.

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use polycalc_client::ServiceConfig;

use crate::store::TranscriptStore;

const CONFIG_DIR: &str = ".polycalc";
const CONFIG_FILENAME: &str = "config.toml";
const BASE_URL_ENV_VAR: &str = "POLYCALC_BASE_URL";

#[derive(Debug, Default, Deserialize)]
pub struct PolycalcConfig {
    pub service: Option<ServiceSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceSection {
    /// Base URL of the computation service, without the `/api/...` path.
    pub base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl PolycalcConfig {
    /// `~/.polycalc/config.toml`, if a home directory is known.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Load the config file; an absent file yields defaults, an unreadable
    /// or unparsable file is an error the caller decides how to surface.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Resolve the service endpoint: env var, then config file, then the
    /// canonical deployment.
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        if let Ok(url) = env::var(BASE_URL_ENV_VAR)
            && !url.trim().is_empty()
        {
            return ServiceConfig::new(url.trim());
        }

        self.service
            .as_ref()
            .and_then(|s| s.base_url.as_deref())
            .map_or_else(ServiceConfig::default, ServiceConfig::new)
    }

    /// Where the persisted transcript record lives:
    /// `~/.polycalc/transcript.json`, or the working directory as a last
    /// resort when no home directory is known.
    #[must_use]
    pub fn transcript_path() -> PathBuf {
        dirs::home_dir().map_or_else(
            || PathBuf::from(TranscriptStore::FILENAME),
            |home| home.join(CONFIG_DIR).join(TranscriptStore::FILENAME),
        )
    }
}
