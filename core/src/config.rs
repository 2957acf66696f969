//! Serializable construction surface for a root `PathBuilder`.

use std::collections::BTreeMap;
use std::env;

use serde::{Deserialize, Serialize};

use crate::builder::PathBuilder;
use crate::error::ConfigError;

pub const HOST_VAR: &str = "REST_HOST";
pub const VERSION_VAR: &str = "REST_API_VERSION";

/// Everything needed to start a builder chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_path: Option<String>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read `REST_HOST` (required) and `REST_API_VERSION` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(HOST_VAR).map_err(|_| ConfigError::MissingVar(HOST_VAR))?;
        let version = env::var(VERSION_VAR).ok().filter(|v| !v.is_empty());
        Ok(Self {
            host,
            version,
            ..Self::default()
        })
    }

    pub fn into_builder(self) -> PathBuilder {
        let mut builder = PathBuilder::new(self.host).with_headers(self.default_headers);
        if let Some(version) = self.version {
            builder = builder.with_version(version);
        }
        if let Some(path) = self.initial_path {
            builder = builder.with_path(path);
        }
        builder
    }
}
