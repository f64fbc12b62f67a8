//! Configuration for the header parser.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `header` | `Client-Meta-Information` | Label used in error messages |
//! | `platforms` | `android, ios, web` | Accepted platform segments |
//! | `environments` | `local, development, staging, production` | Accepted environment segments |
//!
//! Configuration files are JSON objects with those keys. Keys that are
//! missing keep their default.
//!
//! ```
//! use client_meta::MetaConfig;
//!
//! let config = MetaConfig::from_json_str(r#"{"platforms": ["ios", "web"]}"#).unwrap();
//! assert_eq!(config.allowed_platforms(), ["ios", "web"]);
//! assert_eq!(config.header_label(), "Client-Meta-Information");
//! ```

use std::path::Path;

use http::HeaderName;
use serde::{Deserialize, Serialize};

use crate::error::{MetaError, Result};
use crate::protocol::constants::{DEFAULT_ENVIRONMENTS, DEFAULT_HEADER_LABEL, DEFAULT_PLATFORMS};

/// Header label and whitelists applied by [`crate::HeaderParser`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    #[serde(rename = "header")]
    header_label: String,
    #[serde(rename = "platforms")]
    allowed_platforms: Vec<String>,
    #[serde(rename = "environments")]
    allowed_environments: Vec<String>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        MetaConfig {
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            allowed_platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
            allowed_environments: DEFAULT_ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl MetaConfig {
    /// Build a configuration from a label and ordered whitelists.
    #[must_use]
    pub fn new(
        header_label: impl Into<String>,
        allowed_platforms: impl IntoIterator<Item = impl Into<String>>,
        allowed_environments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        MetaConfig {
            header_label: header_label.into(),
            allowed_platforms: allowed_platforms.into_iter().map(Into::into).collect(),
            allowed_environments: allowed_environments.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the label used in error messages.
    #[must_use]
    pub fn with_header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }

    /// Replace the accepted platforms, keeping their order.
    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed_platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the accepted environments, keeping their order.
    #[must_use]
    pub fn with_environments(
        mut self,
        environments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_environments = environments.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn header_label(&self) -> &str {
        &self.header_label
    }

    #[inline]
    #[must_use]
    pub fn allowed_platforms(&self) -> &[String] {
        &self.allowed_platforms
    }

    #[inline]
    #[must_use]
    pub fn allowed_environments(&self) -> &[String] {
        &self.allowed_environments
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn is_allowed_platform(&self, platform: &str) -> bool {
        self.allowed_platforms.iter().any(|p| p == platform)
    }

    #[must_use]
    pub fn is_allowed_environment(&self, environment: &str) -> bool {
        self.allowed_environments.iter().any(|e| e == environment)
    }

    /// The label as a typed header name.
    pub fn header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.header_label.to_ascii_lowercase().as_bytes()).map_err(|_| {
            MetaError::Config(format!("Invalid header label: '{}'", self.header_label))
        })
    }

    /// Reject configurations that no header could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.header_label.trim().is_empty() {
            return Err(MetaError::Config("header label is empty".to_string()));
        }
        if self.allowed_platforms.is_empty() {
            return Err(MetaError::Config("no platforms configured".to_string()));
        }
        if self.allowed_environments.is_empty() {
            return Err(MetaError::Config("no environments configured".to_string()));
        }
        if self.allowed_platforms.iter().any(|p| p.is_empty()) {
            return Err(MetaError::Config("empty platform entry".to_string()));
        }
        if self.allowed_environments.iter().any(|e| e.is_empty()) {
            return Err(MetaError::Config("empty environment entry".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: MetaConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            "[ClientMeta] Loaded config from {:?}: {} platforms, {} environments",
            path,
            config.allowed_platforms.len(),
            config.allowed_environments.len()
        );
        Ok(config)
    }

    /// Mapping with the keys `header`, `platforms`, `environments` in that order.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
