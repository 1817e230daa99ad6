use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

use crate::error::{ConfigError, Result};
use crate::pinecone;

/// Resolved Pinecone settings for the pipeline.
///
/// Values come from the compiled defaults in [`crate::pinecone`], overridden
/// by the process environment (a `.env` file is honored via dotenv). The
/// record is immutable after construction; consumers receive clones and
/// cannot influence the canonical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PineconeConfig {
    pub index_name: String,
    pub namespace: String,
    pub environment: String,
    /// PINECONE_API_KEY, if present. Never serialized.
    #[serde(skip_serializing, default)]
    api_key: Option<String>,
}

impl Default for PineconeConfig {
    fn default() -> Self {
        Self {
            index_name: pinecone::PINECONE_INDEX_NAME.to_string(),
            namespace: pinecone::PINECONE_NAME_SPACE.to_string(),
            environment: pinecone::DEFAULT_ENVIRONMENT.to_string(),
            api_key: None,
        }
    }
}

impl PineconeConfig {
    /// Build a config from the compiled defaults plus environment overrides.
    ///
    /// Fails fast on an empty index name so a misconfigured process dies at
    /// startup instead of deep inside a request path.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            index_name: optional_var("PINECONE_INDEX_NAME")?.unwrap_or(defaults.index_name),
            namespace: optional_var("PINECONE_NAME_SPACE")?.unwrap_or(defaults.namespace),
            environment: optional_var("PINECONE_ENVIRONMENT")?.unwrap_or(defaults.environment),
            api_key: optional_var("PINECONE_API_KEY")?,
        };
        config.validate()?;

        tracing::debug!(
            index_name = %config.index_name,
            environment = %config.environment,
            namespace_set = !config.namespace.is_empty(),
            "resolved Pinecone configuration"
        );
        Ok(config)
    }

    /// The namespace to scope vectors under, or `None` for the index's
    /// default namespace.
    pub fn namespace(&self) -> Option<&str> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(self.namespace.as_str())
        }
    }

    /// The API key, required before constructing a client.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey {
                var: "PINECONE_API_KEY",
            })
    }

    fn validate(&self) -> Result<()> {
        if self.index_name.trim().is_empty() {
            return Err(ConfigError::EmptyIndexName);
        }
        Ok(())
    }
}

fn optional_var(name: &'static str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidUnicode { var: name }),
    }
}
