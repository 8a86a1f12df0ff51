//! Configuration types for the SMS model
//!
//! A [`RegistryConfig`] picks a backend, a capacity and an initial message.
//! It is what [`crate::backend::BackendRegistry`] consumes to build a
//! registry.

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MAX_NUM_PHONE_NUMBERS;
use crate::traits::{Capacity, UNBOUNDED};

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: BackendConfig,

    /// Raw capacity: `-1` for unbounded, absent for the default
    #[serde(default)]
    pub capacity: Option<i64>,

    /// Initial message attached to the registry
    #[serde(default)]
    pub message: Option<String>,
}

impl RegistryConfig {
    /// Create a configuration for the given backend with defaults
    pub fn new(backend: BackendConfig) -> Self {
        Self {
            backend,
            capacity: None,
            message: None,
        }
    }

    /// Set the raw capacity
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Request no enforced maximum
    pub fn unbounded(self) -> Self {
        self.with_capacity(UNBOUNDED)
    }

    /// Set the initial message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Capacity after applying the default
    pub fn resolved_capacity(&self) -> Result<Capacity, crate::Error> {
        match self.capacity {
            None => Ok(Capacity::Bounded(DEFAULT_MAX_NUM_PHONE_NUMBERS)),
            Some(raw) => Capacity::from_raw(raw).ok_or_else(|| {
                crate::Error::config(format!(
                    "Capacity must be -1 (unbounded) or non-negative, got {}",
                    raw
                ))
            }),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.resolved_capacity()?;
        self.backend.validate()
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackendConfig {
    /// Fixed slot array
    #[default]
    Array,

    /// Growable list
    List,

    /// Custom backend
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        #[serde(default)]
        config: serde_json::Value,
    },
}

impl BackendConfig {
    /// Validate the backend configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            BackendConfig::Custom { factory, .. } if factory.is_empty() => Err(
                crate::Error::config("Custom backend factory cannot be empty"),
            ),
            _ => Ok(()),
        }
    }

    /// Settings passed to a custom backend's factory
    pub fn custom_config(&self) -> Option<&serde_json::Value> {
        match self {
            BackendConfig::Custom { config, .. } => Some(config),
            _ => None,
        }
    }

    /// Get the backend type name
    pub fn type_name(&self) -> &str {
        match self {
            BackendConfig::Array => "array",
            BackendConfig::List => "list",
            BackendConfig::Custom { factory, .. } => factory,
        }
    }
}
