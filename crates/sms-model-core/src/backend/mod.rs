//! Plugin-based backend registry
//!
//! The backend registry maps backend names to factories, so callers pick a
//! phone registry implementation from configuration instead of hardcoding a
//! concrete type.
//!
//! ## Usage
//!
//! ```rust
//! use sms_model_core::backend::BackendRegistry;
//! use sms_model_core::config::{BackendConfig, RegistryConfig};
//!
//! let backends = BackendRegistry::with_builtins();
//!
//! let config = RegistryConfig::new(BackendConfig::List)
//!     .unbounded()
//!     .with_message("Hello");
//! let mut registry = backends.create(&config)?;
//! registry.add_phone_number("1234567890")?;
//! # Ok::<(), sms_model_core::Error>(())
//! ```
//!
//! ## Registration
//!
//! Custom backends register a factory under the name used in
//! `BackendConfig::Custom { factory, .. }`:
//!
//! ```rust,ignore
//! backends.register("sqlite", Box::new(SqliteRegistryFactory));
//! ```

use std::collections::HashMap;
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::model::{ArrayPhoneRegistry, ListPhoneRegistry};
use crate::traits::{PhoneRegistry, PhoneRegistryFactory};

/// Factory for [`ArrayPhoneRegistry`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayRegistryFactory;

impl PhoneRegistryFactory for ArrayRegistryFactory {
    fn create(&self, config: &RegistryConfig) -> Result<Box<dyn PhoneRegistry>> {
        let capacity = config.resolved_capacity()?;
        Ok(Box::new(ArrayPhoneRegistry::from_capacity(
            config.message.clone(),
            capacity,
        )?))
    }
}

/// Factory for [`ListPhoneRegistry`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ListRegistryFactory;

impl PhoneRegistryFactory for ListRegistryFactory {
    fn create(&self, config: &RegistryConfig) -> Result<Box<dyn PhoneRegistry>> {
        let capacity = config.resolved_capacity()?;
        let mut registry = ListPhoneRegistry::with_capacity(capacity);
        registry.set_message(config.message.clone());
        Ok(Box::new(registry))
    }
}

/// Backend registry for plugin-based phone registry creation
///
/// Registration takes `&mut self`; the registry is meant to be set up once
/// and then only read.
#[derive(Default)]
pub struct BackendRegistry {
    factories: HashMap<String, Box<dyn PhoneRegistryFactory>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the `array` and `list` backends registered
    pub fn with_builtins() -> Self {
        let mut backends = Self::new();
        backends.register("array", Box::new(ArrayRegistryFactory));
        backends.register("list", Box::new(ListRegistryFactory));
        backends
    }

    /// Register a factory under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, factory: Box<dyn PhoneRegistryFactory>) {
        let name = name.into();
        info!("Registering registry backend {}", name);
        self.factories.insert(name, factory);
    }

    /// Create a phone registry from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn PhoneRegistry>)`: Created registry
    /// - `Err(Error)`: Invalid configuration, unknown backend, or factory failure
    pub fn create(&self, config: &RegistryConfig) -> Result<Box<dyn PhoneRegistry>> {
        config.validate()?;

        let backend = config.backend.type_name();
        let factory = self
            .factories
            .get(backend)
            .ok_or_else(|| Error::unknown_backend(backend))?;

        let registry = factory.create(config)?;
        debug!(
            "Created {} registry with capacity {}",
            backend,
            registry.max_num_phone_numbers()
        );
        Ok(registry)
    }

    /// List all registered backend names, sorted
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a backend is registered
    pub fn has_backend(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use crate::traits::Capacity;

    struct FailingFactory;

    impl PhoneRegistryFactory for FailingFactory {
        fn create(&self, _config: &RegistryConfig) -> Result<Box<dyn PhoneRegistry>> {
            Err(Error::invalid_input("failing backend"))
        }
    }

    #[test]
    fn test_builtins_registered() {
        let backends = BackendRegistry::with_builtins();
        assert!(backends.has_backend("array"));
        assert!(backends.has_backend("list"));
        assert_eq!(backends.list_backends(), vec!["array", "list"]);
    }

    #[test]
    fn test_create_array_from_config() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::Array)
            .with_capacity(3)
            .with_message("Hello, World");

        let registry = backends.create(&config).unwrap();
        assert_eq!(registry.max_num_phone_numbers(), Capacity::Bounded(3));
        assert_eq!(registry.message(), Some("Hello, World"));
    }

    #[test]
    fn test_create_unbounded_list_from_config() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::List).unbounded();

        let registry = backends.create(&config).unwrap();
        assert_eq!(registry.max_num_phone_numbers(), Capacity::Unbounded);
        assert_eq!(registry.message(), None);
    }

    #[test]
    fn test_unknown_backend() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::Custom {
            factory: "redis".to_string(),
            config: serde_json::Value::Null,
        });

        let err = backends.create(&config).unwrap_err();
        assert!(matches!(err, Error::UnknownBackend(ref name) if name == "redis"));
    }

    #[test]
    fn test_custom_factory_errors_propagate() {
        let mut backends = BackendRegistry::new();
        backends.register("failing", Box::new(FailingFactory));

        let config = RegistryConfig::new(BackendConfig::Custom {
            factory: "failing".to_string(),
            config: serde_json::Value::Null,
        });

        assert!(matches!(
            backends.create(&config),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_huge_array_capacity_is_a_config_error() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::Array).with_capacity(i64::MAX);

        assert!(config.validate().is_ok());
        assert!(matches!(backends.create(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_huge_list_capacity_is_accepted() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::List).with_capacity(i64::MAX);

        let registry = backends.create(&config).unwrap();
        assert_eq!(registry.max_num_phone_numbers().as_raw(), i64::MAX);
    }

    #[test]
    fn test_invalid_capacity_rejected_before_factory() {
        let backends = BackendRegistry::with_builtins();
        let config = RegistryConfig::new(BackendConfig::List).with_capacity(-2);
        assert!(matches!(backends.create(&config), Err(Error::Config(_))));
    }
}
