//! Minimal embedding example for sms-model-core
//!
//! Builds a phone registry from environment variables, adds the phone
//! numbers given on the command line, and prints the resulting recipient
//! list as JSON. The SMS transport itself is out of scope; this shows how a
//! sending workflow would drive the registry and handle its errors.
//!
//! ## Configuration
//!
//! - `SMS_MODEL_BACKEND`: `array` or `list` (default `array`)
//! - `SMS_MODEL_CAPACITY`: capacity, `-1` for unbounded (default 100)
//! - `SMS_MODEL_MESSAGE`: message attached to the registry
//! - `SMS_MODEL_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//!
//! ## Example
//!
//! ```bash
//! SMS_MODEL_BACKEND=list SMS_MODEL_CAPACITY=3 SMS_MODEL_MESSAGE="Hi" \
//!     embedded_usage 9876543210 1234567890 1234567890
//! ```

use anyhow::Result;
use sms_model_core::{BackendConfig, BackendRegistry, PhoneRegistry, RegistryConfig, RegistryError};
use std::env;
use std::process::ExitCode;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the example
#[derive(Debug, Clone, Copy)]
enum DemoExitCode {
    /// Every number was accepted
    Success = 0,
    /// Configuration or startup error
    ConfigError = 1,
    /// At least one number was rejected
    Rejected = 2,
}

impl From<DemoExitCode> for ExitCode {
    fn from(code: DemoExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Example configuration
struct Config {
    backend: String,
    capacity: Option<i64>,
    message: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let capacity = match env::var("SMS_MODEL_CAPACITY") {
            Ok(raw) => Some(raw.trim().parse().map_err(|e| {
                anyhow::anyhow!("SMS_MODEL_CAPACITY must be an integer. Got '{}': {}", raw, e)
            })?),
            Err(_) => None,
        };

        Ok(Self {
            backend: env::var("SMS_MODEL_BACKEND").unwrap_or_else(|_| "array".to_string()),
            capacity,
            message: env::var("SMS_MODEL_MESSAGE").ok(),
            log_level: env::var("SMS_MODEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        match self.backend.as_str() {
            "array" | "list" => {}
            _ => anyhow::bail!(
                "SMS_MODEL_BACKEND '{}' is not supported. Supported backends: array, list",
                self.backend
            ),
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "SMS_MODEL_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        self.registry_config().validate()?;
        Ok(())
    }

    fn registry_config(&self) -> RegistryConfig {
        let backend = match self.backend.as_str() {
            "list" => BackendConfig::List,
            _ => BackendConfig::Array,
        };

        RegistryConfig {
            backend,
            capacity: self.capacity,
            message: self.message.clone(),
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DemoExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return DemoExitCode::ConfigError.into();
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DemoExitCode::ConfigError.into();
    }

    let numbers: Vec<String> = env::args().skip(1).collect();

    match run(&config, &numbers) {
        Ok(0) => DemoExitCode::Success.into(),
        Ok(rejected) => {
            warn!("{} number(s) rejected", rejected);
            DemoExitCode::Rejected.into()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            DemoExitCode::ConfigError.into()
        }
    }
}

/// Fill a registry with `numbers` and print it, returning the rejection count
fn run(config: &Config, numbers: &[String]) -> Result<usize> {
    let backends = BackendRegistry::with_builtins();
    let mut registry = backends.create(&config.registry_config())?;

    info!(
        "Using {} registry with capacity {}",
        config.backend,
        registry.max_num_phone_numbers()
    );

    let rejected = add_all(registry.as_mut(), numbers);
    registry.sort_numbers();

    let summary = serde_json::json!({
        "message": registry.message(),
        "capacity": registry.max_num_phone_numbers().as_raw(),
        "full": registry.is_full(),
        "recipients": registry.phone_numbers(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(rejected)
}

/// Add each number, logging and counting rejections
fn add_all(registry: &mut dyn PhoneRegistry, numbers: &[String]) -> usize {
    let mut rejected = 0;

    for number in numbers {
        match registry.add_phone_number(number) {
            Ok(added) => info!("Queued recipient {}", added),
            Err(e @ RegistryError::Duplicate { .. }) => {
                warn!("Skipping {}: {}", e.phone_number(), e);
                rejected += 1;
            }
            Err(e @ RegistryError::Full { .. }) => {
                warn!("Cannot queue {}: {}", e.phone_number(), e);
                rejected += 1;
            }
        }
    }

    rejected
}
