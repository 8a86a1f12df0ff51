//! Error types for the SMS model
//!
//! Two layers live here:
//!
//! - [`RegistryError`]: the business-rule failure raised when a registry is
//!   full or a phone number would be duplicated. Only `add_phone_number` and
//!   `update_phone_number` produce it.
//! - [`Error`]: the crate-wide error for configuration and backend
//!   construction.
//!
//! Out-of-range indices are never errors. Read operations report them by
//! returning `None`.

use thiserror::Error;

/// Result type alias for SMS model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Full-or-duplicate failure carrying the offending phone number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry reached its capacity
    #[error("The model is full. Cannot add more phone numbers.")]
    Full {
        /// Number that could not be added
        phone_number: String,
    },

    /// The phone number is already stored at another index
    #[error("Duplicate phone number: {phone_number}")]
    Duplicate {
        /// Number that collided with an existing entry
        phone_number: String,
    },
}

impl RegistryError {
    /// Create a "full" error for the rejected number
    pub fn full(phone_number: impl Into<String>) -> Self {
        Self::Full {
            phone_number: phone_number.into(),
        }
    }

    /// Create a "duplicate" error for the rejected number
    pub fn duplicate(phone_number: impl Into<String>) -> Self {
        Self::Duplicate {
            phone_number: phone_number.into(),
        }
    }

    /// The phone number that triggered the failure
    pub fn phone_number(&self) -> &str {
        match self {
            Self::Full { phone_number } | Self::Duplicate { phone_number } => phone_number,
        }
    }

    /// Human-readable description, identical to the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the failure was caused by the capacity limit
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }

    /// Whether the failure was caused by a duplicate number
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Core error type for the SMS model crate
#[derive(Error, Debug)]
pub enum Error {
    /// Registry rule violation (full or duplicate)
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No factory registered under the requested backend name
    #[error("Unknown registry backend: {0}")]
    UnknownBackend(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown backend error
    pub fn unknown_backend(name: impl Into<String>) -> Self {
        Self::UnknownBackend(name.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
