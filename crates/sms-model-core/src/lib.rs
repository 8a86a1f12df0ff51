// # sms-model-core
//
// Core library for the phone-number registry behind SMS sending.
//
// ## Architecture Overview
//
// - **PhoneRegistry**: Trait for storing unique phone numbers and a message
// - **ArrayPhoneRegistry**: Fixed-capacity, slot-array implementation
// - **ListPhoneRegistry**: Growable implementation, optionally unbounded
// - **RegistryError**: Full-or-duplicate failure carrying the phone number
// - **BackendRegistry**: Plugin-based registry of implementation factories
//
// ## Design Principles
//
// 1. **One contract**: Callers only depend on the `PhoneRegistry` trait
// 2. **Structural vs semantic errors**: Bad indices yield `None`, rule
//    violations yield `RegistryError`
// 3. **Library-First**: No I/O, no persistence, no transport

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod traits;

// Re-export core types for convenience
pub use backend::BackendRegistry;
pub use config::{BackendConfig, RegistryConfig};
pub use error::{Error, RegistryError, Result};
pub use model::{ArrayPhoneRegistry, DEFAULT_MAX_NUM_PHONE_NUMBERS, ListPhoneRegistry};
pub use traits::{Capacity, PhoneRegistry, PhoneRegistryFactory};
