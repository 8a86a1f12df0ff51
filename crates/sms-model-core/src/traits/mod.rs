//! Core traits for the SMS model
//!
//! This module defines the abstract interface that all registries follow.
//!
//! - [`PhoneRegistry`]: Store, look up and reorder unique phone numbers
//! - [`PhoneRegistryFactory`]: Build registries from configuration

pub mod phone_registry;

pub use phone_registry::{Capacity, PhoneRegistry, PhoneRegistryFactory, UNBOUNDED};
