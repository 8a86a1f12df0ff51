//! Shared fixtures for registry contract tests
//!
//! Every contract test runs against both implementations through the
//! `PhoneRegistry` trait object, so the two stay interchangeable.

#![allow(dead_code)]

use sms_model_core::model::{ArrayPhoneRegistry, ListPhoneRegistry};
use sms_model_core::traits::{Capacity, PhoneRegistry};

/// Greeting used for registries built by these fixtures
pub const TEST_MESSAGE: &str = "Hello, World";

/// A bounded registry of each kind with the given capacity
pub fn bounded_registries(capacity: usize) -> Vec<(&'static str, Box<dyn PhoneRegistry>)> {
    vec![
        (
            "array",
            Box::new(ArrayPhoneRegistry::new(TEST_MESSAGE, capacity)),
        ),
        (
            "list",
            Box::new(
                ListPhoneRegistry::with_capacity(Capacity::Bounded(capacity))
                    .with_message(TEST_MESSAGE),
            ),
        ),
    ]
}

/// Roomy registries of each kind, including a truly unbounded list
pub fn roomy_registries() -> Vec<(&'static str, Box<dyn PhoneRegistry>)> {
    vec![
        ("array", Box::new(ArrayPhoneRegistry::with_message(TEST_MESSAGE))),
        ("list", Box::new(ListPhoneRegistry::new().with_message(TEST_MESSAGE))),
        (
            "unbounded list",
            Box::new(ListPhoneRegistry::unbounded().with_message(TEST_MESSAGE)),
        ),
    ]
}

/// Add every number, panicking on the first failure
pub fn fill(registry: &mut dyn PhoneRegistry, numbers: &[&str]) {
    for number in numbers {
        registry
            .add_phone_number(number)
            .unwrap_or_else(|e| panic!("adding {} failed: {}", number, e));
    }
}
