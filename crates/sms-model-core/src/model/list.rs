// # List Phone Registry
//
// Growable implementation of PhoneRegistry.
//
// ## Capacity
//
// The backing vector has no hard ceiling, but the capacity is still
// enforced when one is configured. `ListPhoneRegistry::new()` uses the same
// numeric default as the array registry and enforces it. Use
// `ListPhoneRegistry::unbounded()` for a registry without any limit.

use tracing::debug;

use super::array::DEFAULT_MAX_NUM_PHONE_NUMBERS;
use crate::error::RegistryError;
use crate::traits::{Capacity, PhoneRegistry};

/// Vec-backed phone registry
///
/// # Example
///
/// ```rust
/// use sms_model_core::model::ListPhoneRegistry;
/// use sms_model_core::traits::PhoneRegistry;
///
/// let mut registry = ListPhoneRegistry::unbounded();
/// registry.add_phone_number("9876543210").unwrap();
/// registry.add_phone_number("1234567890").unwrap();
/// registry.sort_numbers();
///
/// assert_eq!(registry.phone_numbers(), vec!["1234567890", "9876543210"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPhoneRegistry {
    numbers: Vec<String>,
    capacity: Capacity,
    message: Option<String>,
}

impl ListPhoneRegistry {
    /// Create a registry limited to [`DEFAULT_MAX_NUM_PHONE_NUMBERS`]
    pub fn new() -> Self {
        Self::with_capacity(Capacity::Bounded(DEFAULT_MAX_NUM_PHONE_NUMBERS))
    }

    /// Create a registry with the given capacity
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            numbers: Vec::new(),
            capacity,
            message: None,
        }
    }

    /// Create a registry without any limit
    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    /// Attach an initial message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Default for ListPhoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneRegistry for ListPhoneRegistry {
    fn add_phone_number(&mut self, number: &str) -> Result<String, RegistryError> {
        if self.capacity.is_reached_by(self.numbers.len()) {
            debug!("Registry full (capacity {}), rejecting {}", self.capacity, number);
            return Err(RegistryError::full(number));
        }

        if self.numbers.iter().any(|n| n == number) {
            debug!("Rejecting duplicate {}", number);
            return Err(RegistryError::duplicate(number));
        }

        self.numbers.push(number.to_string());
        debug!("Added {} at index {}", number, self.numbers.len() - 1);
        Ok(number.to_string())
    }

    fn update_phone_number(
        &mut self,
        number: &str,
        index: usize,
    ) -> Result<Option<String>, RegistryError> {
        let Some(current) = self.numbers.get(index) else {
            return Ok(None);
        };

        if current != number && self.numbers.iter().any(|n| n == number) {
            debug!("Rejecting update of index {} to duplicate {}", index, number);
            return Err(RegistryError::duplicate(number));
        }

        let previous = std::mem::replace(&mut self.numbers[index], number.to_string());
        debug!("Updated index {} -> {} (previous: {})", index, number, previous);
        Ok(Some(previous))
    }

    fn get_phone_number(&self, index: usize) -> Option<&str> {
        self.numbers.get(index).map(String::as_str)
    }

    fn delete_number(&mut self, index: usize) -> Option<String> {
        if index >= self.numbers.len() {
            return None;
        }

        let removed = self.numbers.remove(index);
        debug!("Deleted index {} ({})", index, removed);
        Some(removed)
    }

    fn find_phone_number_index(&self, number: &str) -> Option<usize> {
        self.numbers.iter().position(|n| n == number)
    }

    fn max_num_phone_numbers(&self) -> Capacity {
        self.capacity
    }

    fn num_phone_numbers(&self) -> usize {
        self.numbers.len()
    }

    fn phone_numbers(&self) -> Vec<String> {
        self.numbers.clone()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    fn sort_numbers(&mut self) {
        self.numbers.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_phone_number() {
        let mut registry = ListPhoneRegistry::new();
        assert_eq!(registry.num_phone_numbers(), 0);

        registry.add_phone_number("1234567890").unwrap();

        assert_eq!(registry.num_phone_numbers(), 1);
        assert_eq!(registry.get_phone_number(0), Some("1234567890"));
    }

    #[test]
    fn test_add_duplicate_phone_number() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("1234567890").unwrap();

        let err = registry.add_phone_number("1234567890").unwrap_err();
        assert_eq!(err.message(), "Duplicate phone number: 1234567890");
        assert_eq!(err.phone_number(), "1234567890");
    }

    #[test]
    fn test_update_phone_number() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("1234567890").unwrap();

        let old = registry.update_phone_number("9876543210", 0).unwrap();

        assert_eq!(old.as_deref(), Some("1234567890"));
        assert_eq!(registry.get_phone_number(0), Some("9876543210"));
    }

    #[test]
    fn test_update_phone_number_with_duplicate() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("1234567890").unwrap();
        registry.add_phone_number("9876543210").unwrap();

        let err = registry.update_phone_number("9876543210", 0).unwrap_err();
        assert_eq!(err.message(), "Duplicate phone number: 9876543210");
        assert_eq!(registry.phone_numbers(), vec!["1234567890", "9876543210"]);
    }

    #[test]
    fn test_find_phone_number_index() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("1234567890").unwrap();
        registry.add_phone_number("9876543210").unwrap();

        assert_eq!(registry.find_phone_number_index("9876543210"), Some(1));
        assert_eq!(registry.find_phone_number_index("5555555555"), None);
    }

    #[test]
    fn test_delete_number() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("1234567890").unwrap();

        assert_eq!(registry.delete_number(0).as_deref(), Some("1234567890"));
        assert_eq!(registry.num_phone_numbers(), 0);
        assert_eq!(registry.delete_number(0), None);
    }

    #[test]
    fn test_default_capacity_is_shared_and_enforced() {
        let mut registry = ListPhoneRegistry::new();
        assert_eq!(
            registry.max_num_phone_numbers(),
            Capacity::Bounded(DEFAULT_MAX_NUM_PHONE_NUMBERS)
        );

        for i in 0..DEFAULT_MAX_NUM_PHONE_NUMBERS {
            registry.add_phone_number(&format!("555{:07}", i)).unwrap();
        }
        assert!(registry.is_full());
        assert!(registry.add_phone_number("0000000000").unwrap_err().is_full());
    }

    #[test]
    fn test_unbounded_never_fills() {
        let mut registry = ListPhoneRegistry::unbounded();
        assert_eq!(registry.max_num_phone_numbers().as_raw(), -1);

        for i in 0..(DEFAULT_MAX_NUM_PHONE_NUMBERS * 2) {
            registry.add_phone_number(&i.to_string()).unwrap();
        }
        assert!(!registry.is_full());
        assert_eq!(registry.remaining_capacity(), None);
    }

    #[test]
    fn test_is_full() {
        let mut registry = ListPhoneRegistry::new();
        assert!(!registry.is_full());
        registry.add_phone_number("1234567890").unwrap();
        assert!(!registry.is_full());
    }

    #[test]
    fn test_message_is_stored() {
        let mut registry = ListPhoneRegistry::new().with_message("Hello");
        assert_eq!(registry.message(), Some("Hello"));

        registry.set_message(Some("Goodbye".to_string()));
        assert_eq!(registry.message(), Some("Goodbye"));
    }

    #[test]
    fn test_sort_numbers() {
        let mut registry = ListPhoneRegistry::new();
        registry.add_phone_number("9876543210").unwrap();
        registry.add_phone_number("1234567890").unwrap();

        registry.sort_numbers();

        assert_eq!(registry.phone_numbers(), vec!["1234567890", "9876543210"]);
    }
}
