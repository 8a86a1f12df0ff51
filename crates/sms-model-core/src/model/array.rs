// # Array Phone Registry
//
// Fixed-capacity implementation of PhoneRegistry.
//
// ## Layout
//
// Numbers live in a slot array allocated once at construction and never
// resized. The first `count` slots are filled, the rest are `None`.
// Deleting shifts the tail down and clears the last filled slot, so indices
// stay contiguous.

use tracing::{debug, warn};

use crate::error::{Error, RegistryError};
use crate::traits::{Capacity, PhoneRegistry};

/// Capacity used when none is given
pub const DEFAULT_MAX_NUM_PHONE_NUMBERS: usize = 100;

/// Largest slot array [`ArrayPhoneRegistry::from_capacity`] will allocate
pub const MAX_ARRAY_CAPACITY: usize = 1_000_000;

/// Array-backed phone registry with an enforced capacity
///
/// # Example
///
/// ```rust
/// use sms_model_core::model::ArrayPhoneRegistry;
/// use sms_model_core::traits::PhoneRegistry;
///
/// let mut registry = ArrayPhoneRegistry::new("Hello, World", 2);
/// registry.add_phone_number("1234567890").unwrap();
/// registry.add_phone_number("9876543210").unwrap();
///
/// assert!(registry.is_full());
/// assert!(registry.add_phone_number("5555555555").unwrap_err().is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayPhoneRegistry {
    slots: Box<[Option<String>]>,
    count: usize,
    message: Option<String>,
}

impl ArrayPhoneRegistry {
    /// Create a registry holding at most `capacity` numbers
    ///
    /// # Panics
    ///
    /// The slot array is allocated up front, so a `capacity` too large to
    /// allocate panics. Use [`ArrayPhoneRegistry::from_capacity`] for
    /// capacities that come from configuration.
    pub fn new(message: impl Into<String>, capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            count: 0,
            message: Some(message.into()),
        }
    }

    /// Create a registry with [`DEFAULT_MAX_NUM_PHONE_NUMBERS`] slots
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new(message, DEFAULT_MAX_NUM_PHONE_NUMBERS)
    }

    /// Create a registry from a [`Capacity`]
    ///
    /// The slot array has to be finite, so `Capacity::Unbounded` falls back
    /// to [`DEFAULT_MAX_NUM_PHONE_NUMBERS`]. Capacities above
    /// [`MAX_ARRAY_CAPACITY`] are rejected with a configuration error.
    pub fn from_capacity(message: Option<String>, capacity: Capacity) -> Result<Self, Error> {
        let slots = match capacity {
            Capacity::Bounded(n) if n > MAX_ARRAY_CAPACITY => {
                return Err(Error::config(format!(
                    "Array registry capacity {} exceeds the maximum of {}",
                    n, MAX_ARRAY_CAPACITY
                )));
            }
            Capacity::Bounded(n) => n,
            Capacity::Unbounded => {
                warn!(
                    "Array registry cannot be unbounded, using default capacity {}",
                    DEFAULT_MAX_NUM_PHONE_NUMBERS
                );
                DEFAULT_MAX_NUM_PHONE_NUMBERS
            }
        };

        Ok(Self {
            slots: vec![None; slots].into_boxed_slice(),
            count: 0,
            message,
        })
    }

    fn filled(&self) -> &[Option<String>] {
        &self.slots[..self.count]
    }
}

impl Default for ArrayPhoneRegistry {
    fn default() -> Self {
        Self {
            slots: vec![None; DEFAULT_MAX_NUM_PHONE_NUMBERS].into_boxed_slice(),
            count: 0,
            message: None,
        }
    }
}

impl PhoneRegistry for ArrayPhoneRegistry {
    fn add_phone_number(&mut self, number: &str) -> Result<String, RegistryError> {
        if self.count >= self.slots.len() {
            debug!("Registry full ({} slots), rejecting {}", self.slots.len(), number);
            return Err(RegistryError::full(number));
        }

        if self.contains(number) {
            debug!("Rejecting duplicate {}", number);
            return Err(RegistryError::duplicate(number));
        }

        self.slots[self.count] = Some(number.to_string());
        self.count += 1;
        debug!("Added {} at index {}", number, self.count - 1);
        Ok(number.to_string())
    }

    fn update_phone_number(
        &mut self,
        number: &str,
        index: usize,
    ) -> Result<Option<String>, RegistryError> {
        if index >= self.count {
            return Ok(None);
        }

        if self.slots[index].as_deref() != Some(number) && self.contains(number) {
            debug!("Rejecting update of index {} to duplicate {}", index, number);
            return Err(RegistryError::duplicate(number));
        }

        let previous = self.slots[index].replace(number.to_string());
        debug!("Updated index {} -> {} (previous: {:?})", index, number, previous);
        Ok(previous)
    }

    fn get_phone_number(&self, index: usize) -> Option<&str> {
        self.filled().get(index).and_then(|slot| slot.as_deref())
    }

    fn delete_number(&mut self, index: usize) -> Option<String> {
        if index >= self.count {
            return None;
        }

        let removed = self.slots[index].take();
        // Move the emptied slot to the end of the filled range
        self.slots[index..self.count].rotate_left(1);
        self.count -= 1;
        debug!("Deleted index {} ({:?})", index, removed);
        removed
    }

    fn find_phone_number_index(&self, number: &str) -> Option<usize> {
        self.filled()
            .iter()
            .position(|slot| slot.as_deref() == Some(number))
    }

    fn max_num_phone_numbers(&self) -> Capacity {
        Capacity::Bounded(self.slots.len())
    }

    fn num_phone_numbers(&self) -> usize {
        self.count
    }

    fn phone_numbers(&self) -> Vec<String> {
        self.filled().iter().flatten().cloned().collect()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    fn sort_numbers(&mut self) {
        self.slots[..self.count].sort();
    }
}
