// # Phone Registry Trait
//
// Defines the capability set shared by every phone-number registry.
//
// ## Purpose
//
// The SMS sending feature keeps the recipients of a message in a registry:
// - An ordered list of unique phone numbers
// - An optional capacity limit
// - A single message attached to the whole registry
//
// ## Implementations
//
// - Array-backed: fixed slot array sized to its capacity
// - List-backed: growable vector, optionally without any limit
//
// ## Usage
//
// ```rust
// use sms_model_core::model::ArrayPhoneRegistry;
// use sms_model_core::traits::PhoneRegistry;
//
// let mut registry = ArrayPhoneRegistry::new("Hello, World", 3);
// registry.add_phone_number("1234567890")?;
// assert_eq!(registry.find_phone_number_index("1234567890"), Some(0));
// # Ok::<(), sms_model_core::error::RegistryError>(())
// ```

use std::fmt;

use crate::error::RegistryError;

/// Raw capacity value meaning "no enforced maximum"
pub const UNBOUNDED: i64 = -1;

/// Maximum number of phone numbers a registry may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// At most this many numbers
    Bounded(usize),
    /// No enforced maximum
    Unbounded,
}

impl Capacity {
    /// Interpret a raw capacity where `-1` means unbounded
    ///
    /// Returns `None` for any other negative value.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            UNBOUNDED => Some(Capacity::Unbounded),
            n if n >= 0 => usize::try_from(n).ok().map(Capacity::Bounded),
            _ => None,
        }
    }

    /// Raw capacity value, `-1` when unbounded
    pub fn as_raw(&self) -> i64 {
        match self {
            Capacity::Bounded(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            Capacity::Unbounded => UNBOUNDED,
        }
    }

    /// The limit, if one is enforced
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(n) => Some(*n),
            Capacity::Unbounded => None,
        }
    }

    /// Whether `count` entries reach this capacity
    pub fn is_reached_by(&self, count: usize) -> bool {
        self.limit().is_some_and(|limit| count >= limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(n) => write!(f, "{}", n),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Trait for phone-number registry implementations
///
/// Indices are zero-based and contiguous. Out-of-range indices are never an
/// error: lookups and mutations by index return `None` and leave the
/// registry untouched. Business-rule violations (capacity reached, duplicate
/// number) are reported through [`RegistryError`] and must be handled by the
/// caller; implementations never swallow them.
///
/// Phone numbers are compared by exact string equality. No format
/// validation happens anywhere, so any string is accepted.
///
/// # Thread Safety
///
/// Registries are plain single-owner values. The `Send` bound lets an owner
/// move a boxed registry across threads, but any sharing needs external
/// synchronization.
pub trait PhoneRegistry: Send + fmt::Debug {
    /// Append a phone number
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The added number
    /// - `Err(RegistryError::Full)`: A finite capacity is already reached.
    ///   This check wins when the number is also a duplicate.
    /// - `Err(RegistryError::Duplicate)`: The number is already present
    fn add_phone_number(&mut self, number: &str) -> Result<String, RegistryError>;

    /// Overwrite the number stored at `index`
    ///
    /// Writing the value already stored at `index` is allowed and is not a
    /// duplicate.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: The previous number at `index`
    /// - `Ok(None)`: `index` is out of range, nothing changed
    /// - `Err(RegistryError::Duplicate)`: `number` is stored at another index
    fn update_phone_number(
        &mut self,
        number: &str,
        index: usize,
    ) -> Result<Option<String>, RegistryError>;

    /// Get the number at `index`, or `None` when out of range
    fn get_phone_number(&self, index: usize) -> Option<&str>;

    /// Remove the number at `index`
    ///
    /// Later entries shift down by one. Returns `None` when `index` is out of
    /// range.
    fn delete_number(&mut self, index: usize) -> Option<String>;

    /// Index of the first entry equal to `number`
    fn find_phone_number_index(&self, number: &str) -> Option<usize>;

    /// Configured capacity
    fn max_num_phone_numbers(&self) -> Capacity;

    /// Current number of stored phone numbers
    fn num_phone_numbers(&self) -> usize;

    /// Snapshot of the stored numbers in their current order
    fn phone_numbers(&self) -> Vec<String>;

    /// Message attached to the registry
    fn message(&self) -> Option<&str>;

    /// Replace the message attached to the registry
    fn set_message(&mut self, message: Option<String>);

    /// Sort the stored numbers in ascending lexicographic order
    fn sort_numbers(&mut self);

    /// Whether a finite capacity has been reached
    fn is_full(&self) -> bool {
        self.max_num_phone_numbers()
            .is_reached_by(self.num_phone_numbers())
    }

    /// Whether `number` is stored anywhere
    fn contains(&self, number: &str) -> bool {
        self.find_phone_number_index(number).is_some()
    }

    /// Whether the registry holds no numbers
    fn is_empty(&self) -> bool {
        self.num_phone_numbers() == 0
    }

    /// How many more numbers fit, `None` when unbounded
    fn remaining_capacity(&self) -> Option<usize> {
        self.max_num_phone_numbers()
            .limit()
            .map(|limit| limit.saturating_sub(self.num_phone_numbers()))
    }
}

/// Helper trait for constructing registries from configuration
pub trait PhoneRegistryFactory: Send + Sync {
    /// Create a registry instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Registry configuration (backend, capacity, message)
    ///
    /// # Returns
    ///
    /// A boxed PhoneRegistry trait object
    fn create(
        &self,
        config: &crate::config::RegistryConfig,
    ) -> Result<Box<dyn PhoneRegistry>, crate::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_capacity_round_trips_sentinel() {
        assert_eq!(Capacity::from_raw(-1), Some(Capacity::Unbounded));
        assert_eq!(Capacity::from_raw(3), Some(Capacity::Bounded(3)));
        assert_eq!(Capacity::from_raw(0), Some(Capacity::Bounded(0)));
        assert_eq!(Capacity::from_raw(-2), None);

        assert_eq!(Capacity::Unbounded.as_raw(), -1);
        assert_eq!(Capacity::Bounded(7).as_raw(), 7);
    }

    #[test]
    fn unbounded_is_never_reached() {
        assert!(!Capacity::Unbounded.is_reached_by(usize::MAX));
        assert!(Capacity::Bounded(0).is_reached_by(0));
        assert!(Capacity::Bounded(3).is_reached_by(3));
        assert!(!Capacity::Bounded(3).is_reached_by(2));
    }

    #[test]
    fn capacity_display() {
        assert_eq!(Capacity::Bounded(3).to_string(), "3");
        assert_eq!(Capacity::Unbounded.to_string(), "unbounded");
    }
}
