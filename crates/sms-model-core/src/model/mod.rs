// # Phone Registry Implementations
//
// This module provides implementations of the PhoneRegistry trait for
// different storage strategies.

pub mod array;
pub mod list;

pub use array::{ArrayPhoneRegistry, DEFAULT_MAX_NUM_PHONE_NUMBERS, MAX_ARRAY_CAPACITY};
pub use list::ListPhoneRegistry;
