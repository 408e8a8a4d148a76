//! Compile-time proof that a value passed validation.

use crate::validation::{Validate, ValidationErrors};

/// Proof wrapper indicating a value has been validated.
///
/// Record types go through [`Validated::check`]; types with non-presence
/// invariants check them first and then call [`Validated::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Wrap a value whose invariants were checked by the caller.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Validate> Validated<T> {
    /// Validate `value` and wrap it, or return every violation.
    pub fn check(value: T) -> Result<Self, ValidationErrors<T::Field>> {
        value.validate()?;
        Ok(Self::new(value))
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
