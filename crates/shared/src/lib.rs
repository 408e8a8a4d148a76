//! # auction-model-shared
//!
//! Shared result types, error handling, and validation primitives for the
//! auction-model workspace.
//!
//! - Result and error envelope types
//! - Required-field rule tables and error sets
//! - `Validated<T>` proof wrapper
//!
//! ## Design Principles
//!
//! 1. **No dependencies** - std only
//! 2. **Errors as data** - Validation reports every violation, never panics
//! 3. **Namespaced codes** - I/O failures share the `io` namespace

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod invariants;
pub mod result;
pub mod validation;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::Validated;
pub use result::Result;
pub use validation::{
    FieldName, MissingRequiredField, RequiredRule, Validate, ValidationErrors, check_required,
    text_present, value_present,
};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
