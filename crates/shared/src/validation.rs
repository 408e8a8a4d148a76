//! Presence validation primitives for record types.
//!
//! Records declare their required fields as a static table of
//! [`RequiredRule`]s. [`check_required`] evaluates every rule and collects
//! the absent fields into [`ValidationErrors`], so callers can surface all
//! violations at once instead of stopping at the first one.

use crate::errors::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a validated record field.
pub trait FieldName: Copy + Ord + fmt::Debug {
    /// Stable wire name of the field.
    fn name(self) -> &'static str;
}

/// A required field was absent at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingRequiredField<F> {
    /// The absent field.
    pub field: F,
}

impl<F: FieldName> MissingRequiredField<F> {
    /// Wrap a missing field.
    pub const fn new(field: F) -> Self {
        Self { field }
    }

    /// Human-readable message, e.g. `title can't be blank`.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl<F: FieldName> fmt::Display for MissingRequiredField<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} can't be blank", self.field.name())
    }
}

/// All violations found by one validation pass, ordered by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F> {
    missing: BTreeSet<F>,
}

impl<F> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            missing: BTreeSet::new(),
        }
    }
}

impl<F: FieldName> ValidationErrors<F> {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a missing required field. Recording twice is a no-op.
    pub fn record_missing(&mut self, field: F) {
        self.missing.insert(field);
    }

    /// Returns true when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    /// Returns true when `field` was reported missing.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.missing.contains(&field)
    }

    /// Missing fields in field order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.missing.iter().copied()
    }

    /// Missing fields as typed violations.
    pub fn iter(&self) -> impl Iterator<Item = MissingRequiredField<F>> + '_ {
        self.fields().map(MissingRequiredField::new)
    }

    /// Wire names of the missing fields.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields().map(FieldName::name).collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<F: FieldName> FromIterator<F> for ValidationErrors<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            missing: iter.into_iter().collect(),
        }
    }
}

impl<F: FieldName> fmt::Display for ValidationErrors<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("no validation errors");
        }
        write!(
            formatter,
            "missing required fields: {}",
            self.field_names().join(", ")
        )
    }
}

impl<F: FieldName> std::error::Error for ValidationErrors<F> {}

impl<F: FieldName> From<ValidationErrors<F>> for ErrorEnvelope {
    fn from(errors: ValidationErrors<F>) -> Self {
        Self::expected(ErrorCode::missing_required_field(), errors.to_string())
            .with_metadata("fields", errors.field_names().join(","))
    }
}

/// Presence check bound to the field it guards.
pub struct RequiredRule<T, F> {
    /// Field reported when the check fails.
    pub field: F,
    /// Returns true when the field holds a present value.
    pub is_present: fn(&T) -> bool,
}

impl<T, F> RequiredRule<T, F> {
    /// Pair a field with its presence check.
    pub const fn new(field: F, is_present: fn(&T) -> bool) -> Self {
        Self { field, is_present }
    }
}

/// Evaluate every rule against `record`; never short-circuits.
pub fn check_required<T, F: FieldName>(
    record: &T,
    rules: &[RequiredRule<T, F>],
) -> ValidationErrors<F> {
    rules
        .iter()
        .filter(|rule| !(rule.is_present)(record))
        .map(|rule| rule.field)
        .collect()
}

/// Text is present when it holds at least one non-whitespace character.
#[must_use]
pub fn text_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

/// Non-text values are present when set.
#[must_use]
pub const fn value_present<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Record types validated against a required-field table.
pub trait Validate {
    /// Field identifier reported in errors.
    type Field: FieldName;

    /// Collect every violation; empty iff the record is valid.
    fn validation_errors(&self) -> ValidationErrors<Self::Field>;

    /// Returns true when no violation exists.
    fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Validate, returning the full error set on failure.
    fn validate(&self) -> Result<(), ValidationErrors<Self::Field>> {
        self.validation_errors().into_result()
    }
}
