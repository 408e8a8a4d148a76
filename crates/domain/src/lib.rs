//! # auction-model-domain
//!
//! The auction record and its required-field validation.
//!
//! - **Record** - `Auction`, `AuctionBuilder`
//! - **Fields** - `AuctionField`
//! - **Validation** - `REQUIRED_FIELDS`, `validation_errors`, `is_valid`
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use auction_model_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod auction;
pub mod field;
pub mod validation;

pub use auction::{Auction, AuctionBuilder, auction_schema};
pub use field::AuctionField;
pub use validation::{REQUIRED_FIELDS, is_valid, required_fields, validation_errors};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
