//! Field identifiers for the auction record.

use auction_model_shared::FieldName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named field of an [`Auction`](crate::Auction).
///
/// Ordering follows declaration order, which is also the order in which
/// validation errors are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AuctionField {
    /// Listing title.
    Title,
    /// Listing description.
    Description,
    /// When bidding opens.
    StartDate,
    /// When bidding closes.
    EndDate,
}

impl AuctionField {
    /// Every auction field, in declaration order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Description, Self::StartDate, Self::EndDate];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }
}

impl FieldName for AuctionField {
    fn name(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for AuctionField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
