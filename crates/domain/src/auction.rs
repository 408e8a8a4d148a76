//! The auction record.

use crate::AuctionField;
use auction_model_shared::{Validated, ValidationErrors};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// In-memory auction prior to any persistence.
///
/// Every field may be absent; construction never fails. Use
/// [`validation_errors`](crate::validation_errors) or
/// [`Auction::into_validated`] to find out whether the record is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Auction {
    /// Listing title. Blank text counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Listing description. Blank text counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When bidding opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// When bidding closes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Auction {
    /// Build a fully populated auction.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> AuctionBuilder {
        AuctionBuilder::default()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Set the start date.
    pub const fn set_start_date(&mut self, start_date: DateTime<Utc>) -> &mut Self {
        self.start_date = Some(start_date);
        self
    }

    /// Set the end date.
    pub const fn set_end_date(&mut self, end_date: DateTime<Utc>) -> &mut Self {
        self.end_date = Some(end_date);
        self
    }

    /// Reset a single field to absent.
    pub fn clear(&mut self, field: AuctionField) -> &mut Self {
        match field {
            AuctionField::Title => self.title = None,
            AuctionField::Description => self.description = None,
            AuctionField::StartDate => self.start_date = None,
            AuctionField::EndDate => self.end_date = None,
        }
        self
    }

    /// Validate and wrap the record, or return every missing field.
    pub fn into_validated(self) -> Result<Validated<Self>, ValidationErrors<AuctionField>> {
        Validated::check(self)
    }
}

/// JSON Schema for the auction wire shape.
#[must_use]
pub fn auction_schema() -> schemars::Schema {
    schemars::schema_for!(Auction)
}

/// Piecewise builder for [`Auction`]. Unset fields stay absent.
#[derive(Debug, Clone, Default)]
pub struct AuctionBuilder {
    auction: Auction,
}

impl AuctionBuilder {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.auction.title = Some(title.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.auction.description = Some(description.into());
        self
    }

    /// Set the start date.
    #[must_use]
    pub const fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.auction.start_date = Some(start_date);
        self
    }

    /// Set the end date.
    #[must_use]
    pub const fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.auction.end_date = Some(end_date);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Auction {
        self.auction
    }
}
