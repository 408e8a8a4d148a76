//! Required-field rules for auctions.

use crate::{Auction, AuctionField};
use auction_model_shared::{
    RequiredRule, Validate, ValidationErrors, check_required, text_present, value_present,
};

/// Every auction field is required; checked in this order.
pub const REQUIRED_FIELDS: [RequiredRule<Auction, AuctionField>; 4] = [
    RequiredRule::new(AuctionField::Title, title_present),
    RequiredRule::new(AuctionField::Description, description_present),
    RequiredRule::new(AuctionField::StartDate, start_date_present),
    RequiredRule::new(AuctionField::EndDate, end_date_present),
];

fn title_present(auction: &Auction) -> bool {
    text_present(auction.title.as_deref())
}

fn description_present(auction: &Auction) -> bool {
    text_present(auction.description.as_deref())
}

const fn start_date_present(auction: &Auction) -> bool {
    value_present(auction.start_date.as_ref())
}

const fn end_date_present(auction: &Auction) -> bool {
    value_present(auction.end_date.as_ref())
}

/// Fields that are absent on `auction`. Empty iff the auction is valid.
pub fn validation_errors(auction: &Auction) -> ValidationErrors<AuctionField> {
    check_required(auction, &REQUIRED_FIELDS)
}

/// Returns true when every required field is present.
pub fn is_valid(auction: &Auction) -> bool {
    validation_errors(auction).is_empty()
}

/// Required fields in rule order.
pub fn required_fields() -> impl Iterator<Item = AuctionField> {
    REQUIRED_FIELDS.into_iter().map(|rule| rule.field)
}

impl Validate for Auction {
    type Field = AuctionField;

    fn validation_errors(&self) -> ValidationErrors<AuctionField> {
        validation_errors(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, Utc};
    use proptest::prelude::*;

    fn complete() -> Auction {
        let start = Utc::now();
        Auction::new("Anything", "Lorem ipsum", start, start + TimeDelta::days(7))
    }

    #[test]
    fn complete_auction_is_valid() {
        let auction = complete();
        assert!(is_valid(&auction));
        assert!(validation_errors(&auction).is_empty());
        assert!(auction.validate().is_ok());
    }

    #[test]
    fn each_absent_field_is_reported_alone() {
        for field in AuctionField::ALL {
            let mut auction = complete();
            auction.clear(field);

            let errors = validation_errors(&auction);
            assert!(!is_valid(&auction));
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn blank_text_counts_as_absent() {
        let mut auction = complete();
        auction.set_title("").set_description("   ");

        let errors = validation_errors(&auction);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![AuctionField::Title, AuctionField::Description]
        );
    }

    #[test]
    fn end_before_start_is_not_a_violation() {
        let start = Utc::now();
        let auction = Auction::new("Lamp", "Brass", start, start - TimeDelta::days(1));
        assert!(is_valid(&auction));
    }

    #[test]
    fn required_fields_cover_every_field() {
        assert_eq!(required_fields().collect::<Vec<_>>(), AuctionField::ALL);
    }

    fn text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of(prop_oneof![
            Just(String::new()),
            "[ \t]{1,4}",
            "[ ]{0,2}[a-zA-Z0-9]{1,12}[ ]{0,2}",
        ])
    }

    fn timestamp() -> impl Strategy<Value = Option<DateTime<Utc>>> {
        proptest::option::of(
            (0_i64..4_102_444_800).prop_filter_map("timestamp out of range", |seconds| {
                DateTime::from_timestamp(seconds, 0)
            }),
        )
    }

    fn any_auction() -> impl Strategy<Value = Auction> {
        (text(), text(), timestamp(), timestamp()).prop_map(
            |(title, description, start_date, end_date)| Auction {
                title,
                description,
                start_date,
                end_date,
            },
        )
    }

    fn expected_missing(auction: &Auction) -> Vec<AuctionField> {
        let blank = |value: Option<&String>| value.is_none_or(|text| text.trim().is_empty());
        let mut missing = Vec::new();
        if blank(auction.title.as_ref()) {
            missing.push(AuctionField::Title);
        }
        if blank(auction.description.as_ref()) {
            missing.push(AuctionField::Description);
        }
        if auction.start_date.is_none() {
            missing.push(AuctionField::StartDate);
        }
        if auction.end_date.is_none() {
            missing.push(AuctionField::EndDate);
        }
        missing
    }

    proptest! {
        #[test]
        fn errors_match_absent_fields(auction in any_auction()) {
            let errors = validation_errors(&auction);
            prop_assert_eq!(errors.fields().collect::<Vec<_>>(), expected_missing(&auction));
            prop_assert_eq!(is_valid(&auction), errors.is_empty());
        }

        #[test]
        fn validation_is_idempotent(auction in any_auction()) {
            prop_assert_eq!(validation_errors(&auction), validation_errors(&auction));
            prop_assert_eq!(auction.is_valid(), auction.is_valid());
        }

        #[test]
        fn filling_a_field_removes_only_that_error(auction in any_auction()) {
            let before = validation_errors(&auction);
            for field in before.fields() {
                let mut filled = auction.clone();
                match field {
                    AuctionField::Title => { filled.set_title("filled"); },
                    AuctionField::Description => { filled.set_description("filled"); },
                    AuctionField::StartDate => { filled.set_start_date(Utc::now()); },
                    AuctionField::EndDate => { filled.set_end_date(Utc::now()); },
                }

                let after = validation_errors(&filled);
                let expected: Vec<_> = before.fields().filter(|other| *other != field).collect();
                prop_assert!(!after.contains(field));
                prop_assert_eq!(after.fields().collect::<Vec<_>>(), expected);
            }
        }
    }
}
