use chrono::NaiveDate;

use crate::{
    models::{
        add_on::AddOnKey,
        booking::{
            parse_calendar_date, BookingDraft, BookingField, FieldErrors, NormalizedBooking,
            MISSING_CHECK_IN, MISSING_CHECK_OUT,
        },
        catalog,
    },
    services::pricing_service::PricingService,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(NormalizedBooking),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

const TOO_MANY_GUESTS: &str = "Too many guests";

pub struct BookingValidationService;

impl BookingValidationService {
    /// Gate in front of checkout. Every rule runs, each failed field keeps
    /// its first message, and a supplied `nights` is always recomputed.
    pub fn validate(draft: &BookingDraft) -> ValidationResult {
        let mut errors = FieldErrors::default();

        let package_id = draft.package_id.trim();
        if package_id.is_empty() {
            errors.record(BookingField::PackageId, "Pick a package");
        } else if !catalog::is_known_package(package_id) {
            errors.record(BookingField::PackageId, "Invalid package");
        }

        let check_in = Self::check_date(
            &mut errors,
            BookingField::CheckIn,
            draft.check_in.as_deref(),
            MISSING_CHECK_IN,
        );
        let check_out = Self::check_date(
            &mut errors,
            BookingField::CheckOut,
            draft.check_out.as_deref(),
            MISSING_CHECK_OUT,
        );
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                errors.record(BookingField::CheckOut, "Check-out must be after check-in");
            }
        }

        let adults = match draft.adults {
            Some(n) if !is_whole(n) => {
                errors.record(BookingField::Adults, "Adults must be a whole number");
                None
            }
            Some(n) if n > f64::from(u32::MAX) => {
                errors.record(BookingField::Adults, TOO_MANY_GUESTS);
                None
            }
            Some(n) if n >= 1.0 => Some(n as u32),
            _ => {
                errors.record(BookingField::Adults, "At least 1 adult");
                None
            }
        };

        let children = match draft.children {
            Some(n) if !is_whole(n) => {
                errors.record(BookingField::Children, "Children must be a whole number");
                None
            }
            Some(n) if n > f64::from(u32::MAX) => {
                errors.record(BookingField::Children, TOO_MANY_GUESTS);
                None
            }
            Some(n) if n >= 0.0 => Some(n as u32),
            Some(_) => {
                errors.record(BookingField::Children, "Children cannot be negative");
                None
            }
            None => {
                errors.record(BookingField::Children, "Children must be a number");
                None
            }
        };

        let mut add_ons: Vec<AddOnKey> = Vec::with_capacity(draft.add_ons.len());
        for key in &draft.add_ons {
            match AddOnKey::parse(key) {
                Some(key) if !add_ons.contains(&key) => add_ons.push(key),
                Some(_) => {}
                None => errors.record(BookingField::AddOns, "Invalid add-ons"),
            }
        }

        match (check_in, check_out, adults, children) {
            (Some(check_in), Some(check_out), Some(adults), Some(children))
                if errors.is_empty() =>
            {
                ValidationResult::Valid(NormalizedBooking {
                    package_id: package_id.to_string(),
                    check_in,
                    check_out,
                    adults,
                    children,
                    nights: PricingService::nights_between(Some(check_in), Some(check_out)),
                    add_ons,
                })
            }
            _ => ValidationResult::Invalid(errors),
        }
    }

    fn check_date(
        errors: &mut FieldErrors,
        field: BookingField,
        raw: Option<&str>,
        missing_message: &str,
    ) -> Option<NaiveDate> {
        match raw.map(str::trim) {
            None | Some("") => {
                errors.record(field, missing_message);
                None
            }
            Some(raw) => {
                let parsed = parse_calendar_date(raw);
                if parsed.is_none() {
                    errors.record(field, "Invalid date");
                }
                parsed
            }
        }
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft {
            package_id: "honeymoon".to_string(),
            check_in: Some("2025-06-10".to_string()),
            check_out: Some("2025-06-15".to_string()),
            adults: Some(2.0),
            children: Some(0.0),
            nights: None,
            add_ons: vec![],
        }
    }

    fn errors_of(result: ValidationResult) -> FieldErrors {
        match result {
            ValidationResult::Invalid(errors) => errors,
            ValidationResult::Valid(booking) => panic!("expected Invalid, got {booking:?}"),
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let result = BookingValidationService::validate(&BookingDraft {
            add_ons: vec!["spaCredit".into(), "sunsetCruise".into(), "spaCredit".into()],
            ..draft()
        });

        match result {
            ValidationResult::Valid(booking) => {
                assert_eq!(booking.package_id, "honeymoon");
                assert_eq!(booking.nights, 5);
                assert_eq!(booking.adults, 2);
                assert_eq!(booking.children, 0);
                assert_eq!(booking.add_ons, vec![AddOnKey::SpaCredit, AddOnKey::SunsetCruise]);
            }
            ValidationResult::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[test]
    fn test_supplied_nights_is_ignored() {
        let result = BookingValidationService::validate(&BookingDraft {
            nights: Some(42.0),
            ..draft()
        });
        match result {
            ValidationResult::Valid(booking) => assert_eq!(booking.nights, 5),
            ValidationResult::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[test]
    fn test_same_day_check_out_is_rejected() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            check_out: Some("2025-06-10".into()),
            ..draft()
        }));
        assert_eq!(
            errors.get(BookingField::CheckOut),
            Some("Check-out must be after check-in")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_check_out_before_check_in_is_rejected() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            check_out: Some("2025-06-09".into()),
            ..draft()
        }));
        assert_eq!(
            errors.get(BookingField::CheckOut),
            Some("Check-out must be after check-in")
        );
    }

    #[test]
    fn test_missing_dates_reported_independently() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            check_in: Some(String::new()),
            check_out: None,
            ..draft()
        }));
        assert_eq!(errors.get(BookingField::CheckIn), Some(MISSING_CHECK_IN));
        assert_eq!(errors.get(BookingField::CheckOut), Some(MISSING_CHECK_OUT));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_unparseable_date_skips_ordering_rule() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            check_in: Some("2025-13-40".into()),
            check_out: Some("2025-06-01".into()),
            ..draft()
        }));
        assert_eq!(errors.get(BookingField::CheckIn), Some("Invalid date"));
        assert!(!errors.contains(BookingField::CheckOut));
    }

    #[test]
    fn test_quote_clamps_where_validator_rejects() {
        let reversed = BookingDraft {
            check_in: Some("2025-06-10".into()),
            check_out: Some("2025-06-05".into()),
            ..draft()
        };

        let nights =
            PricingService::nights_between(reversed.check_in_date(), reversed.check_out_date());
        let result = BookingValidationService::validate(&reversed);

        assert_eq!(nights, 1);
        assert!(!result.is_valid());
        assert!(errors_of(result).contains(BookingField::CheckOut));
    }

    #[test]
    fn test_valid_nights_matches_engine_derivation() {
        for (check_in, check_out) in [
            ("2025-06-10", "2025-06-11"),
            ("2025-02-25", "2025-03-03"),
            ("2024-12-30", "2025-01-14"),
        ] {
            let draft = BookingDraft {
                check_in: Some(check_in.into()),
                check_out: Some(check_out.into()),
                ..draft()
            };
            let engine_nights =
                PricingService::nights_between(draft.check_in_date(), draft.check_out_date());
            match BookingValidationService::validate(&draft) {
                ValidationResult::Valid(booking) => assert_eq!(booking.nights, engine_nights),
                ValidationResult::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
            }
        }
    }

    #[test]
    fn test_package_rules() {
        let empty = errors_of(BookingValidationService::validate(&BookingDraft {
            package_id: "  ".into(),
            ..draft()
        }));
        assert_eq!(empty.get(BookingField::PackageId), Some("Pick a package"));

        let unknown = errors_of(BookingValidationService::validate(&BookingDraft {
            package_id: "safari".into(),
            ..draft()
        }));
        assert_eq!(unknown.get(BookingField::PackageId), Some("Invalid package"));
    }

    #[test]
    fn test_guest_count_rules() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            adults: Some(0.0),
            children: Some(-1.0),
            ..draft()
        }));
        assert_eq!(errors.get(BookingField::Adults), Some("At least 1 adult"));
        assert_eq!(
            errors.get(BookingField::Children),
            Some("Children cannot be negative")
        );

        let fractional = errors_of(BookingValidationService::validate(&BookingDraft {
            adults: Some(1.5),
            children: None,
            ..draft()
        }));
        assert_eq!(
            fractional.get(BookingField::Adults),
            Some("Adults must be a whole number")
        );
        assert!(fractional.contains(BookingField::Children));
    }

    #[test]
    fn test_guest_counts_beyond_range_are_too_many() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            adults: Some(5_000_000_000.0),
            children: Some(5_000_000_000.0),
            ..draft()
        }));
        assert_eq!(errors.get(BookingField::Adults), Some("Too many guests"));
        assert_eq!(errors.get(BookingField::Children), Some("Too many guests"));

        let at_limit = BookingValidationService::validate(&BookingDraft {
            adults: Some(f64::from(u32::MAX)),
            children: Some(f64::from(u32::MAX)),
            ..draft()
        });
        match at_limit {
            ValidationResult::Valid(booking) => {
                assert_eq!(booking.guests(), 2 * u64::from(u32::MAX))
            }
            ValidationResult::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[test]
    fn test_unknown_add_ons_reported_once() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft {
            add_ons: vec!["foo".into(), "waterSports".into(), "bar".into()],
            ..draft()
        }));
        assert_eq!(errors.get(BookingField::AddOns), Some("Invalid add-ons"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_every_rule_reported_together() {
        let errors = errors_of(BookingValidationService::validate(&BookingDraft::default()));
        assert!(errors.contains(BookingField::PackageId));
        assert!(errors.contains(BookingField::CheckIn));
        assert!(errors.contains(BookingField::CheckOut));
        assert!(errors.contains(BookingField::Adults));
        assert!(errors.contains(BookingField::Children));
        assert!(!errors.contains(BookingField::AddOns));
    }
}
