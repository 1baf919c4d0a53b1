use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{
    add_on::AddOnKey,
    booking::{BookingDraft, NormalizedBooking},
    pricing::{PricingMode, PricingUnit, Quote},
};

pub struct PricingService;

impl PricingService {
    /// Nights between two calendar dates. Missing dates and non-positive
    /// ranges fall back to a single night so the estimate always renders.
    pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => {
                let days = check_out.signed_duration_since(check_in).num_days();
                days.clamp(1, i64::from(u32::MAX)) as u32
            }
            _ => 1,
        }
    }

    /// Adults as a multiplier: anything missing or below one counts as one.
    pub fn effective_adults(adults: Option<f64>) -> u64 {
        match adults {
            Some(n) if n.is_finite() && n >= 1.0 => n.floor() as u64,
            _ => 1,
        }
    }

    /// Children as a multiplier: anything missing or negative counts as zero.
    pub fn effective_children(children: Option<f64>) -> u64 {
        match children {
            Some(n) if n.is_finite() && n >= 0.0 => n.floor() as u64,
            _ => 0,
        }
    }

    pub fn guest_multiplier(pricing: &PricingMode, adults: Option<f64>, children: Option<f64>) -> u64 {
        match pricing.per {
            PricingUnit::PerRoom => 1,
            PricingUnit::PerPerson => {
                Self::effective_adults(adults).saturating_add(Self::effective_children(children))
            }
        }
    }

    /// Sum of flat add-on prices. Unknown keys are skipped, repeats count once.
    pub fn calculate_add_ons_total<S: AsRef<str>>(selected: &[S]) -> u64 {
        selected
            .iter()
            .filter_map(|key| AddOnKey::parse(key.as_ref()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|key| key.flat_price())
            .sum()
    }

    /// Tax on the subtotal, rounded to the nearest dollar.
    pub fn calculate_tax(subtotal: u64, tax_rate: f64) -> u64 {
        let tax = (subtotal as f64 * tax_rate.max(0.0)).round();
        tax as u64
    }

    pub fn compute_quote<S: AsRef<str>>(
        pricing: &PricingMode,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        adults: Option<f64>,
        children: Option<f64>,
        selected_add_ons: &[S],
    ) -> Quote {
        let nights = u64::from(Self::nights_between(check_in, check_out));
        let guests = Self::guest_multiplier(pricing, adults, children);

        let base_total = pricing
            .nightly_rate
            .saturating_mul(nights)
            .saturating_mul(guests);
        let add_ons_total = Self::calculate_add_ons_total(selected_add_ons);
        let subtotal = base_total.saturating_add(add_ons_total);
        let tax_total = Self::calculate_tax(subtotal, pricing.tax_rate);

        Quote {
            base_total,
            add_ons_total,
            tax_total,
            grand_total: subtotal.saturating_add(tax_total),
        }
    }

    /// Live estimate for a draft that may still be incomplete.
    pub fn quote_draft(pricing: &PricingMode, draft: &BookingDraft) -> Quote {
        Self::compute_quote(
            pricing,
            draft.check_in_date(),
            draft.check_out_date(),
            draft.adults,
            draft.children,
            draft.add_ons.as_slice(),
        )
    }

    pub fn quote_booking(pricing: &PricingMode, booking: &NormalizedBooking) -> Quote {
        let add_ons: Vec<&str> = booking.add_ons.iter().map(AddOnKey::as_str).collect();
        Self::compute_quote(
            pricing,
            Some(booking.check_in),
            Some(booking.check_out),
            Some(f64::from(booking.adults)),
            Some(f64::from(booking.children)),
            add_ons.as_slice(),
        )
    }
}
