use serde::{Deserialize, Serialize};

/// Flat tax & fee rate applied to every stay unless the product already includes taxes.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingUnit {
    PerPerson,
    PerRoom,
}

/// How a bookable product is priced. Built once at the catalog boundary.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingMode {
    /// Whole USD per night.
    pub nightly_rate: u64,
    pub per: PricingUnit,
    pub tax_rate: f64,
}

impl PricingMode {
    pub const fn per_person(nightly_rate: u64) -> Self {
        Self {
            nightly_rate,
            per: PricingUnit::PerPerson,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    pub const fn per_room(nightly_rate: u64) -> Self {
        Self {
            nightly_rate,
            per: PricingUnit::PerRoom,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    pub const fn taxes_included(self) -> Self {
        Self {
            tax_rate: 0.0,
            ..self
        }
    }

    /// Tax rate as a whole percentage, for line item labels.
    pub fn tax_percent(&self) -> u64 {
        (self.tax_rate * 100.0).round() as u64
    }
}

/// Computed monetary totals in whole USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base_total: u64,
    pub add_ons_total: u64,
    pub tax_total: u64,
    pub grand_total: u64,
}
