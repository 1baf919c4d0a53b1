use serde::Serialize;

use super::pricing::{PricingMode, PricingUnit};

/// Package used when a resort has no dedicated package mapping.
pub const FALLBACK_PACKAGE_ID: &str = "inclusive";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub pricing: PricingMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resort {
    pub slug: &'static str,
    pub name: &'static str,
    pub price_from: u64,
    pub per: PricingUnit,
    pub includes_taxes: bool,
    /// Package the resort is sold under at checkout.
    pub package_id: &'static str,
}

impl Resort {
    pub fn pricing(&self) -> PricingMode {
        let mode = match self.per {
            PricingUnit::PerPerson => PricingMode::per_person(self.price_from),
            PricingUnit::PerRoom => PricingMode::per_room(self.price_from),
        };
        if self.includes_taxes {
            mode.taxes_included()
        } else {
            mode
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    Percentage,
    UpToPercentage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: u8,
    pub applies_to: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceExample {
    pub currency: &'static str,
    pub per_night_from: u64,
    pub example_stay_nights: u32,
}

/// A resort promotion. Display only; quotes always use package pricing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: &'static str,
    pub slug: &'static str,
    pub resort: &'static str,
    pub title: &'static str,
    pub teaser: &'static str,
    pub discount: Discount,
    pub price_example: PriceExample,
    pub min_stay: u32,
    /// Package the offer's call to action books.
    pub package_id: &'static str,
}

pub static PACKAGES: [TourPackage; 6] = [
    TourPackage {
        id: "honeymoon",
        slug: "honeymoon-escape",
        name: "Honeymoon Escape",
        pricing: PricingMode::per_person(250),
    },
    TourPackage {
        id: "family",
        slug: "family-fun-getaway",
        name: "Family Fun Getaway",
        pricing: PricingMode::per_person(180),
    },
    TourPackage {
        id: "inclusive",
        slug: "all-inclusive-retreat",
        name: "All-Inclusive Retreat",
        pricing: PricingMode::per_person(220),
    },
    TourPackage {
        id: "wellness",
        slug: "wellness-and-spa",
        name: "Wellness & Spa",
        pricing: PricingMode::per_person(170),
    },
    TourPackage {
        id: "adventure",
        slug: "aegean-adventure",
        name: "Surfing & Diving",
        pricing: PricingMode::per_person(210),
    },
    TourPackage {
        id: "luxury",
        slug: "luxury-overwater",
        name: "Luxury Overwater",
        pricing: PricingMode::per_person(420),
    },
];

pub static RESORTS: [Resort; 6] = [
    Resort {
        slug: "lily-beach-resort-spa",
        name: "Lily Beach Resort & Spa",
        price_from: 720,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "luxury",
    },
    Resort {
        slug: "hideaway-beach-resort-spa",
        name: "Hideaway Beach Resort & Spa",
        price_from: 690,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "honeymoon",
    },
    Resort {
        slug: "signature-collection-by-hideaway",
        name: "The Signature Collection by Hideaway",
        price_from: 1100,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "luxury",
    },
    Resort {
        slug: "kandima-maldives",
        name: "Kandima Maldives",
        price_from: 680,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "family",
    },
    Resort {
        slug: "ritz-carlton-maldives-fari-islands",
        name: "The Ritz-Carlton Maldives, Fari Islands",
        price_from: 1550,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "luxury",
    },
    Resort {
        slug: "adaaran-prestige-water-villas",
        name: "Adaaran Prestige Water Villas",
        price_from: 750,
        per: PricingUnit::PerPerson,
        includes_taxes: false,
        package_id: "honeymoon",
    },
];

pub static OFFERS: [Offer; 6] = [
    Offer {
        id: "waldorf-astoria-ithaafushi-30",
        slug: "waldorf-astoria-ithaafushi-30-off",
        resort: "Waldorf Astoria Maldives Ithaafushi",
        title: "30% Off + Daily Breakfast + Return Yacht Transfer Credit",
        teaser: "Save 30% on select villas with breakfast included.",
        discount: Discount {
            kind: DiscountKind::Percentage,
            value: 30,
            applies_to: "select villas",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 1650,
            example_stay_nights: 3,
        },
        min_stay: 3,
        package_id: "luxury",
    },
    Offer {
        id: "hilton-amingiri-25",
        slug: "hilton-maldives-amingiri-25-off",
        resort: "Hilton Maldives Amingiri Resort & Spa",
        title: "25% Off + Half Board + Free Speedboat Transfers",
        teaser: "Save 25% with half board and return speedboat transfers.",
        discount: Discount {
            kind: DiscountKind::Percentage,
            value: 25,
            applies_to: "select villas",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 820,
            example_stay_nights: 4,
        },
        min_stay: 3,
        package_id: "family",
    },
    Offer {
        id: "oblu-ailafushi-20",
        slug: "oblu-xperience-ailafushi-20-off",
        resort: "OBLU XPERIENCE Ailafushi",
        title: "AI Plan: 20% Off + Free Speedboat Transfers",
        teaser: "All-Inclusive (Fushi Plan), 20% off, transfers included.",
        discount: Discount {
            kind: DiscountKind::Percentage,
            value: 20,
            applies_to: "all room types",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 420,
            example_stay_nights: 3,
        },
        min_stay: 2,
        package_id: "inclusive",
    },
    Offer {
        id: "anantara-veli-15",
        slug: "anantara-veli-15-off-water-villas",
        resort: "Anantara Veli Maldives Resort",
        title: "Adults-Only: 15% Off Water Villas + Spa Perks",
        teaser: "Save 15% and enjoy spa savings at this serene adults-only island.",
        discount: Discount {
            kind: DiscountKind::Percentage,
            value: 15,
            applies_to: "water villas",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 750,
            example_stay_nights: 3,
        },
        min_stay: 2,
        package_id: "wellness",
    },
    Offer {
        id: "hard-rock-10",
        slug: "hard-rock-hotel-maldives-free-transfers-10-off",
        resort: "Hard Rock Hotel Maldives",
        title: "Free Speedboat Transfers + 10% Off + Resort Credit",
        teaser: "Live-music vibe with transfers included and nightly credit.",
        discount: Discount {
            kind: DiscountKind::Percentage,
            value: 10,
            applies_to: "most villas",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 520,
            example_stay_nights: 4,
        },
        min_stay: 3,
        package_id: "adventure",
    },
    Offer {
        id: "soneva-jani-20",
        slug: "soneva-jani-up-to-20-off-suites",
        resort: "Soneva Jani",
        title: "Up to 20% Off Soneva Jani Suites + Half Board",
        teaser: "Ultra-luxury with half board and signature experiences.",
        discount: Discount {
            kind: DiscountKind::UpToPercentage,
            value: 20,
            applies_to: "select suites",
        },
        price_example: PriceExample {
            currency: "USD",
            per_night_from: 2900,
            example_stay_nights: 4,
        },
        min_stay: 4,
        package_id: "luxury",
    },
];

pub fn find_package(id: &str) -> Option<&'static TourPackage> {
    PACKAGES.iter().find(|p| p.id == id)
}

pub fn is_known_package(id: &str) -> bool {
    find_package(id).is_some()
}

pub fn find_resort(slug: &str) -> Option<&'static Resort> {
    RESORTS.iter().find(|r| r.slug == slug)
}

pub fn find_offer(slug: &str) -> Option<&'static Offer> {
    OFFERS.iter().find(|o| o.slug == slug)
}

/// Package id a resort books under, falling back when the mapping is stale.
pub fn package_for_resort(resort: &Resort) -> &'static TourPackage {
    find_package(resort.package_id)
        .or_else(|| find_package(FALLBACK_PACKAGE_ID))
        .unwrap_or(&PACKAGES[0])
}
