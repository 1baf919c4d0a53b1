use std::collections::HashMap;

use log::info;
use url::Url;

use crate::{
    models::{
        add_on::AddOnKey,
        booking::NormalizedBooking,
        catalog::{self, TourPackage},
        pricing::Quote,
    },
    services::{
        payment::interface::{
            CheckoutError, CheckoutLineItem, CheckoutOperations, CheckoutSessionRequest,
            RedirectUrl,
        },
        pricing_service::PricingService,
    },
};

pub struct CheckoutService;

impl CheckoutService {
    pub fn to_cents(usd: u64) -> Result<i64, CheckoutError> {
        usd.checked_mul(100)
            .and_then(|cents| i64::try_from(cents).ok())
            .ok_or(CheckoutError::InvalidAmount(usd))
    }

    /// Maps a validated booking onto hosted checkout line items. The tax line
    /// is left out when there is nothing to charge.
    pub fn build_session_request(
        booking: &NormalizedBooking,
        package: &TourPackage,
        quote: &Quote,
        origin: &Url,
    ) -> Result<CheckoutSessionRequest, CheckoutError> {
        let guests = booking.guests();
        let mut line_items = vec![CheckoutLineItem {
            name: format!(
                "{} ({} guest{})",
                package.name,
                guests,
                if guests > 1 { "s" } else { "" }
            ),
            description: Some(format!(
                "{} night(s) • {} → {}",
                booking.nights, booking.check_in, booking.check_out
            )),
            unit_amount_cents: Self::to_cents(quote.base_total)?,
            quantity: 1,
        }];

        for add_on in &booking.add_ons {
            line_items.push(CheckoutLineItem {
                name: add_on.label().to_string(),
                description: None,
                unit_amount_cents: Self::to_cents(add_on.flat_price())?,
                quantity: 1,
            });
        }

        if quote.tax_total > 0 {
            line_items.push(CheckoutLineItem {
                name: format!("Taxes & fees ({}%)", package.pricing.tax_percent()),
                description: None,
                unit_amount_cents: Self::to_cents(quote.tax_total)?,
                quantity: 1,
            });
        }

        let base = origin.as_str().trim_end_matches('/');

        Ok(CheckoutSessionRequest {
            line_items,
            success_url: format!("{base}/checkout/success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url: format!("{base}/checkout/cancel"),
            metadata: Self::metadata(booking),
        })
    }

    fn metadata(booking: &NormalizedBooking) -> HashMap<String, String> {
        let add_ons: Vec<&str> = booking.add_ons.iter().map(AddOnKey::as_str).collect();

        HashMap::from([
            ("packageId".to_string(), booking.package_id.clone()),
            ("checkIn".to_string(), booking.check_in.to_string()),
            ("checkOut".to_string(), booking.check_out.to_string()),
            ("adults".to_string(), booking.adults.to_string()),
            ("children".to_string(), booking.children.to_string()),
            ("nights".to_string(), booking.nights.to_string()),
            ("addOns".to_string(), add_ons.join(",")),
        ])
    }

    /// Prices a validated booking and hands it to the checkout provider.
    pub async fn start_checkout<P: CheckoutOperations>(
        provider: &P,
        booking: &NormalizedBooking,
        origin: &Url,
    ) -> Result<RedirectUrl, CheckoutError> {
        if !provider.is_configured() {
            return Err(CheckoutError::NotConfigured);
        }

        let package = catalog::find_package(&booking.package_id)
            .ok_or_else(|| CheckoutError::UnknownPackage(booking.package_id.clone()))?;
        let quote = PricingService::quote_booking(&package.pricing, booking);
        let request = Self::build_session_request(booking, package, &quote, origin)?;

        info!(
            "Starting checkout for {} ({} nights, {} guests, {} USD)",
            booking.package_id,
            booking.nights,
            booking.guests(),
            quote.grand_total
        );

        provider.create_checkout_session(request).await
    }
}
