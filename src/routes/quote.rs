use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    models::{
        booking::BookingDraft,
        catalog,
        pricing::{PricingMode, Quote},
    },
    services::pricing_service::PricingService,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Quote a resort's own rate instead of the package's.
    #[serde(default)]
    resort_slug: Option<String>,
    #[serde(flatten)]
    draft: BookingDraft,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    package_id: &'static str,
    nights: u32,
    /// True while the dates are missing or not yet a real range.
    estimate: bool,
    #[serde(flatten)]
    quote: Quote,
}

pub async fn get_quote(input: web::Json<QuoteRequest>) -> impl Responder {
    let QuoteRequest { resort_slug, draft } = input.into_inner();

    let (package_id, pricing): (&'static str, PricingMode) = match resort_slug.as_deref() {
        Some(slug) => match catalog::find_resort(slug) {
            Some(resort) => (catalog::package_for_resort(resort).id, resort.pricing()),
            None => {
                return HttpResponse::NotFound()
                    .json(serde_json::json!({ "error": "Resort not found" }))
            }
        },
        None => match catalog::find_package(draft.package_id.trim()) {
            Some(package) => (package.id, package.pricing),
            None => {
                return HttpResponse::NotFound()
                    .json(serde_json::json!({ "error": "Package not found" }))
            }
        },
    };

    let check_in = draft.check_in_date();
    let check_out = draft.check_out_date();
    let estimate = !matches!((check_in, check_out), (Some(i), Some(o)) if o > i);

    HttpResponse::Ok().json(QuoteResponse {
        package_id,
        nights: PricingService::nights_between(check_in, check_out),
        estimate,
        quote: PricingService::quote_draft(&pricing, &draft),
    })
}
