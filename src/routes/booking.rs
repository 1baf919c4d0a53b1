use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::{
    models::booking::{BookingDraft, FieldErrors},
    services::booking_validation_service::{BookingValidationService, ValidationResult},
};

/// 400 body shared by every endpoint that gates on booking validation.
pub fn invalid_booking_response(errors: &FieldErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "valid": false,
        "error": errors.summary(),
        "fieldErrors": errors,
    }))
}

pub async fn validate_booking(input: web::Json<BookingDraft>) -> impl Responder {
    let draft = input.into_inner();

    match BookingValidationService::validate(&draft) {
        ValidationResult::Valid(booking) => HttpResponse::Ok().json(json!({
            "valid": true,
            "booking": booking,
        })),
        ValidationResult::Invalid(errors) => invalid_booking_response(&errors),
    }
}
