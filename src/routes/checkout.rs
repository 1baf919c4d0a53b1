use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse, ResponseError,
};
use log::{error, warn};
use serde_json::json;

use crate::{
    config::AppConfig,
    models::booking::BookingDraft,
    routes::booking::invalid_booking_response,
    services::{
        booking_validation_service::{BookingValidationService, ValidationResult},
        checkout_service::CheckoutService,
        payment::interface::{CheckoutError, CheckoutOperations},
    },
};

impl ResponseError for CheckoutError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        // Provider details stay in the logs.
        let message = match self {
            CheckoutError::NotConfigured => self.to_string(),
            _ => "Unable to start checkout".to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

pub async fn create_checkout<P: CheckoutOperations + 'static>(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    provider: web::Data<P>,
    input: web::Json<BookingDraft>,
) -> Result<HttpResponse, CheckoutError> {
    let draft = input.into_inner();

    let booking = match BookingValidationService::validate(&draft) {
        ValidationResult::Valid(booking) => booking,
        ValidationResult::Invalid(errors) => {
            warn!("Rejected checkout for {:?}: {}", draft.package_id, errors.summary());
            return Ok(invalid_booking_response(&errors));
        }
    };

    let request_origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    let origin = config.resolve_origin(request_origin);

    match CheckoutService::start_checkout(provider.get_ref(), &booking, &origin).await {
        Ok(url) => Ok(HttpResponse::Ok().json(json!({ "url": url }))),
        Err(e) => {
            error!("[api/checkout] error: {}", e);
            Err(e)
        }
    }
}
