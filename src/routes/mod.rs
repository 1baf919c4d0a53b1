use actix_web::web;

use crate::services::payment::interface::CheckoutOperations;

pub mod booking;
pub mod catalog;
pub mod checkout;
pub mod health;
pub mod quote;

/// Registers every route. Expects `AppConfig` and the provider `P` as app data.
pub fn configure<P: CheckoutOperations + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check::<P>))
        .service(
            web::scope("/api")
                .route("/packages", web::get().to(catalog::get_packages))
                .route("/packages/{id}", web::get().to(catalog::get_package))
                .route("/resorts/{slug}", web::get().to(catalog::get_resort))
                .route("/offers", web::get().to(catalog::get_offers))
                .route("/offers/{slug}", web::get().to(catalog::get_offer))
                .route("/add-ons", web::get().to(catalog::get_add_ons))
                .route("/quote", web::post().to(quote::get_quote))
                .route(
                    "/bookings/validate",
                    web::post().to(booking::validate_booking),
                )
                .route("/checkout", web::post().to(checkout::create_checkout::<P>)),
        );
}
