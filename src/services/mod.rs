pub mod booking_validation_service;
pub mod checkout_service;
pub mod payment;
pub mod pricing_service;
pub mod stripe;
