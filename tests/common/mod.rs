#![allow(dead_code)]

use actix_web::{web, App};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use url::Url;

use atoll_booking_api::{
    config::AppConfig,
    routes,
    services::payment::interface::{
        CheckoutError, CheckoutOperations, CheckoutSessionRequest, RedirectUrl,
    },
};

pub const MOCK_CHECKOUT_URL: &str = "https://checkout.stripe.test/c/pay/cs_test_123";

#[derive(Clone, Copy, PartialEq)]
pub enum MockBehaviour {
    Succeed,
    NoRedirectUrl,
    ProviderError,
}

/// In-memory stand-in for the hosted checkout provider.
pub struct MockCheckoutProvider {
    configured: bool,
    behaviour: MockBehaviour,
    pub requests: Arc<Mutex<Vec<CheckoutSessionRequest>>>,
}

impl MockCheckoutProvider {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self {
            configured: true,
            behaviour,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(MockBehaviour::Succeed)
        }
    }
}

impl CheckoutOperations for MockCheckoutProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<RedirectUrl, CheckoutError> {
        self.requests.lock().unwrap().push(request);
        match self.behaviour {
            MockBehaviour::Succeed => Ok(RedirectUrl(MOCK_CHECKOUT_URL.to_string())),
            MockBehaviour::NoRedirectUrl => Err(CheckoutError::MissingRedirectUrl),
            MockBehaviour::ProviderError => {
                Err(CheckoutError::Provider("card_declined: sk_test_secret".to_string()))
            }
        }
    }
}

pub struct TestApp {
    pub config: AppConfig,
    pub provider: web::Data<MockCheckoutProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_provider(MockCheckoutProvider::new(MockBehaviour::Succeed))
    }

    pub fn with_provider(provider: MockCheckoutProvider) -> Self {
        Self {
            config: AppConfig {
                stripe_secret_key: Some("sk_test_1234567890".to_string()),
                ..AppConfig::default()
            },
            provider: web::Data::new(provider),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.public_base_url = Some(Url::parse(base_url).unwrap());
        self
    }

    pub fn recorded_requests(&self) -> Vec<CheckoutSessionRequest> {
        self.provider.requests.lock().unwrap().clone()
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(self.provider.clone())
            .configure(routes::configure::<MockCheckoutProvider>)
    }
}

/// A draft that passes validation.
pub fn valid_booking() -> Value {
    json!({
        "packageId": "honeymoon",
        "checkIn": "2025-06-10",
        "checkOut": "2025-06-12",
        "adults": 2,
        "children": 0,
        "addOns": ["sunsetCruise", "waterSports"]
    })
}
