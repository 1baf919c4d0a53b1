use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Stripe not configured on server")]
    NotConfigured,

    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("Amount out of range: {0} USD")]
    InvalidAmount(u64),

    #[error("Checkout provider error: {0}")]
    Provider(String),

    #[error("Checkout session has no redirect URL")]
    MissingRedirectUrl,
}

/// Where the customer is sent to complete payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RedirectUrl(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub description: Option<String>,
    pub unit_amount_cents: i64,
    pub quantity: u64,
}

/// Provider-neutral hosted checkout request, amounts in USD cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionRequest {
    pub line_items: Vec<CheckoutLineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: HashMap<String, String>,
}

impl CheckoutSessionRequest {
    pub fn total_cents(&self) -> i64 {
        self.line_items
            .iter()
            .map(|item| item.unit_amount_cents * item.quantity as i64)
            .sum()
    }
}

pub trait CheckoutOperations {
    fn is_configured(&self) -> bool;

    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<RedirectUrl, CheckoutError>;
}
