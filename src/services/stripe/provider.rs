use log::{error, info};

use crate::services::payment::interface::{
    CheckoutError, CheckoutOperations, CheckoutSessionRequest, RedirectUrl,
};

pub struct StripeProvider {
    client: Option<stripe::Client>,
}

impl StripeProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Some(stripe::Client::new(api_key.into())),
        }
    }

    /// A provider without a secret key; every checkout fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn from_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if !key.trim().is_empty() => Self::new(key.trim()),
            _ => Self::unconfigured(),
        }
    }
}

impl CheckoutOperations for StripeProvider {
    fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> Result<RedirectUrl, CheckoutError> {
        let client = self.client.as_ref().ok_or(CheckoutError::NotConfigured)?;
        let params: stripe::CreateCheckoutSession<'_> = (&request).into();

        match stripe::CheckoutSession::create(client, params).await {
            Ok(session) => {
                info!("Created checkout session {}", session.id);
                session
                    .url
                    .map(RedirectUrl)
                    .ok_or(CheckoutError::MissingRedirectUrl)
            }
            Err(e) => {
                error!("Stripe rejected checkout session: {:?}", e);
                Err(CheckoutError::Provider(e.to_string()))
            }
        }
    }
}
