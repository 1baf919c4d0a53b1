use stripe::{
    CheckoutSessionMode, CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData, CreateCheckoutSessionLineItemsPriceDataProductData,
    Currency, Metadata,
};

use crate::services::payment::interface::{CheckoutLineItem, CheckoutSessionRequest};

impl From<&CheckoutLineItem> for CreateCheckoutSessionLineItems {
    fn from(item: &CheckoutLineItem) -> Self {
        Self {
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(item.unit_amount_cents),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: item.name.clone(),
                    description: item.description.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            quantity: Some(item.quantity),
            ..Default::default()
        }
    }
}

impl<'a> From<&'a CheckoutSessionRequest> for CreateCheckoutSession<'a> {
    fn from(request: &'a CheckoutSessionRequest) -> Self {
        let mut session = CreateCheckoutSession::new();
        session.mode = Some(CheckoutSessionMode::Payment);
        session.success_url = Some(request.success_url.as_str());
        session.cancel_url = Some(request.cancel_url.as_str());
        session.line_items = Some(request.line_items.iter().map(Into::into).collect());
        session.metadata = Some(Metadata::from(request.metadata.clone()));

        session
    }
}
