use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::{config::AppConfig, services::payment::interface::CheckoutOperations};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check<P: CheckoutOperations + 'static>(
    config: web::Data<AppConfig>,
    provider: web::Data<P>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let stripe_result = check_stripe(&config, provider.get_ref());
    health
        .services
        .insert("stripe".to_string(), stripe_result.clone());

    // Catalog and quotes still work without Stripe, so this only degrades.
    if stripe_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_stripe<P: CheckoutOperations>(config: &AppConfig, provider: &P) -> ServiceStatus {
    if !provider.is_configured() {
        return ServiceStatus {
            status: "error".to_string(),
            details: Some("STRIPE_SECRET_KEY not configured".to_string()),
        };
    }

    let details = match config.stripe_secret_key.as_deref().and_then(mask_key) {
        Some(masked) => format!("Stripe API key configured ({})", masked),
        None => "Stripe API key configured".to_string(),
    };

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(details),
    }
}

fn mask_key(key: &str) -> Option<String> {
    if key.len() <= 8 {
        return None;
    }
    let head = key.get(..4)?;
    let tail = key.get(key.len() - 4..)?;
    Some(format!("{}***{}", head, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk_test_1234567890").as_deref(), Some("sk_t***7890"));
        assert_eq!(mask_key("sk_short"), None);
    }

    #[test]
    fn test_mask_key_off_char_boundary() {
        assert_eq!(mask_key("séé_test_1234"), None);
        assert_eq!(mask_key("sk_test_12é345"), None);
    }
}
