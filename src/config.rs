use std::env;

use log::{info, warn};
use thiserror::Error;
use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PUBLIC_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub stripe_secret_key: Option<String>,
    /// Origin used for checkout success/cancel redirects.
    pub public_base_url: Option<Url>,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            stripe_secret_key: None,
            public_base_url: None,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value {:?}, using {}", raw, PORT);
                PORT
            }),
            Err(_) => PORT,
        };

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if stripe_secret_key.is_none() {
            warn!("STRIPE_SECRET_KEY not set, checkout will be unavailable");
        }

        let public_base_url = match env::var("PUBLIC_BASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(Url::parse(raw.trim())?),
            _ => None,
        };

        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        info!("Loaded {} configuration", environment);

        Ok(Self {
            host,
            port,
            stripe_secret_key,
            public_base_url,
            environment,
        })
    }

    /// Redirect origin: configured base URL, then the caller's `Origin`
    /// header, then the local front-end.
    pub fn resolve_origin(&self, request_origin: Option<&str>) -> Url {
        if let Some(url) = &self.public_base_url {
            return url.clone();
        }
        request_origin
            .and_then(|origin| Url::parse(origin).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or_else(default_origin)
    }
}

fn default_origin() -> Url {
    Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL")
}
