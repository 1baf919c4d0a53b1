use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use atoll_booking_api::{config::AppConfig, routes, services::stripe::provider::StripeProvider};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let provider = web::Data::new(StripeProvider::from_key(config.stripe_secret_key.as_deref()));
    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    info!("Attempting to bind to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(provider.clone())
            .configure(routes::configure::<StripeProvider>)
    })
    .bind(bind)?
    .run()
    .await
}
