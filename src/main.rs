use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize application");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let assessment_service = web::Data::new(state.assessment_service);
    let analysis_service = web::Data::new(state.analysis_service);
    let drafting_service = web::Data::new(state.drafting_service);
    let translation_service = web::Data::new(state.translation_service);
    let limits = web::Data::new(config.limits.clone());

    tracing::info!("Starting Contract Intel server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(assessment_service.clone())
            .app_data(analysis_service.clone())
            .app_data(drafting_service.clone())
            .app_data(translation_service.clone())
            .app_data(limits.clone())
            .configure(api::analysis::configure)
            .configure(api::drafting::configure)
            .configure(api::translation::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
