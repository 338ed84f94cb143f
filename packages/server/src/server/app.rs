//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use nws_client::NwsClient;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{
    alerts_form_handler, alerts_submit_handler, glossary_handler, health_handler, home_handler,
    stations_handler,
};
use crate::server::static_files::serve_static;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<NwsClient>,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Router {
    let app_state = AppState {
        client: Arc::new(NwsClient::with_base_url(
            config.weather_api_base_url.clone(),
        )),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(home_handler))
        .route("/alerts", get(alerts_form_handler).post(alerts_submit_handler))
        .route("/glossary", get(glossary_handler))
        .route("/stations", get(stations_handler))
        .route("/health", get(health_handler))
        .route("/static/*path", get(serve_static))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
