pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod screens;
pub mod services;
pub mod views;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use handlers::{assets, AppState};

/// Routes of the four screens plus health and static assets
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::landing))
        .route("/app", get(handlers::map_browser))
        .route(
            "/orphanages/create",
            get(handlers::create_form).post(handlers::create_submit),
        )
        .route("/orphanages/:id", get(handlers::detail))
        .route("/health", get(handlers::health))
        .route("/static/app.css", get(assets::app_css))
        .route("/static/app.js", get(assets::app_js))
        .route("/static/map-marker.svg", get(assets::map_marker))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
