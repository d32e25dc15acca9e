//! Axum router configuration with middleware.
//!
//! All gateway routes live under `/api` and share one CORS policy
//! answering browser preflights uniformly. `/health` sits outside the
//! CORS-scoped group. Wrong methods on routed paths get 405 from axum's
//! method routing.

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use lovewall_types::config::AllowedOrigins;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let api_routes = Router::new()
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/summarize", post(handlers::summarize::summarize))
        .route(
            "/testimonials/summarize",
            post(handlers::summarize::summarize_authenticated),
        )
        .route(
            "/testimonials/submit",
            post(handlers::testimonial::submit_public),
        )
        .route(
            "/testimonials",
            post(handlers::testimonial::submit_authenticated),
        )
        .layer(cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS for the browser form: POST + preflight OPTIONS, origin
/// from the configured allow-list or `*`.
fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("apikey"),
            HeaderName::from_static("x-client-info"),
        ]);

    match origins {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(list) => {
            let parsed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            layer.allow_origin(parsed)
        }
    }
}

/// GET /health - liveness check, no auth required.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
