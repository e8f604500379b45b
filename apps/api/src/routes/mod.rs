pub mod health;

use axum::{
    http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::journalists::handlers::handle_find_journalists;
use crate::outreach::handlers::handle_generate_outreach;
use crate::state::AppState;

/// Any origin; preflights answer with the browser client's header set.
/// OPTIONS requests are answered here, before routing or credentials come into play.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_headers([
        AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        CONTENT_TYPE,
    ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/functions/v1/find-journalists",
            post(handle_find_journalists),
        )
        .route(
            "/functions/v1/generate-outreach",
            post(handle_generate_outreach),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
