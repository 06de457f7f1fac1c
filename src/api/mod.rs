//! REST API layer: route handlers, DTOs, router composition and middleware.
//!
//! Resource endpoints are mounted under `/api`; `/health` sits at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::any::Any;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Builds the API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the complete application: routes, docs, middleware and state.
pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    let router = build_router();
    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    // Outermost first: CORS sees every response, panics become 500s
    // before the trace layer records them.
    router
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .map_response(IntoResponse::into_response)
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}

/// CORS policy: only `origin` when configured, otherwise any origin.
#[must_use]
pub fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
