//! HTTP adapters - the REST API surface.
//!
//! Each resource has its own directory with dto/handlers/routes, all
//! sharing one `AppState` and the `ApiError` response shape.

pub mod clubs;
pub mod error;
pub mod events;
pub mod memberships;
pub mod middleware;
pub mod payments;
pub mod registrations;
pub mod state;
pub mod summary;
pub mod users;

pub use error::ApiError;
pub use state::AppState;

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(client_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match client_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin = %client_origin, "client origin is not a valid header value, CORS disabled");
            layer
        }
    }
}

/// Build the complete API router.
///
/// Bearer tokens are verified once in middleware; the webhook route sits
/// behind the same stack but carries no token and authenticates by
/// signature instead.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    let cors = cors_layer(&state.client_origin);

    Router::new()
        .nest("/api/users", users::user_routes())
        .nest("/api/clubs", clubs::club_routes())
        .nest("/api/memberships", memberships::membership_routes())
        .nest("/api/events", events::event_routes())
        .nest(
            "/api/event-registrations",
            registrations::registration_routes(),
        )
        .nest("/api/payments", payments::payment_routes())
        .nest("/api/summary", summary::summary_routes())
        .nest("/api/webhooks", payments::webhook_routes())
        .route("/health", get(health))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
