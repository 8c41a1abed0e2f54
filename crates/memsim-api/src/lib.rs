//! memsim-api — HTTP front end for the allocator.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | Liveness banner |
//! | POST | `/submit` | Run one allocation, returns wire groups |

pub mod handlers;
pub mod validate;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use memsim_core::config::ServerConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the API router with CORS, request tracing and panic recovery.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
