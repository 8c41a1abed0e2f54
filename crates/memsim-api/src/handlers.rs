//! HTTP handlers.
//!
//! Success bodies are the bare wire groups; failures are
//! `{"error": "<message>"}`.

use std::any::Any;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use memsim_alloc::allocate;
use tracing::{error, info, warn};

use crate::validate::parse_submission;

pub const WELCOME: &str = "Welcome to the Process Allocation Testing Server!";

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn error_response(msg: &str, status: StatusCode) -> axum::response::Response {
    (status, Json(ErrorBody { error: msg })).into_response()
}

/// GET /
pub async fn index() -> &'static str {
    WELCOME
}

/// POST /submit
pub async fn submit(body: Bytes) -> impl IntoResponse {
    let submission = match parse_submission(&body) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "rejected allocation request");
            return error_response(&e.to_string(), StatusCode::BAD_REQUEST);
        }
    };

    info!(
        algorithm = %submission.algorithm,
        processes = submission.processes.len(),
        partitions = submission.partitions.len(),
        "allocation request"
    );

    let report = allocate(
        &submission.processes,
        &submission.partitions,
        submission.algorithm,
    );
    (StatusCode::OK, Json(report.to_groups())).into_response()
}

/// Turn a handler panic into a 500 with the panic message.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "internal server error"
    };
    error!(error = msg, "request handler panicked");

    let body = serde_json::to_vec(&ErrorBody { error: msg }).unwrap_or_default();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
