use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// What the server saw, echoed back as the response body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reply with `code` and its lowercase reason phrase, e.g. `404 not found`.
async fn status(Path(code): Path<u16>) -> Result<Response, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    let reason = status
        .canonical_reason()
        .unwrap_or_default()
        .to_lowercase();
    Ok((status, with_request_id(), reason).into_response())
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let echoed = EchoedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        headers,
        body,
    };
    tracing::debug!(method = %echoed.method, path = %echoed.path, "echo");
    (StatusCode::OK, with_request_id(), Json(echoed)).into_response()
}

fn with_request_id() -> [(HeaderName, HeaderValue); 1] {
    let id = Uuid::new_v4().to_string();
    [(
        HeaderName::from_static(REQUEST_ID_HEADER),
        HeaderValue::from_str(&id).unwrap_or_else(|_| HeaderValue::from_static("invalid")),
    )]
}
