//! Network transports that execute an assembled `HttpRequest`.
//!
//! # Design
//! `Transport` is the only seam between the dispatcher and the network, so
//! tests can substitute an in-memory implementation. `UreqTransport` builds a
//! fresh agent per call: the connection belongs to that call alone and is
//! released when the agent drops, on success and failure alike.

use tracing::trace;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round trip.
///
/// Implementations return `Ok` for every response the server sends,
/// whatever its status, and `Err` only when no response was obtained.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }

    /// Agent for a single call. Status codes are returned as data, not `Err`.
    fn agent() -> ureq::Agent {
        ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = Self::agent();
        let url = request.url.as_str();
        let headers = request.headers.as_slice();

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(agent.put(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(agent.put(url), headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(agent.patch(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => with_headers(agent.patch(url), headers).send_empty(),
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        trace!(status, bytes = body.len(), "response body read");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Apply `headers`. Without a caller-supplied `accept`, an empty one is sent
/// so the agent's `*/*` default is not added.
fn with_headers<B>(
    builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    let builder = if headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("accept"))
    {
        builder
    } else {
        builder.header("accept", "")
    };
    headers
        .iter()
        .fold(builder, |builder, (name, value)| {
            builder.header(name.as_str(), value.as_str())
        })
}
