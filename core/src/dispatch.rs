//! Turns a finished `PathBuilder` plus a verb into one HTTP exchange.
//!
//! # Design
//! A dispatch goes through four steps: assemble the URL, attach headers
//! (reading the bearer token fresh), send through the `Transport`, and
//! map the outcome. Every HTTP status, 4xx and 5xx included, is a normal
//! response. Only failures to get any response at all are errors, and
//! `execute` folds even those into an `HttpResponse` so callers see one shape.
//! `try_execute` keeps them as `TransportError` for callers that need to tell
//! a server's answer apart from a connectivity failure.
//!
//! The URL is `host + "/" + version + path` with no further normalisation:
//! no slash is inserted between version and path and none are trimmed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::builder::PathBuilder;
use crate::credentials::{CredentialProvider, EnvCredentials};
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Executes builder chains against a transport, with a bearer token from a
/// `CredentialProvider`.
#[derive(Clone)]
pub struct Dispatcher<T = UreqTransport> {
    transport: T,
    credentials: Arc<dyn CredentialProvider>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl Dispatcher<UreqTransport> {
    /// `ureq` transport with the token read from `SENDGRID_APIKEY` on every
    /// call.
    pub fn from_env() -> Self {
        Self::new(UreqTransport::new(), EnvCredentials::default())
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, credentials: impl CredentialProvider + 'static) -> Self {
        Self {
            transport,
            credentials: Arc::new(credentials),
        }
    }

    /// Share one provider between several dispatchers.
    pub fn with_shared_credentials(transport: T, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Assemble the request `builder` and `method` describe, without I/O.
    ///
    /// Default headers come first, except `Authorization`, which is always
    /// taken from the credential provider. A `content-type` of
    /// `application/json` is added for bodies unless one is already set.
    pub fn build_request(
        &self,
        method: HttpMethod,
        builder: &PathBuilder,
        body: Option<&str>,
    ) -> HttpRequest {
        let url = build_url(builder);

        let mut headers: Vec<(String, String)> = builder
            .default_headers()
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if body.is_some()
            && !headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        let authorization = match self.credentials.bearer_token() {
            Some(token) => format!("Bearer {token}"),
            None => "Bearer".to_string(),
        };
        headers.push(("authorization".to_string(), authorization));

        HttpRequest {
            method,
            url,
            headers,
            body: body.map(str::to_string),
        }
    }

    /// Perform one exchange, returning transport failures as errors.
    pub fn try_execute(
        &self,
        method: HttpMethod,
        builder: &PathBuilder,
        body: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let request = self.build_request(method, builder, body);
        debug!(method = %request.method, url = %request.url, "sending request");

        match self.transport.send(&request) {
            Ok(response) => {
                debug!(
                    method = %request.method,
                    url = %request.url,
                    status = response.status,
                    "response received"
                );
                Ok(response)
            }
            Err(err) => {
                warn!(
                    method = %request.method,
                    url = %request.url,
                    error = %err,
                    "transport failed"
                );
                Err(err)
            }
        }
    }

    /// Perform one exchange. Never fails: a transport error is returned as
    /// a response with status `NO_RESPONSE_STATUS`, no headers and a
    /// diagnostic body.
    pub fn execute(
        &self,
        method: HttpMethod,
        builder: &PathBuilder,
        body: Option<&str>,
    ) -> HttpResponse {
        self.try_execute(method, builder, body)
            .unwrap_or_else(HttpResponse::from)
    }
}

/// `host/version+path`, concatenated verbatim.
pub fn build_url(builder: &PathBuilder) -> String {
    format!(
        "{}/{}{}",
        builder.host(),
        builder.version().unwrap_or_default(),
        builder.path().unwrap_or_default()
    )
}
