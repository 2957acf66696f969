//! HTTP request and response types as plain data.
//!
//! # Design
//! `HttpRequest` is what the dispatcher assembles from a `PathBuilder` before
//! any I/O happens, so URL and header assembly can be inspected in tests.
//! `HttpResponse` is the single shape every dispatch resolves to: a real
//! server answer, or a synthesised one when the exchange never reached the
//! server (see `NO_RESPONSE_STATUS`).
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored and
//! moved across threads without lifetime concerns.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, TransportError};

/// Status reported when no response was received from the server.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled HTTP request described as plain data.
///
/// Built by `Dispatcher::build_request` and handed to a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// 4xx and 5xx statuses are ordinary responses here; callers inspect
/// `status` to decide what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when this response was synthesised from a transport failure.
    pub fn is_transport_failure(&self) -> bool {
        self.status == NO_RESPONSE_STATUS
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Normalise a transport failure into a response: no status, no headers and
/// a diagnostic body naming the error category and the raw message.
impl From<TransportError> for HttpResponse {
    fn from(err: TransportError) -> Self {
        HttpResponse {
            status: NO_RESPONSE_STATUS,
            headers: Vec::new(),
            body: format!("{}, raw message: \n\n{err}", err.marker()),
        }
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
