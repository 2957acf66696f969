//! Fluent URL path builder.
//!
//! # Design
//! A `PathBuilder` carries `host`, default headers, an optional version
//! segment and the path accumulated so far. `append` never changes the host,
//! headers or version of the builder it is called on; it returns a new
//! builder with the extended path and clears the source's path, so a builder
//! that has produced a child can't silently dispatch a stale prefix.
//!
//! Appending is pure. The network is only touched by the terminal verbs
//! (`get`, `post`, ...), which consume the builder and hand it to a
//! `Dispatcher`.

use std::collections::BTreeMap;

use crate::dispatch::Dispatcher;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpResponse};
use crate::transport::Transport;

/// One step of a builder chain.
///
/// ```
/// use rest_core::PathBuilder;
///
/// let mut root = PathBuilder::new("https://api.example.com").with_version("v3");
/// let profile = root.append("users").append("42").append("profile");
/// assert_eq!(profile.path(), Some("users/42/profile"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    host: String,
    default_headers: BTreeMap<String, String>,
    version: Option<String>,
    path: Option<String>,
}

impl PathBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Merge `headers` into the default headers. Keys already present keep
    /// their existing value.
    ///
    /// Keys are compared exactly, so `Accept` and `accept` are two entries
    /// and both are sent.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.default_headers
                .entry(name.into())
                .or_insert_with(|| value.into());
        }
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Start the chain from an existing path instead of the root.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Return a builder whose path is this one's plus `segment`.
    ///
    /// An empty `segment` carries the current path forward unchanged. In
    /// both cases this builder's own path is cleared.
    pub fn append(&mut self, segment: &str) -> PathBuilder {
        let path = match (self.path.take(), segment) {
            (path, "") => path,
            (None, segment) => Some(segment.to_string()),
            (Some(path), segment) => Some(format!("{path}/{segment}")),
        };
        PathBuilder {
            host: self.host.clone(),
            default_headers: self.default_headers.clone(),
            version: self.version.clone(),
            path,
        }
    }

    /// Append each of `segments` in order.
    pub fn segments<I, S>(&mut self, segments: I) -> PathBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .fold(self.append(""), |mut builder, segment| {
                builder.append(segment.as_ref())
            })
    }

    pub fn get<T: Transport>(self, dispatcher: &Dispatcher<T>) -> HttpResponse {
        self.send(dispatcher, HttpMethod::Get, None)
    }

    pub fn delete<T: Transport>(self, dispatcher: &Dispatcher<T>) -> HttpResponse {
        self.send(dispatcher, HttpMethod::Delete, None)
    }

    pub fn post<T: Transport>(self, dispatcher: &Dispatcher<T>, body: &str) -> HttpResponse {
        self.send(dispatcher, HttpMethod::Post, Some(body))
    }

    pub fn put<T: Transport>(self, dispatcher: &Dispatcher<T>, body: &str) -> HttpResponse {
        self.send(dispatcher, HttpMethod::Put, Some(body))
    }

    pub fn patch<T: Transport>(self, dispatcher: &Dispatcher<T>, body: &str) -> HttpResponse {
        self.send(dispatcher, HttpMethod::Patch, Some(body))
    }

    /// Dispatch with any verb. Transport failures come back as a response
    /// with status `NO_RESPONSE_STATUS`.
    pub fn send<T: Transport>(
        self,
        dispatcher: &Dispatcher<T>,
        method: HttpMethod,
        body: Option<&str>,
    ) -> HttpResponse {
        dispatcher.execute(method, &self, body)
    }

    /// Like `send`, but keeps transport failures as a typed error.
    pub fn try_send<T: Transport>(
        self,
        dispatcher: &Dispatcher<T>,
        method: HttpMethod,
        body: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        dispatcher.try_execute(method, &self, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuilder {
        PathBuilder::new("https://api.example.com")
            .with_version("v3")
            .with_headers([("accept", "application/json")])
    }

    #[test]
    fn segments_accumulate_in_order() {
        let mut builder = root();
        let child = builder.append("users").append("42").append("profile");
        assert_eq!(child.path(), Some("users/42/profile"));
    }

    #[test]
    fn first_segment_has_no_leading_slash() {
        assert_eq!(root().append("users").path(), Some("users"));
    }

    #[test]
    fn append_clears_source_path_only() {
        let mut source = root().with_path("users");
        let child = source.append("42");

        assert_eq!(child.path(), Some("users/42"));
        assert_eq!(source.path(), None);
        assert_eq!(source.host(), "https://api.example.com");
        assert_eq!(source.version(), Some("v3"));
        assert_eq!(source.default_headers(), child.default_headers());
    }

    #[test]
    fn empty_segment_carries_path_forward() {
        let mut source = root().with_path("users/42");
        let child = source.append("");
        assert_eq!(child.path(), Some("users/42"));
        assert_eq!(source.path(), None);

        assert_eq!(root().append("").path(), None);
    }

    #[test]
    fn segments_matches_repeated_append() {
        let mut a = root();
        let mut b = root();
        assert_eq!(
            a.segments(["users", "42", "profile"]),
            b.append("users").append("42").append("profile")
        );
        assert_eq!(a.path(), None);
    }

    #[test]
    fn segments_with_nothing_is_a_carry_forward() {
        let mut source = root().with_path("users");
        let child = source.segments(Vec::<String>::new());
        assert_eq!(child.path(), Some("users"));
    }

    #[test]
    fn segment_text_is_not_validated() {
        let child = root().append("a b").append("?x=1");
        assert_eq!(child.path(), Some("a b/?x=1"));
    }

    #[test]
    fn header_merge_keeps_existing_values() {
        let builder = PathBuilder::new("http://h")
            .with_headers([("accept", "application/json"), ("x-a", "1")])
            .with_headers([("accept", "text/plain"), ("x-b", "2")]);

        let headers = builder.default_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers["x-a"], "1");
        assert_eq!(headers["x-b"], "2");
    }

    #[test]
    fn header_merge_is_case_sensitive() {
        let builder = PathBuilder::new("http://h")
            .with_headers([("Accept", "text/csv")])
            .with_headers([("accept", "application/json")]);
        assert_eq!(builder.default_headers().len(), 2);
    }

    #[test]
    fn clones_branch_independently() {
        let mut users = root().append("users");
        let mut other = users.clone();
        assert_eq!(users.append("1").path(), Some("users/1"));
        assert_eq!(other.append("2").path(), Some("users/2"));
    }
}
