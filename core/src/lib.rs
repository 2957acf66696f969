//! Fluent REST request builder.
//!
//! # Overview
//! A caller starts from a root `PathBuilder` (host, default headers, API
//! version), chains `append` calls to compose the URL path, and ends the
//! chain with a verb such as `get`. The verb hands the builder to a
//! `Dispatcher`, which performs one HTTP round trip and returns an
//! `HttpResponse`.
//!
//! ```no_run
//! use rest_core::{Dispatcher, PathBuilder};
//!
//! let dispatcher = Dispatcher::from_env();
//! let response = PathBuilder::new("https://api.sendgrid.com")
//!     .with_version("v3")
//!     .append("/api_keys")
//!     .get(&dispatcher);
//! println!("{} {}", response.status, response.body);
//! ```
//!
//! # Design
//! - Building a path is pure; only the terminal verb does I/O.
//! - `Dispatcher::execute` always returns an `HttpResponse`. Transport
//!   failures come back with status `NO_RESPONSE_STATUS` and a diagnostic
//!   body; `try_execute` returns them as `TransportError` instead.
//! - The bearer token is injected through a `CredentialProvider` and read on
//!   every dispatch. `EnvCredentials` reads `SENDGRID_APIKEY` by default.
//! - `Transport` isolates the network so tests can run without sockets.

pub mod builder;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod transport;

pub use builder::PathBuilder;
pub use config::ClientConfig;
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use dispatch::Dispatcher;
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, NO_RESPONSE_STATUS};
pub use transport::{Transport, UreqTransport};
