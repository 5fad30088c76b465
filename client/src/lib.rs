//! Signed HTTP client for AWS API Gateway style endpoints.
//!
//! Given a payload, an HTTP method, and a content type, the client builds a
//! request against its configured endpoint, signs it with SigV4, optionally
//! routes it through a forward proxy, executes it synchronously, and returns
//! the response body stream or a structured error.
//!
//! ## Example
//!
//! ```no_run
//! use apigw_client::{Client, Config, ContentType, HttpMethod};
//! use std::io::Read;
//! use std::time::Duration;
//!
//! # fn main() -> apigw_client::Result<()> {
//! let client = Client::new(Config {
//!     access_key_id: "access_key_id".to_string(),
//!     secret_access_key: "secret_access_key".to_string(),
//!     region: "us-west-2".to_string(),
//!     endpoint: "https://example.execute-api.us-west-2.amazonaws.com/prod".to_string(),
//!     service_name: "execute-api".to_string(),
//!     socket_timeout: Duration::from_millis(3000),
//!     proxy: None,
//! })?;
//!
//! let mut body = client.execute(HttpMethod::Post, r#"{"k":"v"}"#, ContentType::Json)?;
//!
//! let mut content = String::new();
//! body.read_to_string(&mut content).map_err(|e| {
//!     apigw_client::Error::transport("failed to read response body").with_source(e)
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! Every failure surfaces immediately as one [`Error`] with a
//! distinguishing [`ErrorKind`]; nothing is retried or recovered
//! internally. A remote non-success status is additionally logged at
//! warning level before being returned.

#![warn(missing_docs)]

mod client;
pub use client::Client;
mod config;
pub use config::{Config, ProxyConfig};
mod proxy;
pub use proxy::resolve_proxy;
mod request;
pub use request::{ContentType, HttpMethod};
mod response;
mod transport;
pub use transport::ReqwestHttpSend;

pub use apigw_core::{Error, ErrorKind, HttpSend, ProxySettings, Result, TransportResponse};
pub use apigw_sigv4::{Credential, RequestSigner};
