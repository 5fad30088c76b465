//! Core components for the signed API Gateway client.
//!
//! This crate provides the foundational types and traits shared by the
//! client and the signing service crates:
//!
//! - **Error**: a unified error type with a distinguishing [`ErrorKind`]
//! - **Boundaries**: [`HttpSend`] for executing prepared requests and
//!   [`SignRequest`] for adding signing metadata
//! - **SigningRequest**: a canonicalizable view of `http::request::Parts`
//! - **Utilities**: [`hash`] for SHA-256/HMAC helpers, [`time`] for the
//!   compact date formats used in signing scopes, and [`utils`] for data
//!   redaction
//!
//! The transport and the signer are deliberately kept behind traits: the
//! orchestrating client only ever sees one blocking `http_send` call and one
//! pure `sign_request` call, so both can be swapped out in tests.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use crate::http::{HttpSend, ProxySettings, TransportResponse};
mod api;
pub use api::SignRequest;
mod request;
pub use request::SigningRequest;
