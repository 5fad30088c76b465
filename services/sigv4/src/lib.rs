//! AWS SigV4 request signer.
//!
//! Implements header-based Signature Version 4 signing on top of the
//! [`apigw_core::SignRequest`] boundary. The signer is a pure function of
//! the request, the payload, the credential, and the signing time: given
//! identical inputs it produces byte-identical signatures.

#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;
