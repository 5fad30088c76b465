use crate::Result;
use std::fmt::Debug;

/// SignRequest is the trait used to sign a prepared request.
///
/// Signing is a pure function of the request, the payload, and the
/// credential: deterministic, no side effects, no network access. The
/// payload is read for hashing only; the caller keeps ownership and
/// attaches it to the request afterwards.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential;

    /// Add signing metadata to the request parts in place.
    fn sign_request(
        &self,
        parts: &mut http::request::Parts,
        payload: &[u8],
        credential: &Self::Credential,
    ) -> Result<()>;
}
