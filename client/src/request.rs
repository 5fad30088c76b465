use apigw_core::Result;
use bytes::Bytes;
use http::{header, Uri};

/// HTTP methods accepted by [`crate::Client::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PATCH.
    Patch,
}

impl HttpMethod {
    /// Map to the wire-level method.
    pub fn as_http(&self) -> http::Method {
        match self {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Patch => http::Method::PATCH,
        }
    }
}

/// Content type tags accepted by [`crate::Client::execute`].
///
/// Each tag maps to the canonical MIME string placed in the `Content-Type`
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/json`
    Json,
    /// `application/xml`
    Xml,
    /// `text/plain`
    Text,
}

impl ContentType {
    /// Canonical MIME string for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Text => "text/plain",
        }
    }
}

/// Assemble the unsigned request for one `execute` call.
///
/// The target URI is the endpoint configured at construction; payload bytes
/// pass through unchanged and unvalidated.
pub(crate) fn build_request(
    endpoint: &Uri,
    method: HttpMethod,
    payload: Bytes,
    content_type: ContentType,
) -> Result<http::Request<Bytes>> {
    let req = http::Request::builder()
        .method(method.as_http())
        .uri(endpoint.clone())
        .header(header::CONTENT_TYPE, content_type.as_str())
        .body(payload)?;

    Ok(req)
}
