use apigw_core::{Error, HttpSend, ProxySettings, Result, TransportResponse};
use bytes::Bytes;
use std::time::Duration;

/// Blocking transport backed by `reqwest::blocking::Client`.
///
/// Proxy settings and the socket timeout are fixed at construction. The
/// client holds no other state, so one instance is safe to share across
/// threads for concurrent calls.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpSend {
    /// Build the transport from resolved proxy settings and a socket timeout.
    pub fn new(settings: &ProxySettings, timeout: Duration) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().timeout(timeout);

        match settings {
            // no_proxy also turns off reqwest's environment-based proxy
            // detection, so a disabled config can't inherit ambient settings.
            ProxySettings::Disabled => builder = builder.no_proxy(),
            ProxySettings::Enabled {
                endpoint,
                username,
                password,
            } => {
                // The resolver hands us a bare host:port.
                let url = if endpoint.contains("://") {
                    endpoint.clone()
                } else {
                    format!("http://{endpoint}")
                };
                let mut proxy = reqwest::Proxy::all(url)
                    .map_err(|e| Error::invalid_argument("invalid proxy endpoint").with_source(e))?;
                if let (Some(username), Some(password)) = (username, password) {
                    proxy = proxy.basic_auth(username, password);
                }
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport("failed to build http client").with_source(e))?;

        Ok(Self { client })
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<TransportResponse> {
        let req = reqwest::blocking::Request::try_from(req)
            .map_err(|e| Error::invalid_argument("invalid request").with_source(e))?;

        let resp = self
            .client
            .execute(req)
            .map_err(|e| Error::transport(format!("request failed: {e}")).with_source(e))?;

        let status = resp.status();
        // reqwest does not surface the reason phrase from the status line;
        // the canonical reason for the code is the closest equivalent.
        let status_text = status.canonical_reason().map(str::to_string);
        // An explicit Content-Length of zero means the endpoint returned no
        // body. Chunked or unknown-length responses keep their stream.
        let body: Option<Box<dyn std::io::Read + Send>> = match resp.content_length() {
            Some(0) => None,
            _ => Some(Box::new(resp)),
        };

        Ok(TransportResponse {
            status,
            status_text,
            body,
        })
    }
}
