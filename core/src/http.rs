use crate::Result;
use bytes::Bytes;
use http::StatusCode;
use std::fmt::Debug;
use std::io::Read;

/// Transport-level proxy settings, resolved from user configuration.
///
/// `Disabled` means a direct connection with ambient proxy auto-detection
/// (environment variables, system settings) fully suppressed. The transport
/// must not silently inherit a proxy the user never configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxySettings {
    /// Connect directly to the target endpoint.
    Disabled,
    /// Connect through the given forward proxy.
    Enabled {
        /// Proxy endpoint as `host:port`.
        endpoint: String,
        /// Username for proxy authentication.
        username: Option<String>,
        /// Password for proxy authentication.
        password: Option<String>,
    },
}

/// Raw response handed back by the transport.
///
/// The body is an open reader backed by the underlying connection. Whoever
/// ends up owning it must read it to the end or drop it; dropping releases
/// the connection.
pub struct TransportResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Status text from the status line, when the transport exposes one.
    pub status_text: Option<String>,
    /// Response body stream. `None` when the endpoint returned no body.
    pub body: Option<Box<dyn Read + Send>>,
}

impl Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// HttpSend is used to execute a fully-prepared request over the network.
///
/// Implementations perform exactly one blocking round trip: no retries, no
/// redirect-following policy of their own beyond what the status code model
/// already covers. Proxy settings and the socket timeout are fixed at
/// construction, not per call.
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send the request and return the raw response.
    ///
    /// A connection or I/O failure maps to [`crate::ErrorKind::Transport`].
    fn http_send(&self, req: http::Request<Bytes>) -> Result<TransportResponse>;
}
