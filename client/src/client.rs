use crate::transport::ReqwestHttpSend;
use crate::{proxy, request, response, Config, ContentType, HttpMethod};
use apigw_core::{HttpSend, Result, SignRequest};
use apigw_sigv4::{Credential, RequestSigner};
use bytes::Bytes;
use http::Uri;
use std::io::Read;
use std::sync::Arc;

/// Signed HTTP client for a single configured endpoint.
///
/// One `execute` call runs the full pipeline: build the unsigned request,
/// sign it, send it over the transport, and normalize the response. The
/// client holds no mutable state between calls; concurrent use is safe as
/// long as the underlying transport is.
#[derive(Debug)]
pub struct Client {
    endpoint: Uri,
    credential: Credential,
    signer: RequestSigner,
    http: Arc<dyn HttpSend>,
}

impl Client {
    /// Create a client with the default blocking transport.
    ///
    /// Validates the configuration, resolves proxy settings, and builds the
    /// transport with the configured socket timeout. Fails with
    /// [`apigw_core::ErrorKind::InvalidArgument`] before any network
    /// activity when the configuration is incomplete.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let settings = proxy::resolve_proxy(config.proxy.as_ref());
        let http = ReqwestHttpSend::new(&settings, config.socket_timeout)?;

        Self::with_http_send(config, http)
    }

    /// Create a client with an injected transport.
    ///
    /// Useful for tests and for callers that need transport behavior the
    /// default client does not cover.
    pub fn with_http_send(config: Config, http: impl HttpSend) -> Result<Self> {
        config.validate()?;

        let endpoint: Uri = config.endpoint.parse()?;

        Ok(Self {
            endpoint,
            credential: Credential::new(config.access_key_id, config.secret_access_key),
            signer: RequestSigner::new(&config.service_name, &config.region),
            http: Arc::new(http),
        })
    }

    /// Execute one signed request and return the response body stream.
    ///
    /// Exactly one signed request goes over the wire per call; nothing is
    /// retried. The returned stream is backed by the connection and must be
    /// fully read or dropped by the caller.
    pub fn execute(
        &self,
        method: HttpMethod,
        payload: impl Into<Bytes>,
        content_type: ContentType,
    ) -> Result<Box<dyn Read + Send>> {
        let unsigned = request::build_request(&self.endpoint, method, payload.into(), content_type)?;

        let (mut parts, payload) = unsigned.into_parts();
        self.signer
            .sign_request(&mut parts, &payload, &self.credential)?;

        let resp = self
            .http
            .http_send(http::Request::from_parts(parts, payload))?;

        response::handle_response(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigw_core::{Error, ErrorKind, TransportResponse};
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Canned transport behavior for one test.
    #[derive(Debug, Clone)]
    enum Reply {
        Success(&'static [u8]),
        Status(u16, Option<&'static str>),
        NoBody,
        Io,
    }

    /// Records every request and answers with a canned reply.
    #[derive(Debug)]
    struct MockHttpSend {
        requests: Arc<Mutex<Vec<(http::request::Parts, Bytes)>>>,
        reply: Reply,
    }

    impl MockHttpSend {
        fn new(reply: Reply) -> (Self, Arc<Mutex<Vec<(http::request::Parts, Bytes)>>>) {
            let requests = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    requests: requests.clone(),
                    reply,
                },
                requests,
            )
        }
    }

    impl HttpSend for MockHttpSend {
        fn http_send(&self, req: http::Request<Bytes>) -> Result<TransportResponse> {
            let (parts, body) = req.into_parts();
            self.requests.lock().unwrap().push((parts, body));

            match self.reply {
                Reply::Success(body) => Ok(TransportResponse {
                    status: StatusCode::OK,
                    status_text: Some("OK".to_string()),
                    body: Some(Box::new(body)),
                }),
                Reply::Status(code, text) => Ok(TransportResponse {
                    status: StatusCode::from_u16(code).unwrap(),
                    status_text: text.map(str::to_string),
                    body: None,
                }),
                Reply::NoBody => Ok(TransportResponse {
                    status: StatusCode::OK,
                    status_text: Some("OK".to_string()),
                    body: None,
                }),
                Reply::Io => Err(Error::transport("connection reset")),
            }
        }
    }

    fn test_config() -> Config {
        Config {
            access_key_id: "access_key_id".to_string(),
            secret_access_key: "secret_access_key".to_string(),
            region: "us-west-2".to_string(),
            endpoint: "https://example.execute-api.us-west-2.amazonaws.com/prod".to_string(),
            service_name: "execute-api".to_string(),
            socket_timeout: Duration::from_millis(3000),
            proxy: None,
        }
    }

    fn test_client(reply: Reply) -> (Client, Arc<Mutex<Vec<(http::request::Parts, Bytes)>>>) {
        let _ = env_logger::builder().is_test(true).try_init();

        let (mock, requests) = MockHttpSend::new(reply);
        let client = Client::with_http_send(test_config(), mock).unwrap();
        (client, requests)
    }

    #[test]
    fn test_execute_success_round_trip() {
        let (client, requests) = test_client(Reply::Success(b"Response Body"));

        let mut stream = client
            .execute(HttpMethod::Post, "Test payload", ContentType::Json)
            .unwrap();

        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "Response Body");
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_execute_sends_signed_request_to_endpoint() {
        let (client, requests) = test_client(Reply::Success(b"{}"));

        client
            .execute(HttpMethod::Post, r#"{"k":"v"}"#, ContentType::Json)
            .unwrap();

        let requests = requests.lock().unwrap();
        let (parts, body) = &requests[0];

        assert_eq!(parts.method, http::Method::POST);
        assert_eq!(
            parts.uri.to_string(),
            "https://example.execute-api.us-west-2.amazonaws.com/prod"
        );
        assert_eq!(
            parts.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body.as_ref(), br#"{"k":"v"}"#);

        // Signing metadata must be present on the wire request.
        let authorization = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .expect("request must be signed")
            .to_str()
            .unwrap();
        assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=access_key_id/"));
        assert!(parts.headers.contains_key("x-amz-date"));
        assert!(parts.headers.contains_key("x-amz-content-sha256"));
        assert!(parts.headers.contains_key(http::header::HOST));
    }

    #[test]
    fn test_execute_remote_failure_without_status_text() {
        let (client, _) = test_client(Reply::Status(500, None));

        let err = client
            .execute(HttpMethod::Post, "Test payload", ContentType::Json)
            .map(|_| ())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RemoteRequest);
        assert_eq!(err.to_string(), "Status code: 500");
    }

    #[test]
    fn test_execute_remote_failure_with_status_text() {
        let (client, _) = test_client(Reply::Status(500, Some("Internal Server Error")));

        let err = client
            .execute(HttpMethod::Post, "Test payload", ContentType::Json)
            .map(|_| ())
            .unwrap_err();

        assert!(err.to_string().contains("Status code: 500"));
        assert!(err.to_string().contains("Status text: Internal Server Error"));
    }

    #[test]
    fn test_execute_empty_response_body() {
        let (client, _) = test_client(Reply::NoBody);

        let err = client
            .execute(HttpMethod::Post, "Test payload", ContentType::Json)
            .map(|_| ())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyResponseBody);
        assert_eq!(err.to_string(), "Response body is empty!");
    }

    #[test]
    fn test_execute_transport_failure() {
        let (client, _) = test_client(Reply::Io);

        let err = client
            .execute(HttpMethod::Get, Bytes::new(), ContentType::Json)
            .map(|_| ())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_client_is_reusable_across_calls() {
        let (client, requests) = test_client(Reply::Success(b"ok"));

        for _ in 0..3 {
            client
                .execute(HttpMethod::Get, Bytes::new(), ContentType::Json)
                .unwrap();
        }

        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_config_fails_before_any_request() {
        let (mock, requests) = MockHttpSend::new(Reply::Success(b"ok"));

        let mut config = test_config();
        config.access_key_id.clear();

        let err = Client::with_http_send(config, mock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unparsable_endpoint_is_invalid_argument() {
        let (mock, _) = MockHttpSend::new(Reply::Success(b"ok"));

        let mut config = test_config();
        config.endpoint = "://not-a-uri".to_string();

        let err = Client::with_http_send(config, mock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
