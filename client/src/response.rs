use apigw_core::{Error, Result, TransportResponse};
use http::StatusCode;
use log::warn;
use std::io::Read;

/// Classify a transport response and extract the body stream.
///
/// Success is a 2xx or 3xx status. On failure the unread error body is
/// dropped before signaling so the connection is released, and the detail
/// string is logged at warning level for observability.
pub(crate) fn handle_response(resp: TransportResponse) -> Result<Box<dyn Read + Send>> {
    if !is_successful(resp.status) {
        let detail = error_detail(resp.status, resp.status_text.as_deref());

        warn!("Request failed!\nReason: {detail}");

        drop(resp.body);
        return Err(Error::remote_request(detail));
    }

    match resp.body {
        Some(body) => Ok(body),
        None => Err(Error::empty_response_body("Response body is empty!")),
    }
}

fn is_successful(status: StatusCode) -> bool {
    status.is_success() || status.is_redirection()
}

fn error_detail(status: StatusCode, status_text: Option<&str>) -> String {
    let mut detail = format!("Status code: {}", status.as_u16());
    if let Some(text) = status_text {
        detail.push_str(&format!("Status text: {text}"));
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigw_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn response(
        status: u16,
        status_text: Option<&str>,
        body: Option<&'static [u8]>,
    ) -> TransportResponse {
        TransportResponse {
            status: StatusCode::from_u16(status).unwrap(),
            status_text: status_text.map(str::to_string),
            body: body.map(|b| Box::new(b) as Box<dyn Read + Send>),
        }
    }

    #[test]
    fn test_success_returns_body_stream() {
        let resp = response(200, Some("OK"), Some(b"Response Body"));

        let mut stream = handle_response(resp).unwrap();
        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "Response Body");
    }

    #[test_case(200; "ok")]
    #[test_case(204; "no content")]
    #[test_case(301; "redirect")]
    fn test_successful_statuses(status: u16) {
        assert!(is_successful(StatusCode::from_u16(status).unwrap()));
    }

    #[test_case(400; "bad request")]
    #[test_case(403; "forbidden")]
    #[test_case(500; "internal server error")]
    fn test_failure_statuses(status: u16) {
        assert!(!is_successful(StatusCode::from_u16(status).unwrap()));
    }

    #[test]
    fn test_failure_without_status_text() {
        let _ = env_logger::builder().is_test(true).try_init();

        let err = handle_response(response(500, None, None)).map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteRequest);
        assert_eq!(err.to_string(), "Status code: 500");
    }

    #[test]
    fn test_failure_with_status_text() {
        let err = handle_response(response(500, Some("Internal Server Error"), None))
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteRequest);
        assert!(err.to_string().contains("Status code: 500"));
        assert!(err.to_string().contains("Status text: Internal Server Error"));
    }

    #[test]
    fn test_failure_drops_unread_body() {
        // The error body must not leak into the error detail.
        let err = handle_response(response(502, None, Some(b"upstream said no")))
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err.to_string(), "Status code: 502");
    }

    #[test]
    fn test_empty_body_on_success() {
        let err = handle_response(response(200, Some("OK"), None)).map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponseBody);
        assert_eq!(err.to_string(), "Response body is empty!");
    }
}
