use crate::constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE};
use crate::Credential;
use apigw_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use apigw_core::time::{format_date, format_iso8601, now, DateTime};
use apigw_core::{Error, Result, SignRequest, SigningRequest};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// RequestSigner that implements AWS SigV4 header-based signing.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The payload hash is always signed: the hex SHA-256 of the body goes into
/// both the `x-amz-content-sha256` header and the canonical request.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new SigV4 signer for the given service signing name and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        parts: &mut Parts,
        payload: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        let now = self.time.unwrap_or_else(now);
        let mut signed_req = SigningRequest::build(parts)?;
        let payload_hash = hex_sha256(payload);

        // canonicalize context
        canonicalize_header(&mut signed_req, &payload_hash, now)?;
        canonicalize_query(&mut signed_req);

        // build canonical request and string to sign.
        let creq = canonical_request_string(&signed_req, &payload_hash)?;
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{}\n{}\n{}",
            format_iso8601(now),
            scope,
            encoded_req
        );
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &credential.secret_access_key,
            now,
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            credential.access_key_id,
            scope,
            signed_req.header_name_to_vec_sorted().join(";"),
            signature
        ))?;
        authorization.set_sensitive(true);

        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(parts)
    }
}

fn canonical_request_string(ctx: &SigningRequest, payload_hash: &str) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    f.push_str(ctx.method.as_str());
    f.push('\n');
    // Insert encoded path
    let path = percent_decode_str(&ctx.path)
        .decode_utf8()
        .map_err(|e| Error::invalid_argument(format!("failed to decode path: {e}")))?;
    f.push_str(&utf8_percent_encode(&path, &AWS_URI_ENCODE_SET).to_string());
    f.push('\n');
    // Insert query
    f.push_str(
        &ctx.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&"),
    );
    f.push('\n');
    // Insert signed headers
    let signed_headers = ctx.header_name_to_vec_sorted();
    for name in signed_headers.iter() {
        let value = match ctx.headers.get(*name) {
            Some(v) => v.to_str()?,
            None => "",
        };
        f.push_str(name);
        f.push(':');
        f.push_str(value);
        f.push('\n');
    }
    f.push('\n');
    f.push_str(&signed_headers.join(";"));
    f.push('\n');
    f.push_str(payload_hash);

    Ok(f)
}

fn canonicalize_header(
    ctx: &mut SigningRequest,
    payload_hash: &str,
    now: DateTime,
) -> Result<()> {
    // Header names and values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if ctx.headers.get(header::HOST).is_none() {
        ctx.headers
            .insert(header::HOST, ctx.authority.as_str().parse()?);
    }

    // Insert DATE header if not present.
    if ctx.headers.get(X_AMZ_DATE).is_none() {
        let date_header = HeaderValue::try_from(format_iso8601(now))?;
        ctx.headers.insert(X_AMZ_DATE, date_header);
    }

    // Insert X_AMZ_CONTENT_SHA_256 header if not present.
    if ctx.headers.get(X_AMZ_CONTENT_SHA_256).is_none() {
        ctx.headers
            .insert(X_AMZ_CONTENT_SHA_256, HeaderValue::from_str(payload_hash)?);
    }

    Ok(())
}

fn canonicalize_query(ctx: &mut SigningRequest) {
    // Nothing to canonicalize for requests without query.
    if ctx.query.is_empty() {
        return;
    }

    // Sort by param name
    ctx.query.sort();

    ctx.query = ctx
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes())
}
