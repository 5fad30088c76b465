use apigw_core::utils::Redact;
use apigw_core::{Error, Result};
use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// Construction-time configuration for [`crate::Client`].
///
/// All fields are read once at construction and never mutated afterwards.
/// One client built from one config serves unlimited sequential `execute`
/// calls.
#[derive(Clone)]
pub struct Config {
    /// Access key id used as the signing identity.
    pub access_key_id: String,
    /// Secret access key used as the signing identity.
    pub secret_access_key: String,
    /// Region the signing scope is derived from, e.g. `us-west-2`.
    pub region: String,
    /// Target endpoint URI. Fixed per client; requests are not
    /// URI-parameterized.
    pub endpoint: String,
    /// Service signing name, e.g. `execute-api`.
    pub service_name: String,
    /// Socket timeout applied to the whole blocking round trip.
    pub socket_timeout: Duration,
    /// Optional forward proxy configuration. Absent means direct connection.
    pub proxy: Option<ProxyConfig>,
}

impl Config {
    /// Check that every required field is present.
    ///
    /// Runs before any network activity so a misconfigured client fails
    /// fast with [`apigw_core::ErrorKind::InvalidArgument`].
    pub(crate) fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::invalid_argument("access key id must not be empty"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::invalid_argument(
                "secret access key must not be empty",
            ));
        }
        if self.region.is_empty() {
            return Err(Error::invalid_argument("region must not be empty"));
        }
        if self.endpoint.is_empty() {
            return Err(Error::invalid_argument("endpoint must not be empty"));
        }
        if self.service_name.is_empty() {
            return Err(Error::invalid_argument("service name must not be empty"));
        }

        Ok(())
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("service_name", &self.service_name)
            .field("socket_timeout", &self.socket_timeout)
            .field("proxy", &self.proxy)
            .finish()
    }
}

/// Forward proxy configuration.
///
/// The proxy is used exactly when `enabled` is true. A present but disabled
/// config behaves the same as an absent one: direct connection, ambient
/// proxy auto-detection suppressed.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Whether the proxy should be used at all.
    pub enabled: bool,
    /// Proxy host, without scheme.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Username for proxy authentication.
    pub username: Option<String>,
    /// Password for proxy authentication.
    pub password: Option<String>,
}

impl Debug for ProxyConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("enabled", &self.enabled)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &Redact::from(&self.password))
            .finish()
    }
}
