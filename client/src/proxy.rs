use crate::ProxyConfig;
use apigw_core::ProxySettings;

/// Derive transport-level proxy settings from user configuration.
///
/// The proxy is used iff the config is present and `enabled` is true.
/// Earlier revisions of this client gated the proxy credentials on the
/// inverted flag; that was a defect, not behavior to keep.
pub fn resolve_proxy(proxy: Option<&ProxyConfig>) -> ProxySettings {
    match proxy {
        Some(config) if config.enabled => ProxySettings::Enabled {
            // Plain host:port concatenation; the transport decides how to
            // turn it into a connectable address.
            endpoint: format!("{}:{}", config.host, config.port),
            username: config.username.clone(),
            password: config.password.clone(),
        },
        // Absent or disabled both mean a direct connection with ambient
        // proxy auto-detection suppressed.
        _ => ProxySettings::Disabled,
    }
}
