use std::net::SocketAddr;
use std::num::{NonZeroU32, NonZeroU64};
use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use nonzero_ext::nonzero;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Form-processing endpoint every accepted lead is forwarded to.
    pub lead_form_endpoint: String,
    pub bind_addr: SocketAddr,
    /// Built SPA (trunk `dist/`) served for every non-API path.
    pub static_dir: PathBuf,
    /// Exact CORS origin. Any origin is allowed when unset.
    pub frontend_origin: Option<HeaderValue>,
    pub lead_rate_per_minute: NonZeroU32,
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let lead_form_endpoint = get("LEAD_FORM_ENDPOINT").ok_or(ConfigError::Missing("LEAD_FORM_ENDPOINT"))?;
        url::Url::parse(&lead_form_endpoint).map_err(|e| invalid("LEAD_FORM_ENDPOINT", &lead_form_endpoint, e))?;

        let bind_addr = get("RELAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| invalid("RELAY_BIND_ADDR", &bind_addr, e))?;

        let static_dir = PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

        let frontend_origin = match get("FRONTEND_URL") {
            Some(origin) => Some(
                HeaderValue::from_str(origin.trim_end_matches('/'))
                    .map_err(|e| invalid("FRONTEND_URL", &origin, e))?,
            ),
            None => None,
        };

        let lead_rate_per_minute = match get("LEAD_RATE_PER_MINUTE") {
            Some(raw) => raw
                .parse::<NonZeroU32>()
                .map_err(|e| invalid("LEAD_RATE_PER_MINUTE", &raw, e))?,
            None => nonzero!(30u32),
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<NonZeroU64>()
                .map_err(|e| invalid("UPSTREAM_TIMEOUT_SECS", &raw, e))?,
            None => nonzero!(15u64),
        };

        Ok(RelayConfig {
            lead_form_endpoint,
            bind_addr,
            static_dir,
            frontend_origin,
            lead_rate_per_minute,
            upstream_timeout: Duration::from_secs(upstream_timeout.get()),
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RelayConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RelayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_endpoint_is_set() {
        let config = config_from(&[("LEAD_FORM_ENDPOINT", "https://script.example/exec")]).unwrap();
        assert_eq!(config.lead_form_endpoint, "https://script.example/exec");
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert!(config.frontend_origin.is_none());
        assert_eq!(config.lead_rate_per_minute.get(), 30);
        assert_eq!(config.upstream_timeout, Duration::from_secs(15));
    }

    #[test]
    fn endpoint_is_required() {
        assert!(matches!(
            config_from(&[]),
            Err(ConfigError::Missing("LEAD_FORM_ENDPOINT"))
        ));
        assert!(matches!(
            config_from(&[("LEAD_FORM_ENDPOINT", "  ")]),
            Err(ConfigError::Missing("LEAD_FORM_ENDPOINT"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("LEAD_FORM_ENDPOINT", "https://script.example/exec"),
            ("RELAY_BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/site"),
            ("FRONTEND_URL", "https://aventeqai.com/"),
            ("LEAD_RATE_PER_MINUTE", "5"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(
            config.frontend_origin,
            Some(HeaderValue::from_static("https://aventeqai.com"))
        );
        assert_eq!(config.lead_rate_per_minute.get(), 5);
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_name_their_key() {
        let err = config_from(&[
            ("LEAD_FORM_ENDPOINT", "https://script.example/exec"),
            ("LEAD_RATE_PER_MINUTE", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LEAD_RATE_PER_MINUTE", .. }));

        let err = config_from(&[("LEAD_FORM_ENDPOINT", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LEAD_FORM_ENDPOINT", .. }));

        let err = config_from(&[
            ("LEAD_FORM_ENDPOINT", "https://script.example/exec"),
            ("RELAY_BIND_ADDR", "localhost"),
        ])
        .unwrap_err();
        assert!(err.to_string().starts_with("RELAY_BIND_ADDR has an invalid value"));
    }

    #[test]
    fn zero_upstream_timeout_is_rejected() {
        let err = config_from(&[
            ("LEAD_FORM_ENDPOINT", "https://script.example/exec"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "UPSTREAM_TIMEOUT_SECS", .. }));
    }
}
