use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_OPENAPI_OUTPUT: &str = "docs/openapi_lite.json";

/// Identity of the running service, shared by health, info and the docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: "SynaptiCore Lite",
            title: "SynaptiCore Lite API",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub openapi_output: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            openapi_output: PathBuf::from(DEFAULT_OPENAPI_OUTPUT),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = match lookup("APP_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| AppError::configuration(format!("APP_HOST must be an IP address, got {raw:?}")))?,
            None => defaults.host,
        };

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::configuration(format!("APP_PORT must be a valid port, got {raw:?}")))?,
            None => defaults.port,
        };

        let openapi_output = lookup("OPENAPI_OUTPUT_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.openapi_output);

        Ok(Self {
            host,
            port,
            openapi_output,
        })
    }
}

/// Load `.env` from the working directory, falling back to the crate root.
pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.openapi_output, PathBuf::from("docs/openapi_lite.json"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9090"),
            ("OPENAPI_OUTPUT_PATH", "out/schema.json"),
        ]))
        .unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 9090);
        assert_eq!(config.openapi_output, PathBuf::from("out/schema.json"));
    }

    #[test]
    fn invalid_port_is_a_configuration_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn blank_output_path_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAPI_OUTPUT_PATH", "  ")])).unwrap();
        assert_eq!(config.openapi_output, PathBuf::from(DEFAULT_OPENAPI_OUTPUT));
    }

    #[test]
    fn service_version_follows_the_package() {
        assert_eq!(ServiceInfo::default().version, "1.0.0");
    }
}
