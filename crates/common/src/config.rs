use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_DOWNSTREAM_URL: &str = "http://localhost:5235/weatherforecast";
const DEFAULT_SERVER_PORT: u16 = 5000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub downstream_url: String,
    pub environment: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults and come back as errors for the caller to log
    /// once logging is up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                errors.push(ConfigError::InvalidPort {
                    raw,
                    fallback: DEFAULT_SERVER_PORT,
                });
                DEFAULT_SERVER_PORT
            }),
            None => DEFAULT_SERVER_PORT,
        };

        let config = Self {
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "compare-service".to_string()),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            downstream_url: lookup("DOWNSTREAM_URL")
                .unwrap_or_else(|| DEFAULT_DOWNSTREAM_URL.to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        (config, errors)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> (AppConfig, Vec<ConfigError>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let (config, errors) = config_from(&[]);

        assert_eq!(config.service_name, "compare-service");
        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert_eq!(config.downstream_url, DEFAULT_DOWNSTREAM_URL);
        assert_eq!(config.log_level, "info");
        assert!(!config.is_development());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_overrides() {
        let (config, errors) = config_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8089"),
            ("DOWNSTREAM_URL", "http://127.0.0.1:9000/weatherforecast"),
            ("APP_ENV", "Development"),
        ]);

        assert_eq!(config.server_address(), "127.0.0.1:8089");
        assert_eq!(config.downstream_url, "http://127.0.0.1:9000/weatherforecast");
        assert!(config.is_development());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let (config, errors) = config_from(&[("SERVER_PORT", "not-a-port")]);

        assert_eq!(config.server_port, 5000);
        assert_eq!(
            errors,
            vec![ConfigError::InvalidPort {
                raw: "not-a-port".to_string(),
                fallback: 5000,
            }]
        );
        assert_eq!(errors[0].to_string(), "Invalid SERVER_PORT \"not-a-port\", using 5000");
    }
}
