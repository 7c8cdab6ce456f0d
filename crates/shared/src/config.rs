//! Client configuration management.

use serde::Deserialize;

use crate::error::ClientResult;

/// PayPal deployment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox accounts and test money.
    #[default]
    Sandbox,
    /// Production.
    Live,
}

impl Environment {
    /// Returns the REST API base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-m.sandbox.paypal.com",
            Self::Live => "https://api-m.paypal.com",
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Target environment.
    #[serde(default)]
    pub environment: Environment,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Returns the REST API base URL for the configured environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    /// Loads configuration from config files and `PAYPAL__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required settings are missing or malformed.
    pub fn load() -> ClientResult<Self> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYPAL").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::info!(
            environment = ?loaded.environment,
            base_url = loaded.base_url(),
            "loaded PayPal client configuration"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://api-m.sandbox.paypal.com"
        );
        assert_eq!(Environment::Live.base_url(), "https://api-m.paypal.com");
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("PAYPAL__CLIENT_ID", Some("id-123")),
                ("PAYPAL__CLIENT_SECRET", Some("secret")),
                ("PAYPAL__ENVIRONMENT", Some("live")),
                ("PAYPAL__TIMEOUT_SECS", None),
            ],
            || {
                let config = ClientConfig::load().unwrap();
                assert_eq!(config.client_id, "id-123");
                assert_eq!(config.client_secret, "secret");
                assert_eq!(config.environment, Environment::Live);
                assert_eq!(config.timeout_secs, 30);
                assert_eq!(config.base_url(), "https://api-m.paypal.com");
            },
        );
    }

    #[test]
    fn test_load_missing_credentials() {
        temp_env::with_vars(
            [
                ("PAYPAL__CLIENT_ID", None::<&str>),
                ("PAYPAL__CLIENT_SECRET", None),
            ],
            || {
                let err = ClientConfig::load().unwrap_err();
                assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
            },
        );
    }
}
