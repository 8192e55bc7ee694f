//! OAuth application credentials.
//!
//! Credentials are normally constructed from values the caller already
//! holds; `from_env()` is a convenience for tools and examples.

use std::env;

/// OAuth2 application credentials registered with Fitbit.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth client ID (public)
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Redirect URI registered for the application
    pub redirect_uri: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `FITBIT_CLIENT_ID`, `FITBIT_CLIENT_SECRET` and
    /// `FITBIT_REDIRECT_URI`. A `.env` file is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: env::var("FITBIT_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FITBIT_CLIENT_ID"))?,
            client_secret: env::var("FITBIT_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FITBIT_CLIENT_SECRET"))?,
            redirect_uri: env::var("FITBIT_REDIRECT_URI")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FITBIT_REDIRECT_URI"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_from_env() {
        env::set_var("FITBIT_CLIENT_ID", "22ABCD");
        env::set_var("FITBIT_CLIENT_SECRET", "test_secret ");
        env::set_var("FITBIT_REDIRECT_URI", "https://example.com/callback");

        let creds = Credentials::from_env().expect("Credentials should load");

        assert_eq!(creds.client_id, "22ABCD");
        assert_eq!(creds.client_secret, "test_secret");
        assert_eq!(creds.redirect_uri, "https://example.com/callback");
    }
}
