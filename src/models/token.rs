//! OAuth token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The most recently obtained token set.
///
/// Either all-empty (no exchange has happened yet) or fully populated
/// from a single successful exchange; fields are never mixed across
/// exchanges. Callers only ever see cloned snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Short-lived bearer credential for resource requests
    pub access_token: String,
    /// Longer-lived credential used to obtain a new access token
    pub refresh_token: String,
    /// When the access token expires
    pub expires_at: Option<DateTime<Utc>>,
    /// Fitbit user id the tokens belong to
    pub user_id: Option<String>,
}

impl TokenSet {
    /// True until the first successful exchange (or after a reset).
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_empty()
    }
}

/// Wire shape of a token-endpoint success response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds, relative to response receipt
    pub expires_in: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_set_empty_by_default() {
        let tokens = TokenSet::default();
        assert!(tokens.is_empty());
        assert!(tokens.expires_at.is_none());
        assert!(tokens.user_id.is_none());
    }

    #[test]
    fn test_token_response_parses_minimal_payload() {
        let raw = r#"{"access_token":"aaa","refresh_token":"rrr","expires_in":28800}"#;
        let parsed: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.access_token, "aaa");
        assert_eq!(parsed.expires_in, 28800);
        assert!(parsed.user_id.is_none());
    }
}
