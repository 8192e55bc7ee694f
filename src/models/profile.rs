//! User profile models.

use serde::{Deserialize, Serialize};

/// Wire shape of `GET /1/user/-/profile.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Profile of the authenticated Fitbit user.
///
/// Only commonly present fields are typed; Fitbit returns many more
/// depending on the user's privacy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user id (used in resource paths)
    pub encoded_id: String,
    /// Display name
    pub display_name: String,
    /// Full name (may be withheld)
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// IANA timezone name
    #[serde(default)]
    pub timezone: Option<String>,
    /// Date the account was created (`YYYY-MM-DD`)
    #[serde(default)]
    pub member_since: Option<String>,
}
