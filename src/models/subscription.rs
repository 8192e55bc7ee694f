//! Webhook subscription models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resource categories eligible for webhook subscription.
///
/// Ordered so per-collection result maps iterate deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CollectionType {
    Activities,
    Body,
    Foods,
    Sleep,
}

impl CollectionType {
    /// All subscribable collections, in path order.
    pub const ALL: [Self; 4] = [Self::Activities, Self::Body, Self::Foods, Self::Sleep];

    /// URL path segment for this collection.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::Body => "body",
            Self::Foods => "foods",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active webhook subscription as reported by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    /// Collection the subscription covers
    pub collection_type: CollectionType,
    /// Fitbit user whose data is subscribed
    pub owner_id: String,
    /// Owner kind, `user` in practice
    #[serde(default)]
    pub owner_type: Option<String>,
    /// Id the provider routes webhook notifications by
    #[serde(default)]
    pub subscriber_id: Option<String>,
    /// Unique id of this subscription
    pub subscription_id: String,
}

/// Wire shape of `GET /1/user/-/apiSubscriptions.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscriptionsResponse {
    #[serde(default)]
    pub api_subscriptions: Vec<SubscriptionRecord>,
}
