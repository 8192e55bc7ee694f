// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitbit API client for token lifecycle, resource reads, and webhook
//! subscriptions.
//!
//! Handles:
//! - Authorization-code and refresh-token exchanges
//! - Profile and daily time-series reads
//! - Subscription create/list/delete with a locally cached view of the
//!   remote subscription state, resynced after every mutating call

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, NaiveDate, Utc};
use futures_util::future::join_all;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::Credentials;
use crate::error::{FitbitError, Result};
use crate::metrics::{Period, TimeSeriesMetric};
use crate::models::{
    CollectionType, ListSubscriptionsResponse, ProfileResponse, SubscriptionRecord, TimeSeries,
    TimeSeriesPoint, TokenResponse, TokenSet,
};
use crate::response::interpret;
use crate::time_utils::format_api_date;
use crate::transport::{HttpTransport, Method, Transport, TransportRequest};

/// Token endpoint (fixed upstream).
const TOKEN_URL: &str = "https://api.fitbit.com/oauth2/token";
/// User-consent page for the authorization-code flow.
const AUTHORIZE_URL: &str = "https://www.fitbit.com/oauth2/authorize";
/// Base for authenticated resource requests.
const API_BASE_URL: &str = "https://api.fitbit.com";

/// Everything behind the single-writer lock.
struct ClientState {
    credentials: Credentials,
    tokens: TokenSet,
    /// Remote subscription state as of the last successful list call.
    /// Left untouched (stale) when a resync fails.
    subscriptions: Vec<SubscriptionRecord>,
}

/// Fitbit API client.
///
/// One instance owns one token set and one subscription cache. Mutating
/// operations serialize on an internal lock, so concurrent refreshes or
/// subscription changes against the same instance cannot interleave.
/// Clones share the same state.
#[derive(Clone)]
pub struct FitbitClient {
    transport: Arc<dyn Transport>,
    state: Arc<Mutex<ClientState>>,
}

impl FitbitClient {
    /// Create a client using the default HTTPS transport.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, Arc::new(HttpTransport::new()))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            state: Arc::new(Mutex::new(ClientState {
                credentials,
                tokens: TokenSet::default(),
                subscriptions: Vec::new(),
            })),
        }
    }

    // ─── Credentials ─────────────────────────────────────────────────────────

    /// Replace the OAuth client id and secret.
    pub async fn update_credentials(
        &self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) {
        let mut state = self.state.lock().await;
        state.credentials.client_id = client_id.into();
        state.credentials.client_secret = client_secret.into();
    }

    /// Replace the registered redirect URI.
    pub async fn set_redirect_uri(&self, redirect_uri: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.credentials.redirect_uri = redirect_uri.into();
    }

    /// Build the user-consent URL for the authorization-code flow.
    ///
    /// `scopes` are space-joined; `state` is passed through to the
    /// redirect for CSRF protection when supplied.
    pub async fn authorize_url(&self, scopes: &[&str], state_param: Option<&str>) -> String {
        let state = self.state.lock().await;
        let mut url = format!(
            "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=code&scope={}",
            state.credentials.client_id,
            urlencoding::encode(&state.credentials.redirect_uri),
            urlencoding::encode(&scopes.join(" ")),
        );
        if let Some(value) = state_param {
            url.push_str("&state=");
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    // ─── Token Management ────────────────────────────────────────────────────

    /// Exchange an authorization code for a token set.
    ///
    /// On success the full token set is stored, overwriting any previous
    /// value; expiry is computed as now + `expires_in`. On an upstream
    /// rejection the stored state is left unchanged.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        let mut state = self.state.lock().await;

        let form = [
            ("code", code),
            ("client_id", state.credentials.client_id.as_str()),
            ("client_secret", state.credentials.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", state.credentials.redirect_uri.as_str()),
        ];
        let request = token_request(&state.credentials, &form);

        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| FitbitError::Transport(e.to_string()))?;
        let token_response = parse_token_response(&raw)?;

        let tokens = store_tokens(&mut state, token_response);
        tracing::info!(user_id = ?tokens.user_id, "Authorization code exchanged, tokens stored");
        Ok(tokens)
    }

    /// Obtain a fresh access token from a refresh token.
    ///
    /// On success the new token set is stored and the subscription cache
    /// is resynced (best-effort). On failure nothing changes.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenSet> {
        let mut state = self.state.lock().await;

        let form = [
            ("refresh_token", refresh_token),
            ("client_id", state.credentials.client_id.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let request = token_request(&state.credentials, &form);

        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| FitbitError::Transport(e.to_string()))?;
        let token_response = parse_token_response(&raw)?;

        let tokens = store_tokens(&mut state, token_response);
        tracing::info!(user_id = ?tokens.user_id, "Access token refreshed");

        // Subscriptions may have changed while the old token was expiring.
        self.resync_subscriptions(&mut state).await;

        Ok(tokens)
    }

    /// Read-only snapshot of the stored token set (possibly all-empty).
    pub async fn current_tokens(&self) -> TokenSet {
        self.state.lock().await.tokens.clone()
    }

    /// Clear the stored token set. No network call.
    pub async fn reset_tokens(&self) {
        let mut state = self.state.lock().await;
        state.tokens = TokenSet::default();
    }

    // ─── Resource Reads ──────────────────────────────────────────────────────

    /// Get the authenticated user's profile.
    pub async fn get_profile(&self, access_token: &str) -> Result<ProfileResponse> {
        let url = format!("{API_BASE_URL}/1/user/-/profile.json");
        let parsed = self.get(&url, access_token).await?;
        serde_json::from_value(parsed).map_err(|e| FitbitError::MalformedResponse(e.to_string()))
    }

    /// Probe whether an access token is still accepted upstream.
    ///
    /// The one place failure is intentionally swallowed: any error
    /// (rejected token, transport outage) reads as "not valid".
    pub async fn validate_token(&self, access_token: &str) -> Option<ProfileResponse> {
        match self.get_profile(access_token).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::debug!(error = %e, "Token validation probe failed");
                None
            }
        }
    }

    /// Fetch a daily time series for one metric.
    ///
    /// The date portion is `YYYY-MM-DD` alone, or `YYYY-MM-DD/{period}`
    /// when a range is requested.
    pub async fn get_time_series(
        &self,
        access_token: &str,
        user_id: &str,
        metric: TimeSeriesMetric,
        base_date: NaiveDate,
        period: Option<Period>,
    ) -> Result<TimeSeries> {
        let date_portion = match period {
            Some(period) => format!("{}/{}", format_api_date(base_date), period),
            None => format_api_date(base_date),
        };
        let url = user_date_url(user_id, metric.resource_path(), &date_portion);
        let parsed = self.get(&url, access_token).await?;

        let key = metric.response_key();
        let points: Vec<TimeSeriesPoint> = match parsed.get(&key) {
            Some(series) => serde_json::from_value(series.clone())
                .map_err(|e| FitbitError::MalformedResponse(e.to_string()))?,
            None => {
                return Err(FitbitError::MalformedResponse(format!(
                    "missing series key {key}"
                )))
            }
        };
        Ok(TimeSeries { metric, points })
    }

    /// Same as [`get_time_series`](Self::get_time_series), taking the
    /// metric as a string identifier. An identifier outside the
    /// supported set fails with `UnknownMetric` before any network
    /// request is made.
    pub async fn get_time_series_by_name(
        &self,
        access_token: &str,
        user_id: &str,
        metric: &str,
        base_date: NaiveDate,
        period: Option<Period>,
    ) -> Result<TimeSeries> {
        let metric: TimeSeriesMetric = metric.parse()?;
        self.get_time_series(access_token, user_id, metric, base_date, period)
            .await
    }

    /// Daily activity summary for a user: the payload a webhook
    /// notification for the `activities` collection points at.
    pub async fn get_activity_summary(
        &self,
        access_token: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Value> {
        let url = user_date_url(user_id, "activities", &format_api_date(date));
        self.get(&url, access_token).await
    }

    /// Sleep log for a user on a given date.
    pub async fn get_sleep(
        &self,
        access_token: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Value> {
        let url = user_date_url(user_id, "sleep", &format_api_date(date));
        self.get(&url, access_token).await
    }

    /// Weight entries for a user on a given date (single-day range).
    pub async fn get_weight(
        &self,
        access_token: &str,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Value> {
        let date_portion = format!("{}/{}", format_api_date(date), Period::OneDay);
        let url = user_date_url(user_id, "body/weight", &date_portion);
        self.get(&url, access_token).await
    }

    // ─── Subscriptions ───────────────────────────────────────────────────────

    /// Subscribe a user to webhook notifications for each collection.
    ///
    /// The per-collection POSTs run concurrently and succeed or fail
    /// independently; the returned map records each collection's outcome.
    /// When no `subscriber_id` is supplied the subscription id is derived
    /// as `{client_id}-{owner_id}-{collection}`. The subscription cache
    /// is resynced afterwards, best-effort.
    pub async fn add_subscriptions(
        &self,
        access_token: &str,
        owner_id: &str,
        subscriber_id: Option<&str>,
        collections: &[CollectionType],
    ) -> BTreeMap<CollectionType, bool> {
        let mut state = self.state.lock().await;

        let client_id = state.credentials.client_id.clone();
        let attempts = collections.iter().map(|&collection| {
            let subscription_id = match subscriber_id {
                Some(id) => id.to_string(),
                None => derived_subscription_id(&client_id, owner_id, collection),
            };
            async move {
                let created = self
                    .create_subscription(access_token, collection, &subscription_id)
                    .await;
                (collection, created)
            }
        });

        let status: BTreeMap<CollectionType, bool> =
            join_all(attempts).await.into_iter().collect();

        self.resync_subscriptions(&mut state).await;
        status
    }

    /// Remove a user's webhook subscription for one collection.
    ///
    /// Returns `Ok(true)` when upstream accepted the delete, `Ok(false)`
    /// when it rejected it, and `Err` when the request never completed.
    /// The subscription cache is resynced afterwards, best-effort.
    pub async fn delete_subscription(
        &self,
        access_token: &str,
        owner_id: &str,
        collection: CollectionType,
        subscription_id: Option<&str>,
    ) -> Result<bool> {
        let mut state = self.state.lock().await;

        let subscription_id = match subscription_id {
            Some(id) => id.to_string(),
            None => derived_subscription_id(&state.credentials.client_id, owner_id, collection),
        };
        let url = subscription_url(collection, &subscription_id);
        let request = TransportRequest {
            method: Method::Delete,
            url,
            headers: vec![bearer_header(access_token)],
            body: None,
        };

        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| FitbitError::Transport(e.to_string()))?;
        let deleted = match interpret(&raw) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(collection = %collection, error = %e, "Subscription delete rejected");
                false
            }
        };

        self.resync_subscriptions(&mut state).await;
        Ok(deleted)
    }

    /// List the user's active subscriptions across all collections.
    ///
    /// Also refreshes the local cache on success. An empty list is
    /// `Ok(vec![])`, distinct from a failed call.
    pub async fn list_subscriptions(
        &self,
        access_token: &str,
    ) -> Result<Vec<SubscriptionRecord>> {
        let subscriptions = self.fetch_subscriptions(access_token).await?;
        let mut state = self.state.lock().await;
        state.subscriptions = subscriptions.clone();
        Ok(subscriptions)
    }

    /// Snapshot of the cached subscription list.
    pub async fn cached_subscriptions(&self) -> Vec<SubscriptionRecord> {
        self.state.lock().await.subscriptions.clone()
    }

    // ─── Internals ───────────────────────────────────────────────────────────

    /// POST one subscription; any failure is that collection's alone.
    async fn create_subscription(
        &self,
        access_token: &str,
        collection: CollectionType,
        subscription_id: &str,
    ) -> bool {
        let request = TransportRequest {
            method: Method::Post,
            url: subscription_url(collection, subscription_id),
            headers: vec![bearer_header(access_token), form_content_type()],
            body: Some(form_encode(&[("id", subscription_id)])),
        };

        let outcome = match self.transport.send(request).await {
            Ok(raw) => interpret(&raw).map(|_| ()),
            Err(e) => Err(FitbitError::Transport(e.to_string())),
        };
        match outcome {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(collection = %collection, error = %e, "Subscription create failed");
                false
            }
        }
    }

    /// Rebuild the subscription cache from the remote list.
    ///
    /// Best-effort: skipped when no token is stored, and a failed list
    /// leaves the previous (stale) cache in place.
    async fn resync_subscriptions(&self, state: &mut ClientState) {
        if state.tokens.access_token.is_empty() {
            return;
        }
        let access_token = state.tokens.access_token.clone();
        match self.fetch_subscriptions(&access_token).await {
            Ok(subscriptions) => {
                tracing::debug!(count = subscriptions.len(), "Subscription cache resynced");
                state.subscriptions = subscriptions;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Subscription resync failed, keeping stale cache");
            }
        }
    }

    /// The raw list call, without touching the cache.
    async fn fetch_subscriptions(&self, access_token: &str) -> Result<Vec<SubscriptionRecord>> {
        let url = format!("{API_BASE_URL}/1/user/-/apiSubscriptions.json");
        let parsed = self.get(&url, access_token).await?;
        let list: ListSubscriptionsResponse = serde_json::from_value(parsed)
            .map_err(|e| FitbitError::MalformedResponse(e.to_string()))?;
        Ok(list.api_subscriptions)
    }

    /// GET an authenticated resource and interpret the body.
    async fn get(&self, url: &str, access_token: &str) -> Result<Value> {
        let request = TransportRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: vec![bearer_header(access_token)],
            body: None,
        };
        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|e| FitbitError::Transport(e.to_string()))?;
        interpret(&raw)
    }
}

// ─── Request Builders ────────────────────────────────────────────────────────

/// Both token exchanges share the same request shape: Basic auth plus a
/// form-encoded body; only the grant payload differs.
fn token_request(credentials: &Credentials, form: &[(&str, &str)]) -> TransportRequest {
    TransportRequest {
        method: Method::Post,
        url: TOKEN_URL.to_string(),
        headers: vec![basic_auth_header(credentials), form_content_type()],
        body: Some(form_encode(form)),
    }
}

fn basic_auth_header(credentials: &Credentials) -> (String, String) {
    let auth = STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ));
    ("Authorization".to_string(), format!("Basic {auth}"))
}

fn bearer_header(access_token: &str) -> (String, String) {
    ("Authorization".to_string(), format!("Bearer {access_token}"))
}

fn form_content_type() -> (String, String) {
    (
        "Content-Type".to_string(),
        "application/x-www-form-urlencoded".to_string(),
    )
}

fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn user_date_url(user_id: &str, path: &str, date_portion: &str) -> String {
    format!("{API_BASE_URL}/1/user/{user_id}/{path}/date/{date_portion}.json")
}

fn subscription_url(collection: CollectionType, subscription_id: &str) -> String {
    format!("{API_BASE_URL}/1/user/-/{collection}/apiSubscriptions/{subscription_id}.json")
}

/// Deterministic subscription id used when the caller supplies none.
fn derived_subscription_id(client_id: &str, owner_id: &str, collection: CollectionType) -> String {
    format!("{client_id}-{owner_id}-{collection}")
}

/// Interpret a token-endpoint body, mapping upstream rejections to the
/// exchange-specific error, and parse the success payload.
fn parse_token_response(raw: &str) -> Result<TokenResponse> {
    let parsed = interpret(raw).map_err(|e| match e {
        FitbitError::Api {
            error_type,
            message,
        } => FitbitError::AuthExchange {
            error_type,
            message,
        },
        other => other,
    })?;
    serde_json::from_value(parsed).map_err(|e| FitbitError::MalformedResponse(e.to_string()))
}

/// Store a successful exchange wholesale. Expiry is absolute from here:
/// the provider reports relative `expires_in` seconds at receipt time.
fn store_tokens(state: &mut ClientState, response: TokenResponse) -> TokenSet {
    let tokens = TokenSet {
        access_token: response.access_token,
        refresh_token: response.refresh_token,
        expires_at: Some(Utc::now() + Duration::seconds(response.expires_in)),
        user_id: response.user_id,
    };
    state.tokens = tokens.clone();
    tokens
}
