// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use fitbit_client::transport::RecordingTransport;
use fitbit_client::{Credentials, FitbitClient};

/// OAuth client id used across the tests (appears in derived
/// subscription ids).
#[allow(dead_code)]
pub const CLIENT_ID: &str = "22X8MM";

/// Create a client wired to a recording transport.
#[allow(dead_code)]
pub fn create_test_client() -> (FitbitClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let credentials = Credentials::new(CLIENT_ID, "test_secret", "https://example.com/callback");
    let client = FitbitClient::with_transport(credentials, transport.clone());
    (client, transport)
}

/// Canned token-endpoint success body.
#[allow(dead_code)]
pub fn token_success_body(access: &str, refresh: &str, expires_in: i64) -> String {
    format!(
        r#"{{"access_token":"{access}","refresh_token":"{refresh}","expires_in":{expires_in},"scope":"activity sleep","token_type":"Bearer","user_id":"ABC123"}}"#
    )
}

/// Canned upstream `errors` array body.
#[allow(dead_code)]
pub fn error_body(error_type: &str, message: &str) -> String {
    format!(
        r#"{{"errors":[{{"errorType":"{error_type}","message":"{message}"}}],"success":false}}"#
    )
}

/// Canned subscription list containing a single record.
#[allow(dead_code)]
pub fn single_subscription_body(collection: &str, owner_id: &str, subscription_id: &str) -> String {
    format!(
        r#"{{"apiSubscriptions":[{{"collectionType":"{collection}","ownerId":"{owner_id}","ownerType":"user","subscriberId":"default","subscriptionId":"{subscription_id}"}}]}}"#
    )
}

/// Canned empty subscription list.
#[allow(dead_code)]
pub fn empty_subscription_body() -> String {
    r#"{"apiSubscriptions":[]}"#.to_string()
}

/// Canned profile body.
#[allow(dead_code)]
pub fn profile_body(encoded_id: &str, display_name: &str) -> String {
    format!(
        r#"{{"user":{{"encodedId":"{encoded_id}","displayName":"{display_name}","timezone":"America/Los_Angeles"}}}}"#
    )
}
