// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Time-series path building and metric-table tests.

mod common;

use chrono::NaiveDate;
use common::{create_test_client, error_body};
use fitbit_client::{FitbitError, Period, TimeSeriesMetric};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test]
async fn test_steps_series_without_period() {
    let (client, transport) = create_test_client();
    transport.respond(
        "/activities/steps/",
        r#"{"activities-steps":[{"dateTime":"2024-01-01","value":"8423"}]}"#,
    );

    let series = client
        .get_time_series("aaa", "ABC123", TimeSeriesMetric::Steps, base_date(), None)
        .await
        .unwrap();

    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/activities/steps/date/2024-01-01.json"
    );
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].date_time, "2024-01-01");
    assert_eq!(series.points[0].value, "8423");
}

#[tokio::test]
async fn test_steps_series_with_period() {
    let (client, transport) = create_test_client();
    transport.respond(
        "/activities/steps/",
        r#"{"activities-steps":[{"dateTime":"2024-01-01","value":"8423"},{"dateTime":"2024-01-02","value":"10211"}]}"#,
    );

    client
        .get_time_series(
            "aaa",
            "ABC123",
            TimeSeriesMetric::Steps,
            base_date(),
            Some(Period::SevenDays),
        )
        .await
        .unwrap();

    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/activities/steps/date/2024-01-01/7d.json"
    );
}

#[tokio::test]
async fn test_unknown_metric_fails_before_any_request() {
    let (client, transport) = create_test_client();

    let err = client
        .get_time_series_by_name("aaa", "ABC123", "pushups", base_date(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, FitbitError::UnknownMetric(name) if name == "pushups"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_series_by_name_matches_enum_path() {
    let (client, transport) = create_test_client();
    transport.respond(
        "/sleep/minutesAsleep/",
        r#"{"sleep-minutesAsleep":[{"dateTime":"2024-01-01","value":"412"}]}"#,
    );

    let series = client
        .get_time_series_by_name(
            "aaa",
            "ABC123",
            "minutesAsleep",
            base_date(),
            Some(Period::OneMonth),
        )
        .await
        .unwrap();

    assert_eq!(series.metric, TimeSeriesMetric::MinutesAsleep);
    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/sleep/minutesAsleep/date/2024-01-01/1m.json"
    );
}

#[tokio::test]
async fn test_weight_convenience_forces_single_day_period() {
    let (client, transport) = create_test_client();
    transport.respond("/body/weight/", r#"{"body-weight":[]}"#);

    client.get_weight("aaa", "ABC123", base_date()).await.unwrap();

    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/body/weight/date/2024-01-01/1d.json"
    );
}

#[tokio::test]
async fn test_activity_summary_path() {
    let (client, transport) = create_test_client();
    transport.respond(
        "/activities/date/",
        r#"{"summary":{"steps":8423},"activities":[]}"#,
    );

    let summary = client
        .get_activity_summary("aaa", "ABC123", base_date())
        .await
        .unwrap();

    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/activities/date/2024-01-01.json"
    );
    assert_eq!(summary["summary"]["steps"], 8423);
}

#[tokio::test]
async fn test_sleep_convenience_path() {
    let (client, transport) = create_test_client();
    transport.respond("/sleep/date/", r#"{"sleep":[]}"#);

    client.get_sleep("aaa", "ABC123", base_date()).await.unwrap();

    let urls = transport.requested_urls();
    assert_eq!(
        urls[0],
        "https://api.fitbit.com/1/user/ABC123/sleep/date/2024-01-01.json"
    );
}

#[tokio::test]
async fn test_series_api_error_propagates() {
    let (client, transport) = create_test_client();
    transport.respond(
        "/activities/steps/",
        &error_body("expired_token", "Access token expired"),
    );

    let err = client
        .get_time_series("aaa", "ABC123", TimeSeriesMetric::Steps, base_date(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, FitbitError::Api { ref error_type, .. } if error_type == "expired_token"));
    assert!(err.is_token_error());
}

#[tokio::test]
async fn test_series_missing_key_is_malformed() {
    let (client, transport) = create_test_client();
    transport.respond("/activities/steps/", r#"{"something-else":[]}"#);

    let err = client
        .get_time_series("aaa", "ABC123", TimeSeriesMetric::Steps, base_date(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, FitbitError::MalformedResponse(_)));
}
