// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitbit Web API client.
//!
//! This crate mediates OAuth2 access to the Fitbit Web API: the
//! authorization-code and refresh-token exchanges, authenticated profile
//! and time-series reads, and webhook subscription management with a
//! locally cached view of the remote subscription state.
//!
//! The network sits behind the [`transport::Transport`] trait. Tokens
//! are held in memory only; callers persist them if durability across
//! restarts is required.

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod response;
pub mod time_utils;
pub mod transport;

pub use client::FitbitClient;
pub use config::Credentials;
pub use error::{FitbitError, Result};
pub use metrics::{Period, TimeSeriesMetric};
pub use models::{
    CollectionType, ProfileResponse, SubscriptionRecord, TimeSeries, TimeSeriesPoint, TokenSet,
    UserProfile,
};
