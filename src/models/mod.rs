// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Fitbit API.

pub mod profile;
pub mod series;
pub mod subscription;
pub mod token;

pub use profile::{ProfileResponse, UserProfile};
pub use series::{TimeSeries, TimeSeriesPoint};
pub use subscription::{CollectionType, ListSubscriptionsResponse, SubscriptionRecord};
pub use token::{TokenResponse, TokenSet};
