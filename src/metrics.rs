// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-series metric identifiers and their upstream resource paths.
//!
//! The Fitbit daily time-series endpoints are addressed by a resource
//! path like `activities/steps` or `body/weight`. The supported set is
//! closed: a metric either appears in this table or the request is
//! rejected before it reaches the network.

use std::fmt;
use std::str::FromStr;

use crate::error::FitbitError;

/// A daily time-series metric supported by `get_time_series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesMetric {
    // activities
    Steps,
    Distance,
    Calories,
    Floors,
    Elevation,
    MinutesSedentary,
    MinutesLightlyActive,
    MinutesFairlyActive,
    MinutesVeryActive,
    // body
    Weight,
    Bmi,
    Fat,
    // sleep
    MinutesAsleep,
    MinutesAwake,
    SleepEfficiency,
    TimeInBed,
}

impl TimeSeriesMetric {
    /// All supported metrics, in table order.
    pub const ALL: [Self; 16] = [
        Self::Steps,
        Self::Distance,
        Self::Calories,
        Self::Floors,
        Self::Elevation,
        Self::MinutesSedentary,
        Self::MinutesLightlyActive,
        Self::MinutesFairlyActive,
        Self::MinutesVeryActive,
        Self::Weight,
        Self::Bmi,
        Self::Fat,
        Self::MinutesAsleep,
        Self::MinutesAwake,
        Self::SleepEfficiency,
        Self::TimeInBed,
    ];

    /// The caller-facing metric identifier (matches the last path segment).
    pub fn name(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::Floors => "floors",
            Self::Elevation => "elevation",
            Self::MinutesSedentary => "minutesSedentary",
            Self::MinutesLightlyActive => "minutesLightlyActive",
            Self::MinutesFairlyActive => "minutesFairlyActive",
            Self::MinutesVeryActive => "minutesVeryActive",
            Self::Weight => "weight",
            Self::Bmi => "bmi",
            Self::Fat => "fat",
            Self::MinutesAsleep => "minutesAsleep",
            Self::MinutesAwake => "minutesAwake",
            Self::SleepEfficiency => "efficiency",
            Self::TimeInBed => "timeInBed",
        }
    }

    /// Upstream resource path for this metric, e.g. `activities/steps`.
    pub fn resource_path(self) -> &'static str {
        match self {
            Self::Steps => "activities/steps",
            Self::Distance => "activities/distance",
            Self::Calories => "activities/calories",
            Self::Floors => "activities/floors",
            Self::Elevation => "activities/elevation",
            Self::MinutesSedentary => "activities/minutesSedentary",
            Self::MinutesLightlyActive => "activities/minutesLightlyActive",
            Self::MinutesFairlyActive => "activities/minutesFairlyActive",
            Self::MinutesVeryActive => "activities/minutesVeryActive",
            Self::Weight => "body/weight",
            Self::Bmi => "body/bmi",
            Self::Fat => "body/fat",
            Self::MinutesAsleep => "sleep/minutesAsleep",
            Self::MinutesAwake => "sleep/minutesAwake",
            Self::SleepEfficiency => "sleep/efficiency",
            Self::TimeInBed => "sleep/timeInBed",
        }
    }

    /// JSON key the series array is returned under (`/` becomes `-`).
    pub fn response_key(self) -> String {
        self.resource_path().replace('/', "-")
    }
}

impl fmt::Display for TimeSeriesMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeSeriesMetric {
    type Err = FitbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| FitbitError::UnknownMetric(s.to_string()))
    }
}

/// Date-range suffix accepted by the time-series endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneDay,
    SevenDays,
    ThirtyDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    Max,
}

impl Period {
    /// The path segment for this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
