// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::de;

use crate::CalendarError;

/// Unit of a reminder lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LeadTimeUnit {
    /// Seconds.
    #[cfg_attr(feature = "clap", clap(name = "second", alias = "s"))]
    Second,

    /// Minutes.
    #[cfg_attr(feature = "clap", clap(name = "minute", alias = "m"))]
    Minute,

    /// Hours.
    #[cfg_attr(feature = "clap", clap(name = "hour", alias = "h"))]
    Hour,

    /// Days.
    #[cfg_attr(feature = "clap", clap(name = "day", alias = "d"))]
    Day,
}

impl fmt::Display for LeadTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadTimeUnit::Second => "second",
            LeadTimeUnit::Minute => "minute",
            LeadTimeUnit::Hour => "hour",
            LeadTimeUnit::Day => "day",
        };
        f.write_str(name)
    }
}

/// Converts a lead time into whole minutes before the event start.
///
/// An absent unit yields `0`.
///
/// NOTE: a `Second` magnitude is divided by `1000 * 60`, as if it were given in
/// milliseconds. Reminders configured in seconds therefore collapse to `0`
/// unless the magnitude is at least one minute's worth of milliseconds.
pub fn normalize_to_minutes(magnitude: i32, unit: Option<LeadTimeUnit>) -> i64 {
    let Some(unit) = unit else {
        return 0;
    };

    let magnitude = i64::from(magnitude);
    let minutes = match unit {
        LeadTimeUnit::Second => magnitude / 1000 / 60,
        LeadTimeUnit::Minute => magnitude,
        LeadTimeUnit::Hour => magnitude * 60,
        LeadTimeUnit::Day => magnitude * 24 * 60,
    };
    tracing::debug!(magnitude, %unit, minutes, "reminder fires before the event start");
    minutes
}

/// A lead time: a magnitude in a given unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTime {
    /// The lead time value in `unit`.
    pub magnitude: i32,

    /// The unit of `magnitude`.
    pub unit: LeadTimeUnit,
}

impl LeadTime {
    /// Creates a lead time.
    pub const fn new(magnitude: i32, unit: LeadTimeUnit) -> Self {
        Self { magnitude, unit }
    }

    /// The lead time in whole minutes.
    pub fn minutes(&self) -> i64 {
        normalize_to_minutes(self.magnitude, Some(self.unit))
    }
}

impl fmt::Display for LeadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            LeadTimeUnit::Second => "s",
            LeadTimeUnit::Minute => "m",
            LeadTimeUnit::Hour => "h",
            LeadTimeUnit::Day => "d",
        };
        write!(f, "{}{suffix}", self.magnitude)
    }
}

/// Parse a lead time string in the format "HH:MM" / "1d" / "2h" / "30m" / "90s".
impl FromStr for LeadTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CalendarError::InvalidArgument(format!("Invalid lead time format: {s}"));
        let number = |v: &str| v.trim().parse::<i32>().map_err(|_| invalid());

        // "HH:MM" is always expressed in minutes
        if let Some((h, m)) = s.split_once(':') {
            let (h, m) = (number(h)?, number(m)?);
            if h < 0 || !(0..60).contains(&m) {
                return Err(invalid());
            }
            let minutes = h
                .checked_mul(60)
                .and_then(|h| h.checked_add(m))
                .ok_or_else(invalid)?;
            Ok(LeadTime::new(minutes, LeadTimeUnit::Minute))
        } else if let Some(rest) = s.strip_suffix('d') {
            Ok(LeadTime::new(number(rest)?, LeadTimeUnit::Day))
        } else if let Some(rest) = s.strip_suffix('h') {
            Ok(LeadTime::new(number(rest)?, LeadTimeUnit::Hour))
        } else if let Some(rest) = s.strip_suffix('m') {
            Ok(LeadTime::new(number(rest)?, LeadTimeUnit::Minute))
        } else if let Some(rest) = s.strip_suffix('s') {
            Ok(LeadTime::new(number(rest)?, LeadTimeUnit::Second))
        } else {
            Err(invalid())
        }
    }
}

impl<'de> serde::Deserialize<'de> for LeadTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LeadTimeVisitor;

        impl de::Visitor<'_> for LeadTimeVisitor {
            type Value = LeadTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a lead time string like "HH:MM", "1d", "2h", "30m", or "90s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(|e: CalendarError| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(LeadTimeVisitor)
    }
}
