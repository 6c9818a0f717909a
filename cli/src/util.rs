// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Resolves an IANA time zone name, falling back to the system zone.
pub fn resolve_time_zone(name: Option<&str>) -> TimeZone {
    match name {
        Some(name) => TimeZone::get(name).unwrap_or_else(|err| {
            tracing::warn!(name, %err, "unknown time zone, using the system zone");
            TimeZone::system()
        }),
        None => TimeZone::system(),
    }
}

/// Parses `YYYY-MM-DD HH:MM[:SS]` as a wall-clock time in `tz`.
pub fn parse_datetime(tz: &TimeZone, dt: &str) -> Result<Timestamp, Box<dyn Error>> {
    const FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

    let dt = dt.trim();
    for format in FORMATS {
        if let Ok(civil) = DateTime::strptime(format, dt) {
            return Ok(civil.to_zoned(tz.clone())?.timestamp());
        }
    }
    Err(format!("Invalid date format: {dt}. Expected format: YYYY-MM-DD HH:MM[:SS]").into())
}

/// Converts milliseconds since the epoch into a zoned time.
pub fn zoned_from_millis(tz: &TimeZone, ms: i64) -> Option<Zoned> {
    Timestamp::from_millisecond(ms)
        .ok()
        .map(|t| t.to_zoned(tz.clone()))
}

/// Formats the span between two instants, collapsing the date when both share it.
pub fn format_time_range(tz: &TimeZone, start_ms: i64, end_ms: i64) -> String {
    match (zoned_from_millis(tz, start_ms), zoned_from_millis(tz, end_ms)) {
        (Some(start), Some(end)) if start.date() == end.date() => format!(
            "{} {}~{}",
            start.strftime("%Y-%m-%d"),
            start.strftime("%H:%M"),
            end.strftime("%H:%M")
        ),
        (Some(start), Some(end)) => format!(
            "{}~{}",
            start.strftime("%Y-%m-%d %H:%M"),
            end.strftime("%Y-%m-%d %H:%M")
        ),
        (Some(start), None) => start.strftime("%Y-%m-%d %H:%M").to_string(),
        (None, Some(end)) => format!("~{}", end.strftime("%Y-%m-%d %H:%M")),
        (None, None) => String::new(),
    }
}
