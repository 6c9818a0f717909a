// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use calprov_core::{Builder, Config};
use jiff::Timestamp;

/// 2019-12-07T06:00:00Z in milliseconds.
pub const START_MS: i64 = 1_575_698_400_000;

/// The fixed event start used across tests.
#[must_use]
pub fn test_start() -> Timestamp {
    Timestamp::from_millisecond(START_MS).expect("valid timestamp")
}

/// Creates a test configuration rooted at `state_dir`.
///
/// # Example
///
/// ```ignore
/// let config = test_config(&temp_dirs.state_dir, Some("work"));
/// ```
#[must_use]
pub fn test_config(state_dir: &Path, calendar_name: Option<&str>) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        calendar_name: calendar_name.map(str::to_string),
        time_zone: Some("UTC".to_string()),
        ..Default::default()
    }
}

/// Creates a builder for an event with a fixed start in UTC.
#[must_use]
pub fn test_builder(title: &str, description: &str) -> Builder {
    Builder::new()
        .alarm_start_time(test_start())
        .time_zone("UTC")
        .event(title, description)
}
