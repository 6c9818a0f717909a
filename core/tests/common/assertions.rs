// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use calprov_core::{CalendarStore, EventRecord};

/// Asserts that an event carries the expected title and description.
///
/// # Panics
///
/// Panics if either field doesn't match the expected value.
pub fn assert_event_matches(event: &EventRecord, title: &str, description: &str) {
    assert_eq!(event.title, title, "Event title mismatch");
    assert_eq!(event.description, description, "Event description mismatch");
}

/// Asserts the lead times of every reminder of an event, in insertion order.
///
/// # Panics
///
/// Panics if the reminders cannot be listed or their minutes differ.
pub async fn assert_reminder_minutes<S: CalendarStore>(store: &S, event_id: i64, minutes: &[i64]) {
    let actual: Vec<i64> = store
        .list_reminders(event_id)
        .await
        .expect("Failed to list reminders")
        .into_iter()
        .map(|r| r.minutes)
        .collect();
    assert_eq!(actual, minutes, "Reminder minutes mismatch");
}
