// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;

/// Identifier returned when an event or calendar is absent, or an insert failed.
pub const NO_ID: i64 = -1;

/// Account type of calendars created by this crate.
pub const ACCOUNT_TYPE_LOCAL: &str = "LOCAL";

/// Access level granting full control over a calendar.
pub const ACCESS_LEVEL_OWNER: i64 = 700;

/// Reminder method that raises an alert on the device.
pub const METHOD_ALERT: i64 = 1;

/// A calendar account as stored by the calendar store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct CalendarRecord {
    pub id: i64,
    pub name: Option<String>,
    pub account_name: Option<String>,
    pub account_type: String,
    pub display_name: Option<String>,
    pub owner_account: Option<String>,
    pub time_zone: String,
    pub visible: bool,
    pub access_level: i64,
    pub sync_events: bool,
}

/// Values for a new calendar account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendar {
    pub name: Option<String>,
    pub account_name: Option<String>,
    pub account_type: String,
    pub display_name: Option<String>,
    pub owner_account: Option<String>,
    pub time_zone: String,
}

/// A calendar event as stored by the calendar store.
///
/// Times are Unix timestamps in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct EventRecord {
    pub id: i64,
    pub calendar_id: i64,
    pub title: String,
    pub description: String,
    pub dtstart: i64,
    pub dtend: i64,
    pub time_zone: String,
    pub has_alarm: bool,
}

impl EventRecord {
    /// The start of the event, if the stored value is a valid timestamp.
    pub fn start(&self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.dtstart).ok()
    }

    /// The end of the event, if the stored value is a valid timestamp.
    pub fn end(&self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.dtend).ok()
    }
}

/// Values for a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub calendar_id: i64,
    pub title: String,
    pub description: String,
    pub dtstart: i64,
    pub dtend: i64,
    pub time_zone: String,
    pub has_alarm: bool,
}

/// Fields written when updating an existing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventChanges {
    pub title: String,
    pub description: String,
    pub dtstart: i64,
    pub dtend: i64,
    pub has_alarm: bool,
}

/// A reminder attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct ReminderRecord {
    pub id: i64,
    pub event_id: i64,
    /// Minutes before the event start at which the reminder fires.
    pub minutes: i64,
    pub method: i64,
}

/// Values for a new reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReminder {
    pub event_id: i64,
    pub minutes: i64,
    pub method: i64,
}
