// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{
    CalendarRecord, CalendarResult, EventChanges, EventRecord, NewCalendar, NewEvent, NewReminder,
    ReminderRecord,
};

/// The system of record for calendars, events and reminders.
///
/// Listing operations return rows in ascending id order.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Lists calendars, restricted to `account_name` when given.
    async fn list_calendars(&self, account_name: Option<&str>)
    -> CalendarResult<Vec<CalendarRecord>>;

    /// Inserts a calendar and returns its id.
    async fn insert_calendar(&self, calendar: &NewCalendar) -> CalendarResult<i64>;

    /// Deletes a calendar together with its events and their reminders.
    /// Returns the number of calendars removed.
    async fn delete_calendar(&self, id: i64) -> CalendarResult<u64>;

    /// Lists every event of every calendar.
    async fn list_events(&self) -> CalendarResult<Vec<EventRecord>>;

    /// Gets an event by id.
    async fn get_event(&self, id: i64) -> CalendarResult<Option<EventRecord>>;

    /// Inserts an event and returns its id.
    async fn insert_event(&self, event: &NewEvent) -> CalendarResult<i64>;

    /// Overwrites the fields of an event. Returns the number of events changed.
    async fn update_event(&self, id: i64, changes: &EventChanges) -> CalendarResult<u64>;

    /// Deletes an event together with its reminders.
    /// Returns the number of events removed.
    async fn delete_event(&self, id: i64) -> CalendarResult<u64>;

    /// Inserts a reminder and returns its id.
    async fn insert_reminder(&self, reminder: &NewReminder) -> CalendarResult<i64>;

    /// Rewrites every reminder of an event. Returns the number of reminders changed.
    async fn update_reminders(&self, event_id: i64, minutes: i64, method: i64)
    -> CalendarResult<u64>;

    /// Lists the reminders of an event.
    async fn list_reminders(&self, event_id: i64) -> CalendarResult<Vec<ReminderRecord>>;

    /// Releases the store.
    async fn close(&self) -> CalendarResult<()>;
}
