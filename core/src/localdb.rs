// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

mod calendars;
mod events;
mod reminders;

#[cfg(test)]
mod tests_utils;

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::localdb::calendars::Calendars;
use crate::localdb::events::Events;
use crate::localdb::reminders::Reminders;
use crate::{
    CalendarError, CalendarRecord, CalendarResult, CalendarStore, EventChanges, EventRecord,
    NewCalendar, NewEvent, NewReminder, ReminderRecord,
};

/// Calendar store backed by a SQLite database.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub(crate) calendars: Calendars,
    pub(crate) events: Events,
    pub(crate) reminders: Reminders,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> CalendarResult<Self> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // the database lives as long as its single connection
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| CalendarError::Store(format!("Failed to connect to SQLite database: {e}")))?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await
            .map_err(|e| CalendarError::Store(format!("Failed to run migrations: {e}")))?;

        tracing::debug!("ensuring tables in the database");
        Ok(LocalDb {
            calendars: Calendars::new(pool.clone()),
            events: Events::new(pool.clone()),
            reminders: Reminders::new(pool.clone()),
            pool,
        })
    }
}

#[async_trait]
impl CalendarStore for LocalDb {
    async fn list_calendars(
        &self,
        account_name: Option<&str>,
    ) -> CalendarResult<Vec<CalendarRecord>> {
        Ok(self.calendars.list(account_name).await?)
    }

    async fn insert_calendar(&self, calendar: &NewCalendar) -> CalendarResult<i64> {
        Ok(self.calendars.insert(calendar).await?)
    }

    async fn delete_calendar(&self, id: i64) -> CalendarResult<u64> {
        Ok(self.calendars.delete(id).await?)
    }

    async fn list_events(&self) -> CalendarResult<Vec<EventRecord>> {
        Ok(self.events.list().await?)
    }

    async fn get_event(&self, id: i64) -> CalendarResult<Option<EventRecord>> {
        Ok(self.events.get(id).await?)
    }

    async fn insert_event(&self, event: &NewEvent) -> CalendarResult<i64> {
        Ok(self.events.insert(event).await?)
    }

    async fn update_event(&self, id: i64, changes: &EventChanges) -> CalendarResult<u64> {
        Ok(self.events.update(id, changes).await?)
    }

    async fn delete_event(&self, id: i64) -> CalendarResult<u64> {
        Ok(self.events.delete(id).await?)
    }

    async fn insert_reminder(&self, reminder: &NewReminder) -> CalendarResult<i64> {
        Ok(self.reminders.insert(reminder).await?)
    }

    async fn update_reminders(
        &self,
        event_id: i64,
        minutes: i64,
        method: i64,
    ) -> CalendarResult<u64> {
        Ok(self.reminders.update_for_event(event_id, minutes, method).await?)
    }

    async fn list_reminders(&self, event_id: i64) -> CalendarResult<Vec<ReminderRecord>> {
        Ok(self.reminders.list(event_id).await?)
    }

    async fn close(&self) -> CalendarResult<()> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}
