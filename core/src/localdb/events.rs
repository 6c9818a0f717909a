// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{EventChanges, EventRecord, NewEvent};

#[derive(Debug, Clone)]
pub struct Events {
    pool: SqlitePool,
}

impl Events {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, event: &NewEvent) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO events (calendar_id, title, description, dtstart, dtend, time_zone, has_alarm)
VALUES (?, ?, ?, ?, ?, ?, ?);
";

        let result = sqlx::query(SQL)
            .bind(event.calendar_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.dtstart)
            .bind(event.dtend)
            .bind(&event.time_zone)
            .bind(event.has_alarm)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: i64) -> Result<Option<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, calendar_id, title, description, dtstart, dtend, time_zone, has_alarm
FROM events
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<EventRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, calendar_id, title, description, dtstart, dtend, time_zone, has_alarm
FROM events
ORDER BY id ASC;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    pub async fn update(&self, id: i64, changes: &EventChanges) -> Result<u64, sqlx::Error> {
        const SQL: &str = "\
UPDATE events SET
    title       = ?,
    description = ?,
    dtstart     = ?,
    dtend       = ?,
    has_alarm   = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.dtstart)
            .bind(changes.dtend)
            .bind(changes.has_alarm)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reminders WHERE event_id = ?;")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM events WHERE id = ?;")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
