// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{NewReminder, ReminderRecord};

#[derive(Debug, Clone)]
pub struct Reminders {
    pool: SqlitePool,
}

impl Reminders {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, reminder: &NewReminder) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO reminders (event_id, minutes, method) VALUES (?, ?, ?);")
            .bind(reminder.event_id)
            .bind(reminder.minutes)
            .bind(reminder.method)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_for_event(
        &self,
        event_id: i64,
        minutes: i64,
        method: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE reminders SET minutes = ?, method = ? WHERE event_id = ?;")
            .bind(minutes)
            .bind(method)
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn list(&self, event_id: i64) -> Result<Vec<ReminderRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, event_id, minutes, method
FROM reminders
WHERE event_id = ?
ORDER BY id ASC;
";

        sqlx::query_as(SQL)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
    }
}
