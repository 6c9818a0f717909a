// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{ACCESS_LEVEL_OWNER, CalendarRecord, NewCalendar};

#[derive(Debug, Clone)]
pub struct Calendars {
    pool: SqlitePool,
}

impl Calendars {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, account_name: Option<&str>) -> Result<Vec<CalendarRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, account_name, account_type, display_name, owner_account, time_zone,
       visible, access_level, sync_events
FROM calendars
";

        match account_name {
            Some(account_name) => {
                let sql = format!("{SQL}WHERE account_name = ? ORDER BY id ASC;");
                sqlx::query_as(&sql)
                    .bind(account_name)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!("{SQL}ORDER BY id ASC;");
                sqlx::query_as(&sql).fetch_all(&self.pool).await
            }
        }
    }

    pub async fn insert(&self, calendar: &NewCalendar) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO calendars (name, account_name, account_type, display_name, owner_account, time_zone,
                       visible, access_level, sync_events)
VALUES (?, ?, ?, ?, ?, ?, 1, ?, 1);
";

        let result = sqlx::query(SQL)
            .bind(&calendar.name)
            .bind(&calendar.account_name)
            .bind(&calendar.account_type)
            .bind(&calendar.display_name)
            .bind(&calendar.owner_account)
            .bind(&calendar.time_zone)
            .bind(ACCESS_LEVEL_OWNER)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM reminders WHERE event_id IN (SELECT id FROM events WHERE calendar_id = ?);",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM events WHERE calendar_id = ?;")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM calendars WHERE id = ?;")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
