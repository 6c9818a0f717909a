// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calprov_core::{
    Builder, CalendarProviderManager, CalendarStore, Config, LeadTime, LocalDb,
};
use jiff::tz::TimeZone;
use tokio::fs;

use crate::util::{parse_datetime, resolve_time_zone};

/// An open database together with the configuration defaults of one invocation.
#[derive(Debug)]
pub struct Session {
    config: Config,
    db: LocalDb,
    tz: TimeZone,
}

impl Session {
    /// Normalizes the configuration and opens the database in its state directory.
    pub async fn open(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        if let Some(dir) = &config.state_dir {
            fs::create_dir_all(dir).await.map_err(|e| {
                format!("Failed to create state directory {}: {e}", dir.display())
            })?;
        }
        let db = LocalDb::open(config.db_path().as_deref()).await?;
        let tz = resolve_time_zone(config.time_zone.as_deref());
        Ok(Self { config, db, tz })
    }

    pub fn tz(&self) -> &TimeZone {
        &self.tz
    }

    /// A builder seeded with the configured defaults.
    pub fn builder(&self) -> Builder {
        Builder::from_config(&self.config)
    }

    /// A builder with the event timing given on the command line applied.
    pub fn event_builder(&self, timing: &EventTiming) -> Result<Builder, Box<dyn Error>> {
        let mut builder = self.builder();
        if let Some(start) = &timing.start {
            builder = builder.alarm_start_time(parse_datetime(&self.tz, start)?);
        }
        if let Some(duration) = timing.duration {
            builder = builder.alarm_duration_time(duration);
        }
        if let Some(lead) = timing.lead {
            builder = builder.alarm_lead_time(lead.magnitude, lead.unit);
        }
        Ok(builder.has_alarm(timing.alarm))
    }

    pub fn manager(&self, builder: Builder) -> CalendarProviderManager<LocalDb> {
        builder.build(self.db.clone())
    }

    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await?;
        Ok(())
    }
}

/// Event timing options shared by the add and update commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTiming {
    pub start: Option<String>,
    pub duration: Option<i32>,
    pub alarm: bool,
    pub lead: Option<LeadTime>,
}
