// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar event and reminder management over a pluggable [`CalendarStore`].

mod config;
mod error;
mod finder;
mod lead_time;
mod localdb;
mod manager;
mod record;
mod store;

pub use crate::config::{
    APP_NAME, Config, DB_FILE_NAME, DEFAULT_DURATION_MINUTES, get_config_dir, system_time_zone,
};
pub use crate::error::{CalendarError, CalendarResult};
pub use crate::finder::find_event;
pub use crate::lead_time::{LeadTime, LeadTimeUnit, normalize_to_minutes};
pub use crate::localdb::LocalDb;
pub use crate::manager::{Builder, CalendarProviderManager};
pub use crate::record::{
    ACCESS_LEVEL_OWNER, ACCOUNT_TYPE_LOCAL, CalendarRecord, EventChanges, EventRecord, METHOD_ALERT,
    NO_ID, NewCalendar, NewEvent, NewReminder, ReminderRecord,
};
pub use crate::store::CalendarStore;
