// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;

use crate::config::{DEFAULT_DURATION_MINUTES, system_time_zone};
use crate::{
    ACCOUNT_TYPE_LOCAL, CalendarError, CalendarRecord, CalendarResult, CalendarStore, Config,
    EventChanges, EventRecord, LeadTimeUnit, METHOD_ALERT, NO_ID, NewCalendar, NewEvent,
    NewReminder, ReminderRecord, find_event, normalize_to_minutes,
};

/// Builder of a [`CalendarProviderManager`].
///
/// ```ignore
/// let event_id = Builder::new()
///     .event("Standup", "Daily sync")
///     .has_alarm(true)
///     .alarm_lead_time(30, LeadTimeUnit::Minute)
///     .build(store)
///     .add_calendar_event()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    has_alarm: bool,
    alarm_start_time: Option<Timestamp>,
    alarm_duration_time: i32,
    alarm_lead_time: i32,
    alarm_lead_unit: Option<LeadTimeUnit>,
    calendar_name: Option<String>,
    event_title: Option<String>,
    event_description: Option<String>,
    time_zone: Option<String>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a builder with a ten minute event, no alarm and no event set.
    pub fn new() -> Self {
        Self {
            has_alarm: false,
            alarm_start_time: None,
            alarm_duration_time: DEFAULT_DURATION_MINUTES,
            alarm_lead_time: 0,
            alarm_lead_unit: None,
            calendar_name: None,
            event_title: None,
            event_description: None,
            time_zone: None,
        }
    }

    /// Creates a builder seeded from the configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new()
            .calendar_name(config.calendar_name.clone())
            .alarm_duration_time(config.default_duration);
        if let Some(lead) = config.default_lead_time {
            builder = builder.alarm_lead_time(lead.magnitude, lead.unit);
        }
        if let Some(tz) = &config.time_zone {
            builder = builder.time_zone(tz.clone());
        }
        builder
    }

    /// Whether a reminder is attached to the event.
    pub fn has_alarm(mut self, has_alarm: bool) -> Self {
        self.has_alarm = has_alarm;
        self
    }

    /// Start of the event. Defaults to the time the manager is built.
    pub fn alarm_start_time(mut self, start: Timestamp) -> Self {
        self.alarm_start_time = Some(start);
        self
    }

    /// Duration of the event in minutes.
    pub fn alarm_duration_time(mut self, minutes: i32) -> Self {
        self.alarm_duration_time = minutes;
        self
    }

    /// How long before the event start the reminder fires.
    pub fn alarm_lead_time(mut self, magnitude: i32, unit: LeadTimeUnit) -> Self {
        self.alarm_lead_time = magnitude;
        self.alarm_lead_unit = Some(unit);
        self
    }

    /// Name of the calendar to use, created on demand.
    /// `None` or an empty name selects the first existing calendar.
    pub fn calendar_name(mut self, name: Option<String>) -> Self {
        self.calendar_name = name;
        self
    }

    /// Title and description of the event.
    pub fn event(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.event_title = Some(title.into());
        self.event_description = Some(description.into());
        self
    }

    /// IANA time zone of created calendars and events. Defaults to the system zone.
    pub fn time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Builds the manager over `store`.
    pub fn build<S: CalendarStore>(self, store: S) -> CalendarProviderManager<S> {
        let alarm_start_time = self
            .alarm_start_time
            .filter(|t| t.as_millisecond() > 0)
            .unwrap_or_else(Timestamp::now);

        let calendar_name = self.calendar_name.filter(|n| !n.is_empty());
        let account_name = calendar_name.as_ref().map(|n| format!("calendar@{n}.com"));

        CalendarProviderManager {
            store,
            has_alarm: self.has_alarm,
            alarm_start_time,
            alarm_duration_time: self.alarm_duration_time,
            alarm_lead_time: self.alarm_lead_time,
            alarm_lead_unit: self.alarm_lead_unit,
            account_display_name: calendar_name.clone(),
            calendar_name,
            account_name,
            event_title: self.event_title,
            event_description: self.event_description,
            time_zone: self.time_zone.unwrap_or_else(system_time_zone),
        }
    }
}

/// Adds, updates, deletes and looks up calendar events with optional reminders.
///
/// Operations that produce an id return [`NO_ID`] when the calendar or event is
/// absent or the store refused an insert.
#[derive(Debug)]
pub struct CalendarProviderManager<S> {
    store: S,
    has_alarm: bool,
    alarm_start_time: Timestamp,
    alarm_duration_time: i32,
    alarm_lead_time: i32,
    alarm_lead_unit: Option<LeadTimeUnit>,
    calendar_name: Option<String>,
    account_name: Option<String>,
    account_display_name: Option<String>,
    event_title: Option<String>,
    event_description: Option<String>,
    time_zone: String,
}

impl<S: CalendarStore> CalendarProviderManager<S> {
    /// The underlying calendar store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the manager, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Start of the event in milliseconds.
    pub fn start_millis(&self) -> i64 {
        self.alarm_start_time.as_millisecond()
    }

    /// End of the event in milliseconds.
    pub fn end_millis(&self) -> i64 {
        self.start_millis() + i64::from(self.alarm_duration_time) * 60 * 1000
    }

    /// Reminder lead time in minutes.
    pub fn lead_minutes(&self) -> i64 {
        normalize_to_minutes(self.alarm_lead_time, self.alarm_lead_unit)
    }

    /// Resolves the calendar events are added to.
    ///
    /// Without a calendar name the first calendar is used. With one, the last
    /// calendar of that account is used. In both cases a calendar is created
    /// when none matches.
    pub async fn check_calendar_account(&self) -> CalendarResult<i64> {
        let calendars = self
            .store
            .list_calendars(self.account_name.as_deref())
            .await?;

        if calendars.is_empty() {
            tracing::info!(account = ?self.account_name, "no calendar account, adding a new one");
            let account_id = self.add_calendar_account().await;
            if account_id > NO_ID {
                tracing::info!(account_id, "calendar account added");
            } else {
                tracing::warn!("failed to add calendar account");
            }
            return Ok(account_id);
        }

        let account_id = match &self.account_name {
            None => {
                tracing::debug!("no account specified, using the first calendar");
                calendars.first().map_or(NO_ID, |c| c.id)
            }
            Some(name) => {
                tracing::debug!(account = name, "using the specified account");
                calendars
                    .iter()
                    .rev()
                    .find(|c| c.account_name.as_deref() == Some(name))
                    .map_or(NO_ID, |c| c.id)
            }
        };
        Ok(account_id)
    }

    /// Adds the configured calendar account. Returns [`NO_ID`] if the store refuses it.
    pub async fn add_calendar_account(&self) -> i64 {
        let calendar = NewCalendar {
            name: self.calendar_name.clone(),
            account_name: self.account_name.clone(),
            account_type: ACCOUNT_TYPE_LOCAL.to_string(),
            display_name: self.account_display_name.clone(),
            owner_account: self.account_name.clone(),
            time_zone: self.time_zone.clone(),
        };

        match self.store.insert_calendar(&calendar).await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(%err, "failed to insert calendar");
                NO_ID
            }
        }
    }

    /// Deletes a calendar account with its events. Returns the number of calendars removed.
    pub async fn delete_calendar_account(&self, account_id: i64) -> CalendarResult<u64> {
        self.store.delete_calendar(account_id).await
    }

    /// Adds the configured event, with a reminder when an alarm is requested.
    ///
    /// Returns the new event id, or [`NO_ID`] when no calendar could be
    /// resolved, an event with the same title and description already exists,
    /// or the store refused the insert.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidArgument`] if no event title and description were set.
    pub async fn add_calendar_event(&self) -> CalendarResult<i64> {
        let account_id = self.check_calendar_account().await?;
        if account_id <= NO_ID {
            tracing::warn!("cannot resolve a calendar account, event not added");
            return Ok(NO_ID);
        }

        let exists = self
            .query_calendar_event(self.event_title.as_deref(), self.event_description.as_deref())
            .await?
            > NO_ID;
        tracing::debug!(
            start = self.start_millis(),
            end = self.end_millis(),
            exists,
            "adding calendar event"
        );
        if exists {
            return Ok(NO_ID);
        }

        let event = NewEvent {
            calendar_id: account_id,
            title: self.event_title.clone().unwrap_or_default(),
            description: self.event_description.clone().unwrap_or_default(),
            dtstart: self.start_millis(),
            dtend: self.end_millis(),
            time_zone: self.time_zone.clone(),
            has_alarm: self.has_alarm,
        };
        let event_id = match self.store.insert_event(&event).await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(%err, "failed to insert event");
                NO_ID
            }
        };

        if self.has_alarm && event_id > NO_ID {
            self.add_or_update_calendar_event_alarm(event_id, false)
                .await?;
        }

        tracing::info!(event_id, success = event_id > NO_ID, "add calendar event");
        Ok(event_id)
    }

    /// Deletes an event and its reminders.
    ///
    /// Returns `false` only for a negative id; deleting an id that does not
    /// exist still returns `true`.
    pub async fn delete_calendar_event(&self, event_id: i64) -> CalendarResult<bool> {
        if event_id <= NO_ID {
            return Ok(false);
        }

        let removed = self.store.delete_event(event_id).await?;
        tracing::debug!(event_id, removed, "deleted calendar event");
        Ok(true)
    }

    /// Overwrites an event with the configured title, description, alarm flag
    /// and times, then rewrites its reminders with the configured lead time.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidArgument`] if no event title and description were set.
    pub async fn update_calendar_event(&self, event_id: i64) -> CalendarResult<bool> {
        let (Some(title), Some(description)) = (&self.event_title, &self.event_description) else {
            return Err(CalendarError::InvalidArgument(
                "event title and description can't be absent".to_string(),
            ));
        };

        let changes = EventChanges {
            title: title.clone(),
            description: description.clone(),
            dtstart: self.start_millis(),
            dtend: self.end_millis(),
            has_alarm: self.has_alarm,
        };
        tracing::debug!(event_id, has_alarm = self.has_alarm, "updating calendar event");
        let changed = self.store.update_event(event_id, &changes).await?;
        tracing::debug!(event_id, changed, "updated calendar event");

        self.add_or_update_calendar_event_alarm(event_id, true)
            .await
    }

    /// Looks up an event by exact title and description.
    ///
    /// Returns the id of the last match, or [`NO_ID`].
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidArgument`] if the title or description is absent.
    pub async fn query_calendar_event(
        &self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> CalendarResult<i64> {
        let events = if title.is_some() && description.is_some() {
            self.store.list_events().await?
        } else {
            Vec::new()
        };
        find_event(&events, title, description)
    }

    /// Lists all events of all calendars.
    pub async fn list_events(&self) -> CalendarResult<Vec<EventRecord>> {
        self.store.list_events().await
    }

    /// Lists all calendar accounts.
    pub async fn list_calendars(&self) -> CalendarResult<Vec<CalendarRecord>> {
        self.store.list_calendars(None).await
    }

    /// Lists the reminders of an event.
    pub async fn list_reminders(&self, event_id: i64) -> CalendarResult<Vec<ReminderRecord>> {
        self.store.list_reminders(event_id).await
    }

    async fn add_or_update_calendar_event_alarm(
        &self,
        event_id: i64,
        is_update: bool,
    ) -> CalendarResult<bool> {
        let minutes = self.lead_minutes();

        if is_update {
            let changed = self
                .store
                .update_reminders(event_id, minutes, METHOD_ALERT)
                .await?;
            tracing::debug!(event_id, minutes, changed, "updated reminders");
            return Ok(true);
        }

        let reminder = NewReminder {
            event_id,
            minutes,
            method: METHOD_ALERT,
        };
        match self.store.insert_reminder(&reminder).await {
            Ok(id) => {
                tracing::debug!(event_id, reminder_id = id, minutes, "added reminder");
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(event_id, %err, "failed to add reminder");
                Ok(false)
            }
        }
    }
}
