// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calprov_core::NO_ID;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::session::{EventTiming, Session};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub title: String,
    pub description: String,
    pub timing: EventTiming,
    pub calendar: Option<String>,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event, unless one with the same title and description exists")
            .arg(EventArgs::title())
            .arg(EventArgs::description())
            .arg(EventArgs::start())
            .arg(EventArgs::duration())
            .arg(EventArgs::alarm())
            .arg(EventArgs::lead())
            .arg(EventArgs::calendar())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
            timing: timing(matches),
            calendar: EventArgs::get_calendar(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let mut builder = session
            .event_builder(&self.timing)?
            .event(self.title, self.description);
        if self.calendar.is_some() {
            builder = builder.calendar_name(self.calendar);
        }

        let event_id = session.manager(builder).add_calendar_event().await?;
        println!("{}", added_message(event_id));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    pub id: i64,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event and its reminders")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let manager = session.manager(session.builder());
        let deleted = manager.delete_calendar_event(self.id).await?;
        println!("{}", deleted_message(deleted));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventUpdate {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub timing: EventTiming,
}

impl CmdEventUpdate {
    pub const NAME: &str = "update";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("edit")
            .about("Overwrite an event and the lead time of its reminders")
            .arg(EventArgs::id())
            .arg(EventArgs::title())
            .arg(EventArgs::description())
            .arg(EventArgs::start())
            .arg(EventArgs::duration())
            .arg(EventArgs::alarm())
            .arg(EventArgs::lead())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
            timing: timing(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating event...");
        let builder = session
            .event_builder(&self.timing)?
            .event(self.title, self.description);

        let updated = session
            .manager(builder)
            .update_calendar_event(self.id)
            .await?;
        println!("{}", updated_message(updated));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventQuery {
    pub title: String,
    pub description: String,
}

impl CmdEventQuery {
    pub const NAME: &str = "query";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Look up an event by its exact title and description")
            .arg(EventArgs::title())
            .arg(EventArgs::description())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "querying event...");
        let event_id = session
            .manager(session.builder())
            .query_calendar_event(Some(&self.title), Some(&self.description))
            .await?;
        println!("{}", query_message(event_id));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = session.manager(session.builder()).list_events().await?;
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(session.tz().clone(), self.verbose)
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }
}

impl Default for CmdEventList {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

fn added_message(event_id: i64) -> String {
    if event_id > NO_ID {
        format!("{} success, EVENT ID = {event_id}", "Added:".green())
    } else {
        format!("{} failed", "Added:".red())
    }
}

fn deleted_message(deleted: bool) -> String {
    if deleted {
        format!("{} success", "Deleted:".green())
    } else {
        format!("{} failed, please check the EVENT ID", "Deleted:".red())
    }
}

fn updated_message(updated: bool) -> String {
    if updated {
        format!("{} success", "Updated:".green())
    } else {
        format!("{} failed, please check the EVENT ID", "Updated:".red())
    }
}

fn query_message(event_id: i64) -> String {
    if event_id > NO_ID {
        format!("Query: event exists, EVENT ID = {event_id}")
    } else {
        "Query: event does not exist".to_string()
    }
}

fn timing(matches: &ArgMatches) -> EventTiming {
    EventTiming {
        start: EventArgs::get_start(matches),
        duration: EventArgs::get_duration(matches),
        alarm: EventArgs::get_alarm(matches),
        lead: EventArgs::get_lead(matches),
    }
}
