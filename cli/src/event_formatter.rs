// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use calprov_core::EventRecord;
use colored::Color;
use jiff::tz::TimeZone;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_time_range};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(tz: TimeZone, verbose: bool) -> Self {
        let columns = if verbose {
            vec![
                EventColumn::Id,
                EventColumn::Calendar,
                EventColumn::TimeRange(tz),
                EventColumn::Alarm,
                EventColumn::Title,
                EventColumn::Description,
            ]
        } else {
            vec![
                EventColumn::Id,
                EventColumn::TimeRange(tz),
                EventColumn::Title,
            ]
        };
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventRecord]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventRecord],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id,
    Calendar,
    TimeRange(TimeZone),
    Alarm,
    Title,
    Description,
}

impl TableColumn<EventRecord> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "Id",
            EventColumn::Calendar => "Calendar",
            EventColumn::TimeRange(_) => "Time Range",
            EventColumn::Alarm => "Alarm",
            EventColumn::Title => "Title",
            EventColumn::Description => "Description",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a EventRecord) -> Cow<'a, str> {
        match self {
            EventColumn::Id => event.id.to_string().into(),
            EventColumn::Calendar => event.calendar_id.to_string().into(),
            EventColumn::TimeRange(tz) => format_time_range(tz, event.dtstart, event.dtend).into(),
            EventColumn::Alarm => (if event.has_alarm { "yes" } else { "no" }).into(),
            EventColumn::Title => event.title.as_str().into(),
            EventColumn::Description => event.description.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id | EventColumn::Calendar => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &EventRecord) -> Option<Color> {
        match self {
            EventColumn::Alarm if event.has_alarm => Some(Color::Yellow),
            _ => None,
        }
    }
}
