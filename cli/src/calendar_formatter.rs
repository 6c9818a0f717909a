// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use calprov_core::CalendarRecord;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

const COLUMNS: &[CalendarColumn] = &[
    CalendarColumn::Id,
    CalendarColumn::Name,
    CalendarColumn::Account,
    CalendarColumn::Type,
    CalendarColumn::TimeZone,
];

pub fn format_calendars(calendars: &[CalendarRecord], format: OutputFormat) -> Display<'_> {
    Display { calendars, format }
}

#[derive(Debug)]
pub struct Display<'a> {
    calendars: &'a [CalendarRecord],
    format: OutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.calendars).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(f, "{}", Table::new(COLUMNS, self.calendars)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CalendarColumn {
    Id,
    Name,
    Account,
    Type,
    TimeZone,
}

impl TableColumn<CalendarRecord> for CalendarColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            CalendarColumn::Id => "Id",
            CalendarColumn::Name => "Name",
            CalendarColumn::Account => "Account",
            CalendarColumn::Type => "Type",
            CalendarColumn::TimeZone => "Time Zone",
        }
        .into()
    }

    fn format<'a>(&self, calendar: &'a CalendarRecord) -> Cow<'a, str> {
        fn or_dash(s: &Option<String>) -> Cow<'_, str> {
            s.as_deref().unwrap_or("-").into()
        }

        match self {
            CalendarColumn::Id => calendar.id.to_string().into(),
            CalendarColumn::Name => or_dash(&calendar.display_name),
            CalendarColumn::Account => or_dash(&calendar.account_name),
            CalendarColumn::Type => calendar.account_type.as_str().into(),
            CalendarColumn::TimeZone => calendar.time_zone.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            CalendarColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
