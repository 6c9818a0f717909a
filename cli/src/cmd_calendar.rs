// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::calendar_formatter::format_calendars;
use crate::session::Session;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendarList {
    pub output_format: OutputFormat,
}

impl CmdCalendarList {
    pub const NAME: &str = "calendars";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List calendar accounts")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing calendars...");
        let calendars = session.manager(session.builder()).list_calendars().await?;
        if calendars.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No calendars found".italic());
            return Ok(());
        }

        println!("{}", format_calendars(&calendars, self.output_format));
        Ok(())
    }
}
