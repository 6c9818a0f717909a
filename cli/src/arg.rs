// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use calprov_core::LeadTime;
use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    pub fn get_id(matches: &ArgMatches) -> i64 {
        matches.get_one("id").copied().unwrap_or(calprov_core::NO_ID)
    }

    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or_default()
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description of the event")
    }

    /// An absent description is the empty string.
    pub fn get_description(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start of the event, as YYYY-MM-DD HH:MM[:SS]")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn duration() -> Arg {
        arg!(--duration <MINUTES> "Duration of the event in minutes")
            .value_parser(value_parser!(i32).range(0..))
    }

    pub fn get_duration(matches: &ArgMatches) -> Option<i32> {
        matches.get_one("duration").copied()
    }

    pub fn alarm() -> Arg {
        arg!(--alarm "Attach a reminder to the event")
    }

    pub fn get_alarm(matches: &ArgMatches) -> bool {
        matches.get_flag("alarm")
    }

    pub fn lead() -> Arg {
        arg!(--lead <LEAD> "Reminder lead time, such as 30m, 2h, 1d or HH:MM")
            .value_parser(LeadTime::from_str)
    }

    pub fn get_lead(matches: &ArgMatches) -> Option<LeadTime> {
        matches.get_one("lead").copied()
    }

    pub fn calendar() -> Arg {
        arg!(--calendar <NAME> "Name of the calendar, created when missing")
    }

    pub fn get_calendar(matches: &ArgMatches) -> Option<String> {
        matches.get_one("calendar").cloned()
    }
}
