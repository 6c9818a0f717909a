// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of calprov.

mod arg;
mod calendar_formatter;
mod cli;
mod cmd_calendar;
mod cmd_event;
mod cmd_generate_completion;
mod config;
mod event_formatter;
mod session;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
