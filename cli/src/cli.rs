// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use calprov_core::APP_NAME;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::CmdCalendarList;
use crate::cmd_event::{CmdEventAdd, CmdEventDelete, CmdEventList, CmdEventQuery, CmdEventUpdate};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;
use crate::session::Session;

/// Run the calprov command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Manage calendar events and their reminders.")
            .author("Leo <calprov@leo.dev>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/calprov/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/calprov/config.toml on Windows. Can also be set with $CALPROV_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEventAdd::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdEventUpdate::command())
            .subcommand(CmdEventQuery::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdCalendarList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventAdd::NAME, matches)) => Add(CmdEventAdd::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdEventUpdate::NAME, matches)) => Update(CmdEventUpdate::from(matches)),
            Some((CmdEventQuery::NAME, matches)) => Query(CmdEventQuery::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdCalendarList::NAME, matches)) => Calendars(CmdCalendarList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => List(CmdEventList::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Add an event
    Add(CmdEventAdd),

    /// Delete an event
    Delete(CmdEventDelete),

    /// Update an event
    Update(CmdEventUpdate),

    /// Look up an event
    Query(CmdEventQuery),

    /// List events
    List(CmdEventList),

    /// List calendar accounts
    Calendars(CmdCalendarList),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Add(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            Delete(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Update(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Query(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            List(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Calendars(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Session) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let session = Session::open(core_config).await?;

        let result = f(&session).await;

        session.close().await?;
        result
    }
}
