// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{CalendarError, CalendarResult, LeadTime};

/// The name of the application.
pub const APP_NAME: &str = "calprov";

/// File name of the SQLite database inside the state directory.
pub const DB_FILE_NAME: &str = "calprov.db";

/// Minutes an event lasts unless configured otherwise.
pub const DEFAULT_DURATION_MINUTES: i32 = 10;

/// Configuration of the calendar core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state.
    /// The database is kept in memory when no directory can be determined.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Name of the calendar events are added to.
    /// The first existing calendar is used when unset.
    #[serde(default)]
    pub calendar_name: Option<String>,

    /// Default event duration in minutes.
    #[serde(default = "default_duration")]
    pub default_duration: i32,

    /// Default reminder lead time.
    #[serde(default)]
    pub default_lead_time: Option<LeadTime>,

    /// IANA time zone of new calendars and events. The system zone when unset.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            calendar_name: None,
            default_duration: DEFAULT_DURATION_MINUTES,
            default_lead_time: None,
            time_zone: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> CalendarResult<()> {
        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    CalendarError::Config(format!("Failed to expand state directory path: {e}"))
                })?);
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        if self.default_duration < 0 {
            return Err(CalendarError::Config(format!(
                "Default duration must not be negative: {}",
                self.default_duration
            )));
        }

        match &self.time_zone {
            Some(name) => {
                jiff::tz::TimeZone::get(name).map_err(|e| {
                    CalendarError::Config(format!("Unknown time zone {name}: {e}"))
                })?;
            }
            None => self.time_zone = Some(system_time_zone()),
        }

        Ok(())
    }

    /// Path of the SQLite database, if a state directory is configured.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|dir| dir.join(DB_FILE_NAME))
    }
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

/// The IANA name of the system time zone, falling back to UTC.
pub fn system_time_zone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::warn!(err = %e, "failed to get system time zone, using UTC");
            "UTC".to_string()
        }
    }
}

/// Handle tilde (~) and environment variables in the path
pub(crate) fn expand_path(path: &Path) -> CalendarResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| CalendarError::Config("Invalid path".to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> CalendarResult<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| CalendarError::Config("User-specific home directory not found".to_string()))
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> CalendarResult<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir
        .ok_or_else(|| CalendarError::Config("User-specific config directory not found".to_string()))
}

fn get_state_dir() -> CalendarResult<PathBuf> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir
        .ok_or_else(|| CalendarError::Config("User-specific state directory not found".to_string()))
}
