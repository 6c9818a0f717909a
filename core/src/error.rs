// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors raised by the calendar core.
#[non_exhaustive]
#[derive(Debug)]
pub enum CalendarError {
    /// A required argument was absent or malformed.
    InvalidArgument(String),

    /// The calendar store failed.
    Store(String),

    /// Configuration error.
    Config(String),

    /// Filesystem error.
    Io(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "Invalid argument: {e}"),
            Self::Store(e) => write!(f, "Calendar store error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CalendarError {}

impl From<sqlx::Error> for CalendarError {
    fn from(e: sqlx::Error) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Result alias used across the calendar core.
pub type CalendarResult<T> = Result<T, CalendarError>;
