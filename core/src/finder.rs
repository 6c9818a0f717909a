// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CalendarError, EventRecord, NO_ID};

/// Looks up an existing event by exact title and description.
///
/// Events are scanned in the order they are yielded. The id of the *last*
/// matching event is returned, or [`NO_ID`] when nothing matches. Comparison is
/// exact: case-sensitive and without trimming.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if the title or description is absent.
pub fn find_event<'a, I>(
    all_events: I,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<i64, CalendarError>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let (Some(title), Some(description)) = (title, description) else {
        return Err(CalendarError::InvalidArgument(
            "event title and description can't be absent".to_string(),
        ));
    };

    let mut event_id = NO_ID;
    for event in all_events {
        tracing::trace!(id = event.id, title = %event.title, "scanning event");
        if event.title == title && event.description == description {
            event_id = event.id;
        }
    }

    tracing::debug!(title, event_id, exists = event_id > NO_ID, "event lookup finished");
    Ok(event_id)
}
