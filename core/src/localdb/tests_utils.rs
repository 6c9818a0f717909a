// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ACCOUNT_TYPE_LOCAL, METHOD_ALERT, NewCalendar, NewEvent, NewReminder};

/// Creates a calendar named `name`, or an unnamed one.
pub fn new_calendar(name: Option<&str>) -> NewCalendar {
    let account_name = name.map(|n| format!("calendar@{n}.com"));
    NewCalendar {
        name: name.map(ToString::to_string),
        account_name: account_name.clone(),
        account_type: ACCOUNT_TYPE_LOCAL.to_string(),
        display_name: name.map(ToString::to_string),
        owner_account: account_name,
        time_zone: "UTC".to_string(),
    }
}

/// Creates a ten minute event starting at 2019-12-07T06:00:00Z.
pub fn new_event(calendar_id: i64, title: &str, description: &str) -> NewEvent {
    const START: i64 = 1_575_698_400_000;
    NewEvent {
        calendar_id,
        title: title.to_string(),
        description: description.to_string(),
        dtstart: START,
        dtend: START + 10 * 60 * 1000,
        time_zone: "UTC".to_string(),
        has_alarm: false,
    }
}

/// Creates an alert reminder.
pub fn new_reminder(event_id: i64, minutes: i64) -> NewReminder {
    NewReminder {
        event_id,
        minutes,
        method: METHOD_ALERT,
    }
}
