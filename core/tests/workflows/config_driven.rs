// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration defaults reach the manager and
//! where the database is stored.

use calprov_core::{Builder, CalendarStore, LeadTime, LeadTimeUnit, LocalDb};

use crate::common::{assert_reminder_minutes, setup_temp_dirs, test_config, test_start};

#[tokio::test]
async fn config_database_lives_in_state_dir() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut config = test_config(&temp_dirs.state_dir, None);
    config.normalize().unwrap();

    // Act
    let path = config.db_path().unwrap();
    let db = LocalDb::open(Some(&path)).await.unwrap();
    db.close().await.unwrap();

    // Assert
    assert_eq!(path, temp_dirs.db_path());
    assert!(path.exists());
}

#[tokio::test]
async fn config_defaults_apply_to_new_events() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut config = test_config(&temp_dirs.state_dir, Some("work"));
    config.default_duration = 30;
    config.default_lead_time = Some(LeadTime::new(1, LeadTimeUnit::Hour));
    config.normalize().unwrap();
    let db = LocalDb::open(config.db_path().as_deref()).await.unwrap();

    // Act
    let event_id = Builder::from_config(&config)
        .alarm_start_time(test_start())
        .has_alarm(true)
        .event("Planning", "Quarterly")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    // Assert
    let event = db.get_event(event_id).await.unwrap().unwrap();
    assert_eq!(event.dtend - event.dtstart, 30 * 60 * 1000);
    assert_eq!(event.time_zone, "UTC");
    assert_reminder_minutes(&db, event_id, &[60]).await;

    let calendars = db.list_calendars(Some("calendar@work.com")).await.unwrap();
    assert_eq!(calendars.len(), 1);
    assert_eq!(event.calendar_id, calendars[0].id);
}

#[tokio::test]
async fn config_builder_values_override_defaults() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let mut config = test_config(&temp_dirs.state_dir, None);
    config.default_lead_time = Some(LeadTime::new(1, LeadTimeUnit::Day));
    let db = LocalDb::open(None).await.unwrap();

    let event_id = Builder::from_config(&config)
        .alarm_start_time(test_start())
        .alarm_lead_time(15, LeadTimeUnit::Minute)
        .has_alarm(true)
        .event("Call", "")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    assert_reminder_minutes(&db, event_id, &[15]).await;
}
