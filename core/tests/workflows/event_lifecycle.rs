// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from event creation through
//! modification and deletion against a database file.

use calprov_core::{CalendarStore, LeadTimeUnit, LocalDb, NO_ID};
use jiff::ToSpan;

use crate::common::{
    START_MS, assert_event_matches, assert_reminder_minutes, setup_temp_dirs, test_builder,
    test_start,
};

#[tokio::test]
async fn event_lifecycle_create_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let manager = test_builder("Team Meeting", "Weekly sync")
        .has_alarm(true)
        .alarm_lead_time(30, LeadTimeUnit::Minute)
        .build(db.clone());

    // Act
    let event_id = manager.add_calendar_event().await.unwrap();

    // Assert - verify event created
    assert!(event_id > NO_ID);
    let event = db.get_event(event_id).await.unwrap().unwrap();
    assert_event_matches(&event, "Team Meeting", "Weekly sync");
    assert_eq!(event.start(), Some(test_start()));
    assert_eq!(event.end(), Some(test_start() + 10.minutes()));
    assert_reminder_minutes(&db, event_id, &[30]).await;

    // Assert - verify lookup by title and description
    let found = manager
        .query_calendar_event(Some("Team Meeting"), Some("Weekly sync"))
        .await
        .unwrap();
    assert_eq!(found, event_id);
}

#[tokio::test]
async fn event_lifecycle_update_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let event_id = test_builder("Draft Title", "Body")
        .has_alarm(true)
        .alarm_lead_time(1, LeadTimeUnit::Day)
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    // Act - update event
    let updated = test_builder("Updated Title", "Body")
        .has_alarm(true)
        .alarm_start_time(test_start() + 2.hours())
        .alarm_duration_time(60)
        .alarm_lead_time(2, LeadTimeUnit::Hour)
        .build(db.clone())
        .update_calendar_event(event_id)
        .await
        .unwrap();

    // Assert
    assert!(updated);
    let event = db.get_event(event_id).await.unwrap().unwrap();
    assert_event_matches(&event, "Updated Title", "Body");
    assert_eq!(event.dtstart, START_MS + 2 * 3_600_000);
    assert_eq!(event.dtend, START_MS + 3 * 3_600_000);
    assert_reminder_minutes(&db, event_id, &[120]).await;
}

#[tokio::test]
async fn event_lifecycle_delete_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let manager = test_builder("Disposable", "").has_alarm(true).build(db.clone());
    let event_id = manager.add_calendar_event().await.unwrap();

    // Act
    let deleted = manager.delete_calendar_event(event_id).await.unwrap();

    // Assert
    assert!(deleted);
    assert!(db.get_event(event_id).await.unwrap().is_none());
    assert_reminder_minutes(&db, event_id, &[]).await;
    assert_eq!(
        manager
            .query_calendar_event(Some("Disposable"), Some(""))
            .await
            .unwrap(),
        NO_ID
    );
}

#[tokio::test]
async fn event_lifecycle_duplicate_is_rejected_after_reopen() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let first = test_builder("Standup", "Daily")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();
    db.close().await.unwrap();

    // Act
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let second = test_builder("Standup", "Daily")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    // Assert
    assert!(first > NO_ID);
    assert_eq!(second, NO_ID);
    assert_eq!(db.list_events().await.unwrap().len(), 1);
}

#[tokio::test]
async fn event_lifecycle_same_title_different_description_is_added() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();

    let first = test_builder("Standup", "Monday")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();
    let second = test_builder("Standup", "Tuesday")
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    assert!(first > NO_ID);
    assert!(second > first);
}
