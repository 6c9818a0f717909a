// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar account resolution workflow tests.

use calprov_core::{ACCOUNT_TYPE_LOCAL, CalendarStore, LocalDb, NO_ID};

use crate::common::{setup_temp_dirs, test_builder};

#[tokio::test]
async fn accounts_are_created_per_calendar_name() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();

    // Act
    let work = test_builder("a", "")
        .calendar_name(Some("work".to_string()))
        .build(db.clone())
        .check_calendar_account()
        .await
        .unwrap();
    let home = test_builder("a", "")
        .calendar_name(Some("home".to_string()))
        .build(db.clone())
        .check_calendar_account()
        .await
        .unwrap();
    let work_again = test_builder("a", "")
        .calendar_name(Some("work".to_string()))
        .build(db.clone())
        .check_calendar_account()
        .await
        .unwrap();

    // Assert
    assert!(work > NO_ID);
    assert!(home > NO_ID);
    assert_ne!(work, home);
    assert_eq!(work, work_again);

    let calendars = db.list_calendars(None).await.unwrap();
    assert_eq!(calendars.len(), 2);
    assert!(calendars.iter().all(|c| c.account_type == ACCOUNT_TYPE_LOCAL));
    assert!(calendars.iter().all(|c| c.time_zone == "UTC"));
}

#[tokio::test]
async fn events_land_in_their_named_calendar() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();

    let work_event = test_builder("Review", "")
        .calendar_name(Some("work".to_string()))
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();
    let home_event = test_builder("Dinner", "")
        .calendar_name(Some("home".to_string()))
        .build(db.clone())
        .add_calendar_event()
        .await
        .unwrap();

    let work = &db.list_calendars(Some("calendar@work.com")).await.unwrap()[0];
    let home = &db.list_calendars(Some("calendar@home.com")).await.unwrap()[0];
    assert_eq!(db.get_event(work_event).await.unwrap().unwrap().calendar_id, work.id);
    assert_eq!(db.get_event(home_event).await.unwrap().unwrap().calendar_id, home.id);
}

#[tokio::test]
async fn deleting_account_removes_its_events() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let db = LocalDb::open(Some(&temp_dirs.db_path())).await.unwrap();
    let manager = test_builder("Review", "")
        .has_alarm(true)
        .calendar_name(Some("work".to_string()))
        .build(db.clone());
    let event_id = manager.add_calendar_event().await.unwrap();
    let account_id = manager.check_calendar_account().await.unwrap();

    // Act
    let removed = manager.delete_calendar_account(account_id).await.unwrap();

    // Assert
    assert_eq!(removed, 1);
    assert!(db.list_calendars(None).await.unwrap().is_empty());
    assert!(db.get_event(event_id).await.unwrap().is_none());
    assert!(db.list_reminders(event_id).await.unwrap().is_empty());
}
