use std::path::PathBuf;

use rota_core::{
    params::{AddEntry, Id, ListEntries, UpdateEntry},
    TimetableBuilder, TimetableError, Weekday,
};
use tempfile::TempDir;

/// Helper function to create a temporary directory and snapshot path
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let data_path = temp_dir.path().join("test_timetable.json");
    (temp_dir, data_path)
}

fn entry_params(
    subject: &str,
    teacher: &str,
    room: &str,
    day: &str,
    start: &str,
    end: &str,
) -> AddEntry {
    AddEntry {
        subject: subject.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        notes: String::new(),
    }
}

#[test]
fn test_complete_timetable_workflow() {
    let (_temp_dir, data_path) = create_test_environment();

    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    // Add a handful of non-conflicting entries
    let math = manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add math");
    let history = manager
        .add_entry(&entry_params(
            "History",
            "Mr. Ford",
            "102",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add history");
    let biology = manager
        .add_entry(&entry_params(
            "Biology",
            "Ms. Hill",
            "Lab 1",
            "Tuesday",
            "09:00",
            "11:00",
        ))
        .expect("Failed to add biology");

    // Listing returns everything in insertion order
    let all = manager
        .list_entries(&ListEntries::default())
        .expect("Failed to list");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, math.id);
    assert_eq!(all[1].id, history.id);
    assert_eq!(all[2].id, biology.id);

    // Day filter narrows the listing
    let mondays = manager
        .list_entries(&ListEntries {
            day: Some("monday".to_string()),
        })
        .expect("Failed to list Mondays");
    assert_eq!(mondays.len(), 2);
    assert!(mondays
        .iter()
        .all(|e| e.timeslot.day == Weekday::Monday));

    // Lookup round-trips the submitted fields
    let found = manager
        .find_by_id(&Id {
            id: math.id.clone(),
        })
        .expect("Math entry should exist");
    assert_eq!(found, math);

    // Move biology to a free Wednesday slot
    let moved = manager
        .update_entry(&UpdateEntry {
            id: biology.id.clone(),
            day: Some("wednesday".to_string()),
            start_time: Some("14:00".to_string()),
            end_time: Some("15:30".to_string()),
            ..Default::default()
        })
        .expect("Failed to move biology");
    assert_eq!(moved.timeslot.day, Weekday::Wednesday);
    assert_eq!(moved.timeslot.start.to_string(), "14:00");

    // Delete one entry and confirm the count invariant
    manager
        .delete_entry(&Id {
            id: history.id.clone(),
        })
        .expect("Failed to delete history");
    let remaining = manager
        .list_entries(&ListEntries::default())
        .expect("Failed to list");
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|e| e.id != history.id));
}

#[test]
fn test_entries_survive_manager_restart() {
    let (_temp_dir, data_path) = create_test_environment();

    let first_id = {
        let mut manager = TimetableBuilder::new()
            .with_data_path(Some(&data_path))
            .build()
            .expect("Failed to create manager");
        let entry = manager
            .add_entry(&entry_params(
                "Physics",
                "Dr. Chen",
                "Lab 2",
                "Thursday",
                "10:00",
                "12:00",
            ))
            .expect("Failed to add physics");
        manager
            .add_entry(&entry_params(
                "Chemistry",
                "Dr. Chen",
                "Lab 2",
                "Friday",
                "10:00",
                "12:00",
            ))
            .expect("Failed to add chemistry");
        entry.id
    };

    // A fresh manager over the same file sees the same collection
    let manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to reopen manager");
    let entries = manager
        .list_entries(&ListEntries::default())
        .expect("Failed to list");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, first_id);
    assert_eq!(entries[0].subject, "Physics");
    assert_eq!(entries[1].subject, "Chemistry");
}

#[test]
fn test_same_teacher_overlap_conflicts() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add first entry");

    // Same teacher, different room, overlapping time
    let result = manager.add_entry(&entry_params(
        "Algebra",
        "ms. hill",
        "202",
        "Monday",
        "09:30",
        "10:30",
    ));
    assert!(matches!(
        result,
        Err(TimetableError::TimeConflict { .. })
    ));
}

#[test]
fn test_same_room_overlap_conflicts() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "Room 7",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add first entry");

    // Different teacher, same room (different capitalization)
    let result = manager.add_entry(&entry_params(
        "History",
        "Mr. Ford",
        "ROOM 7",
        "Monday",
        "09:45",
        "11:00",
    ));
    assert!(matches!(
        result,
        Err(TimetableError::TimeConflict { .. })
    ));
}

#[test]
fn test_adjacent_slots_do_not_conflict() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add first entry");

    // Touching endpoints are allowed: [09:00,10:00) then [10:00,11:00)
    manager
        .add_entry(&entry_params(
            "Algebra",
            "Ms. Hill",
            "101",
            "Monday",
            "10:00",
            "11:00",
        ))
        .expect("Back-to-back classes should be allowed");
}

#[test]
fn test_different_days_never_conflict() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add first entry");

    // Identical time, teacher and room on another day is fine
    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Tuesday",
            "09:00",
            "10:00",
        ))
        .expect("Different day should not conflict");
}

#[test]
fn test_update_into_conflict_fails() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add math");
    let history = manager
        .add_entry(&entry_params(
            "History",
            "Mr. Ford",
            "102",
            "Monday",
            "10:00",
            "11:00",
        ))
        .expect("Failed to add history");

    // Pulling history forward into math's room-free slot is fine, but
    // claiming the same room must fail
    let result = manager.update_entry(&UpdateEntry {
        id: history.id,
        room: Some("101".to_string()),
        start_time: Some("09:30".to_string()),
        end_time: Some("10:30".to_string()),
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(TimetableError::TimeConflict { .. })
    ));
}

#[test]
fn test_notes_only_update_never_self_conflicts() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    let entry = manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add entry");

    let updated = manager
        .update_entry(&UpdateEntry {
            id: entry.id,
            notes: Some("homework due".to_string()),
            ..Default::default()
        })
        .expect("Notes-only update should never conflict");
    assert_eq!(updated.notes, "homework due");
    assert_eq!(updated.timeslot, entry.timeslot);
}

#[test]
fn test_delete_nonexistent_entry_fails() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    manager
        .add_entry(&entry_params(
            "Mathematics",
            "Ms. Hill",
            "101",
            "Monday",
            "09:00",
            "10:00",
        ))
        .expect("Failed to add entry");

    let result = manager.delete_entry(&Id {
        id: "no-such-id".to_string(),
    });
    match result.unwrap_err() {
        TimetableError::EntryNotFound { id } => assert_eq!(id, "no-such-id"),
        other => panic!("Expected EntryNotFound, got {other:?}"),
    }

    // Count invariant: the failed delete changed nothing
    let entries = manager
        .list_entries(&ListEntries::default())
        .expect("Failed to list");
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_add_entry_field_validation_errors() {
    let (_temp_dir, data_path) = create_test_environment();
    let mut manager = TimetableBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create manager");

    let bad_day = manager.add_entry(&entry_params(
        "Mathematics",
        "Ms. Hill",
        "101",
        "Mondy",
        "09:00",
        "10:00",
    ));
    assert!(matches!(bad_day, Err(TimetableError::InvalidDay { .. })));

    let bad_time = manager.add_entry(&entry_params(
        "Mathematics",
        "Ms. Hill",
        "101",
        "Monday",
        "9:00",
        "10:00",
    ));
    assert!(matches!(
        bad_time,
        Err(TimetableError::InvalidTimeFormat { .. })
    ));

    let bad_order = manager.add_entry(&entry_params(
        "Mathematics",
        "Ms. Hill",
        "101",
        "Monday",
        "10:00",
        "09:00",
    ));
    assert!(matches!(
        bad_order,
        Err(TimetableError::InvalidTimeOrder { .. })
    ));
}
