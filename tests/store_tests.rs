// Unit tests for the task store - lifecycle invariants and deadline
// inference through the engine API, with the reference instant injected so
// every assertion is deterministic.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use task_mcp::{StoreError, TaskStatus, TaskStore};

// 2024-03-13 is a Wednesday
fn wednesday_morning() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 13, 9, 0, 0).unwrap()
}

fn later_that_day() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 13, 15, 30, 0).unwrap()
}

#[test]
fn test_create_without_deadline_phrase() {
    let store = TaskStore::new();
    let now = wednesday_morning();

    let task = store.create("Buy groceries", now).unwrap();
    assert_eq!(task.description, "Buy groceries");
    assert_eq!(task.deadline, None);
    assert_eq!(task.status, TaskStatus::pending);
    assert_eq!(task.created_at, now);
    assert_eq!(task.updated_at, now);
}

#[test]
fn test_create_with_weekday_phrase() {
    let store = TaskStore::new();

    // Wednesday reference date -> upcoming Friday
    let task = store
        .create("Review docs by Friday", wednesday_morning())
        .unwrap();
    assert_eq!(task.description, "Review docs");
    assert_eq!(
        task.deadline,
        Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    );
}

#[test]
fn test_create_with_relative_offset() {
    let store = TaskStore::new();

    let task = store
        .create("Prepare slides in 3 days", wednesday_morning())
        .unwrap();
    assert_eq!(task.description, "Prepare slides");
    assert_eq!(
        task.deadline,
        Some(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap())
    );
}

#[test]
fn test_create_rejects_blank_description() {
    let store = TaskStore::new();

    assert!(matches!(
        store.create("", wednesday_morning()),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        store.create("   \t ", wednesday_morning()),
        Err(StoreError::Validation(_))
    ));
}

#[test]
fn test_create_then_get_round_trip() {
    let store = TaskStore::new();

    let created = store
        .create("Set up meeting next week", wednesday_morning())
        .unwrap();
    let fetched = store.get(&created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_get_is_idempotent() {
    let store = TaskStore::new();

    let created = store.create("Stable task", wednesday_morning()).unwrap();
    let first = store.get(&created.id).unwrap();
    let second = store.get(&created.id).unwrap();
    let third = store.get(&created.id).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_update_status_advances_updated_at() {
    let store = TaskStore::new();
    let created_now = wednesday_morning();
    let updated_now = later_that_day();

    let task = store.create("Track timestamps", created_now).unwrap();

    let updated = store
        .update_status(&task.id, "completed", updated_now)
        .unwrap();
    assert_eq!(updated.status, TaskStatus::completed);
    assert_eq!(updated.updated_at, updated_now);
    // created_at is immutable
    assert_eq!(updated.created_at, created_now);
    assert!(updated.updated_at >= updated.created_at);

    // Reverting is a legal transition and advances updated_at again
    let reverted_now = Local.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap();
    let reverted = store
        .update_status(&task.id, "pending", reverted_now)
        .unwrap();
    assert_eq!(reverted.status, TaskStatus::pending);
    assert_eq!(reverted.updated_at, reverted_now);
}

#[test]
fn test_update_status_error_kinds() {
    let store = TaskStore::new();
    let task = store.create("Error cases", wednesday_morning()).unwrap();

    assert!(matches!(
        store.update_status("unknown-id", "completed", later_that_day()),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.update_status(&task.id, "bogus", later_that_day()),
        Err(StoreError::Validation(_))
    ));

    // The failed calls left the task untouched
    let unchanged = store.get(&task.id).unwrap();
    assert_eq!(unchanged.status, TaskStatus::pending);
    assert_eq!(unchanged.updated_at, wednesday_morning());
}

#[test]
fn test_delete_then_get_fails() {
    let store = TaskStore::new();

    let task = store.create("Short-lived", wednesday_morning()).unwrap();
    let removed = store.delete(&task.id).unwrap();
    assert_eq!(removed.id, task.id);

    assert!(matches!(store.get(&task.id), Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete(&task.id), Err(StoreError::NotFound(_))));
    assert!(store.list().is_empty());
}

#[test]
fn test_list_matches_creation_sequence() {
    let store = TaskStore::new();
    let now = wednesday_morning();

    let a = store.create("alpha", now).unwrap();
    let b = store.create("beta", now).unwrap();
    let c = store.create("gamma", now).unwrap();

    let ids: Vec<String> = store.list().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, b.id.clone(), c.id]);

    // Deleting from the middle keeps the remaining order
    store.delete(&b.id).unwrap();
    let descriptions: Vec<String> = store.list().into_iter().map(|t| t.description).collect();
    assert_eq!(descriptions, vec!["alpha", "gamma"]);
}

#[test]
fn test_no_deadline_means_absent_not_sentinel() {
    let store = TaskStore::new();

    let task = store
        .create("nothing date-like here", wednesday_morning())
        .unwrap();
    assert!(task.deadline.is_none());
}
