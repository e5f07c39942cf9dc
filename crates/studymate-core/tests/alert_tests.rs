//! Tests for deadline alert generation and the alert service.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use studymate_core::{
    deadline_alerts, InMemoryRepository, NewSubject, NewTask, Organizer, Task, TaskPriority,
    TaskState, TaskUpdate,
};
use uuid::Uuid;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 7, 30, 0).unwrap()
}

fn today() -> NaiveDate {
    now().date_naive()
}

/// Helper to build a task due `due_in_days` from today.
fn task(title: &str, due_in_days: i64, state: TaskState) -> Task {
    Task {
        task_id: Uuid::new_v4(),
        subject_id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Descripción".to_string(),
        notes: None,
        start_date: today(),
        delivery_date: today() + Duration::days(due_in_days),
        priority: TaskPriority::Medium,
        state,
    }
}

#[test]
fn task_due_in_two_days_raises_alert() {
    let t = task("Tarea de prueba", 2, TaskState::Pending);
    let alerts = deadline_alerts([&t], now(), 3);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].task_id, t.task_id);
    assert_eq!(alerts[0].alert_date, today());
    assert_eq!(alerts[0].created_at, now());
    assert_eq!(alerts[0].message, "The task \"Tarea de prueba\" is due in 2 days.");
}

#[test]
fn today_and_tomorrow_have_their_own_wording() {
    let tasks = [
        task("Essay", 0, TaskState::InProgress),
        task("Lab", 1, TaskState::Pending),
    ];
    let messages: Vec<String> = deadline_alerts(&tasks, now(), 3)
        .into_iter()
        .map(|a| a.message)
        .collect();

    assert_eq!(
        messages,
        vec![
            "The task \"Essay\" is due today.",
            "The task \"Lab\" is due tomorrow.",
        ]
    );
}

#[test]
fn tasks_outside_window_raise_nothing() {
    let tasks = [
        task("Next week", 7, TaskState::Pending),
        task("Overdue", -1, TaskState::Pending),
        task("Edge", 3, TaskState::Pending),
    ];
    let alerts = deadline_alerts(&tasks, now(), 3);

    assert_eq!(alerts.len(), 1, "only the task exactly at the window edge");
    assert_eq!(alerts[0].task_id, tasks[2].task_id);
}

#[test]
fn closed_tasks_raise_nothing() {
    let tasks = [
        task("Done", 1, TaskState::Completed),
        task("Dropped", 1, TaskState::Cancelled),
    ];
    assert!(deadline_alerts(&tasks, now(), 3).is_empty());
}

#[test]
fn zero_window_only_covers_today() {
    let tasks = [task("Now", 0, TaskState::Pending), task("Soon", 1, TaskState::Pending)];
    let alerts = deadline_alerts(&tasks, now(), 0);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].task_id, tasks[0].task_id);
}

#[test]
fn alert_json_uses_api_field_names() {
    let t = task("Essay", 2, TaskState::Pending);
    let alert = deadline_alerts([&t], now(), 3).remove(0);
    let value = serde_json::to_value(&alert).unwrap();

    assert!(value.get("alertId").is_some());
    assert_eq!(value["alertDate"], "2026-03-02");
    assert!(value.get("message").is_some());
    assert!(value.get("created_at").is_some());
}

// ─────────────────────────────────────────────────────────────────────────────
// Service
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn refresh_stores_each_alert_once_per_day() {
    let mut org = Organizer::new(InMemoryRepository::new());
    let subject = org
        .create_subject(
            "alice",
            NewSubject {
                name: "Math".to_string(),
                assigned_teacher: "Prof. García".to_string(),
                color: "#FF5733".to_string(),
                schedule: vec![],
            },
        )
        .unwrap();
    let new_task = |title: &str, days: i64| NewTask {
        subject_id: subject.subject_id,
        title: title.to_string(),
        description: "Descripción".to_string(),
        notes: None,
        start_date: today(),
        delivery_date: today() + Duration::days(days),
        priority: TaskPriority::High,
        state: TaskState::Pending,
    };
    let due = org.create_task("alice", new_task("Due soon", 2), today()).unwrap();
    org.create_task("alice", new_task("Far away", 10), today()).unwrap();

    let first = org.refresh_alerts("alice", now()).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].task_id, due.task_id);

    let again = org.refresh_alerts("alice", now() + Duration::hours(2)).unwrap();
    assert!(again.is_empty(), "same task, same day: no duplicate");

    let next_day = org.refresh_alerts("alice", now() + Duration::days(1)).unwrap();
    assert_eq!(next_day.len(), 1);
    assert_eq!(next_day[0].message, "The task \"Due soon\" is due tomorrow.");

    let listed = org.list_alerts("alice").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], next_day[0], "newest first");
    assert!(org.list_alerts("bob").unwrap().is_empty());

    // Completing the task stops further alerts; removing it drops the stored ones.
    let done = TaskUpdate {
        state: Some(TaskState::Completed),
        ..Default::default()
    };
    org.update_task("alice", due.task_id, done).unwrap();
    assert!(org.refresh_alerts("alice", now() + Duration::days(2)).unwrap().is_empty());

    org.remove_task("alice", due.task_id).unwrap();
    assert!(org.list_alerts("alice").unwrap().is_empty());
}
