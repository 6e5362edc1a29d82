//! Integration tests for the demonstration flow
//!
//! These run the full driver against a fixed clock and check the exact
//! console output.

use chrono::NaiveDate;
use std::sync::Arc;
use taskbook::cli::{DemoSettings, run_demo};
use taskbook::task::TaskKind;
use taskbook::FixedClock;

fn settings_for(year: i32, month: u32, day: u32) -> DemoSettings {
    DemoSettings {
        clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(year, month, day).unwrap())),
        assignee: "John".to_string(),
        reminder_message: "Don't forget!".to_string(),
    }
}

#[test]
fn test_demo_output_after_due_date() {
    let mut out = Vec::new();
    run_demo(&settings_for(2023, 5, 1), &mut out).unwrap();

    let expected = "\
Executing task: Task 1 (Assignee: John)
Task 'Task 1' has high priority.
--- Task Manager ---
Users:
John Doe
Task Lists:
My Tasks
Work Tasks
--- Task List ---
Tasks in List: Today's Tasks
Task 2
--- Project ---
Tasks in Project: Project A
Task 2
--- Task Scheduler ---
Due Tasks:
Task 1
Due Tasks:
Task 1
--- Task Planner ---
Upcoming Tasks:
Sending reminder: Don't forget! (Due Date: 2023-04-30)
Executing task: Task 1 (Assignee: John)
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_demo_output_before_due_date() {
    let mut out = Vec::new();
    run_demo(&settings_for(2023, 4, 1), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!text.contains("high priority"));
    assert!(text.contains("--- Task Planner ---\nUpcoming Tasks:\nTask 1\n"));
    // Scheduler display is unfiltered, but the due list is empty
    assert!(text.contains("Due Tasks:\nTask 1\nDue Tasks:\n--- Task Planner ---"));
}

#[test]
fn test_demo_links_project_task() {
    let mut out = Vec::new();
    let outcome = run_demo(&settings_for(2023, 5, 1), &mut out).unwrap();

    let task2 = outcome
        .registry
        .iter()
        .find(|task| task.title == "Task 2")
        .unwrap();
    assert!(matches!(task2.kind, TaskKind::Project { project: Some(_) }));
    assert_eq!(outcome.manager.users().len(), 1);
    assert_eq!(outcome.manager.task_lists().len(), 2);
}

#[test]
fn test_demo_uses_configured_names() {
    let settings = DemoSettings {
        assignee: "Jane".to_string(),
        reminder_message: "Standup at 10".to_string(),
        ..settings_for(2023, 5, 1)
    };
    let mut out = Vec::new();
    run_demo(&settings, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Executing task: Task 1 (Assignee: Jane)\n"));
    assert!(text.contains("Sending reminder: Standup at 10 (Due Date: 2023-04-30)\n"));
}
