//! Demonstration flow: builds sample data once and drives every display
//! operation in sequence.

use crate::clock::Clock;
use crate::env::labels;
use crate::notification::Notification;
use crate::task::*;
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Inputs for one demo run
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub clock: Arc<dyn Clock>,
    pub assignee: String,
    pub reminder_message: String,
}

/// Everything the demo built, for inspection after the run
#[derive(Debug)]
pub struct DemoOutcome {
    pub registry: TaskRegistry,
    pub manager: TaskManager,
}

/// Run the demonstration, writing all output to `out`.
///
/// Errors (malformed dates, missing tasks, output failures) end the run.
pub fn run_demo(settings: &DemoSettings, out: &mut dyn Write) -> Result<DemoOutcome> {
    let mut registry = TaskRegistry::new();

    let task1 = registry.insert(Task::new("Task 1", "Description 1").with_due_date("2023-04-30")?)?;
    let task2 = registry.insert(
        Task::project_task("Task 2", "Description 2", None).with_due_date("2023-05-15")?,
    )?;

    let mut user = User::new("John Doe", "john@example.com");
    user.add_task(task1);

    let mut task_list = TaskList::new("Today's Tasks");
    task_list.add_task(task2);

    let mut project = Project::new("Project A");
    project.add_task(task2);
    registry.get_mut(task2)?.set_project(project.id);

    let mut scheduler = TaskScheduler::with_clock(settings.clock.clone());
    scheduler.add_task(task1);

    let mut manager = TaskManager::new();
    manager.add_user(user);
    manager.create_task_list("My Tasks");
    manager.create_task_list("Work Tasks");

    let reminder = Notification::reminder(settings.reminder_message.clone(), "2023-04-30");

    let mut planner = TaskPlanner::with_clock(settings.clock.clone());
    planner.add_task(task1);

    let executor: Box<dyn TaskExecutor> =
        Box::new(AssigneeTaskExecutor::new(settings.assignee.clone()));
    let analyzer: Box<dyn TaskAnalyzer> =
        Box::new(PriorityTaskAnalyzer::with_clock(settings.clock.clone()));

    info!(
        "Demo data ready: {} tasks, today is {}",
        registry.len(),
        settings.clock.today()
    );

    executor.execute(registry.get(task1)?, out)?;
    analyzer.analyze(registry.get(task1)?, out)?;

    writeln!(out, "--- Task Manager ---")?;
    manager.display_users(out)?;
    manager.display_task_lists(out)?;

    writeln!(out, "--- Task List ---")?;
    task_list.display_tasks(&registry, out)?;

    writeln!(out, "--- Project ---")?;
    project.display_tasks(&registry, out)?;

    writeln!(out, "--- Task Scheduler ---")?;
    scheduler.display_tasks(&registry, out)?;
    let due_tasks = scheduler.get_due_tasks(&registry)?;
    writeln!(out, "{}", labels::SCHEDULER_HEADER)?;
    for title in registry.titles(&due_tasks)? {
        writeln!(out, "{}", title)?;
    }

    writeln!(out, "--- Task Planner ---")?;
    let upcoming_tasks = planner.get_upcoming_tasks(&registry)?;
    writeln!(out, "{}", labels::UPCOMING_HEADER)?;
    for title in registry.titles(&upcoming_tasks)? {
        writeln!(out, "{}", title)?;
    }

    reminder.send(out)?;

    executor.execute(registry.get(task1)?, out)?;
    out.flush().context("Failed to flush demo output")?;

    info!("Demo finished");
    Ok(DemoOutcome { registry, manager })
}
