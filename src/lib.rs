//! # Taskbook
//!
//! Task and reminder bookkeeping: tasks with due dates, users, task lists and
//! projects that share tasks by id, a scheduler/planner that classifies tasks
//! against today's date, and small executor/analyzer roles.
//!
//! ## Modules
//!
//! - **[`task`]**: tasks, the registry that owns them, containers, scheduling
//!   and the executor/analyzer capabilities
//! - **[`notification`]**: plain notifications and reminders
//! - **[`clock`]**: injectable source of "today"
//! - **[`cli`]**: argument parsing, configuration discovery and the demo flow
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use taskbook::{FixedClock, Task, TaskPlanner, TaskRegistry};
//!
//! let today = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
//! let mut registry = TaskRegistry::new();
//! let id = registry.insert(Task::new("Ship it", "").with_due_date("2023-05-15")?)?;
//!
//! let mut planner = TaskPlanner::with_clock(Arc::new(FixedClock(today)));
//! planner.add_task(id);
//! assert_eq!(planner.get_upcoming_tasks(&registry)?, vec![id]);
//! # Ok::<(), taskbook::TaskError>(())
//! ```

/// Task bookkeeping: entities, containers, scheduling and analysis.
pub mod task;

pub mod notification;

pub mod clock;

/// Environment constants and path utilities.
pub mod env;

// CLI module for command-line interface
pub mod cli;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notification::Notification;
pub use task::{
    AssigneeTaskExecutor, PriorityTaskAnalyzer, Project, ReminderTaskExecutor, Task, TaskAnalyzer,
    TaskError, TaskExecutor, TaskId, TaskList, TaskManager, TaskPlanner, TaskRegistry,
    TaskScheduler, TaskStatus, User,
};
