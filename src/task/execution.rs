use crate::notification::Notification;
use crate::task::types::*;
use std::io::{self, Write};
use tracing::debug;

/// Acts on a task without owning or mutating it
pub trait TaskExecutor {
    fn execute(&self, task: &Task, out: &mut dyn Write) -> io::Result<()>;
}

/// Reports the task together with the person it is assigned to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssigneeTaskExecutor {
    pub assignee: String,
}

impl AssigneeTaskExecutor {
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
        }
    }
}

impl TaskExecutor for AssigneeTaskExecutor {
    fn execute(&self, task: &Task, out: &mut dyn Write) -> io::Result<()> {
        debug!("Executing task {} for {}", task.id, self.assignee);
        writeln!(
            out,
            "Executing task: {} (Assignee: {})",
            task.title, self.assignee
        )
    }
}

/// Sends a reminder for the task's title and due date
#[derive(Clone, Copy, Debug, Default)]
pub struct ReminderTaskExecutor;

impl ReminderTaskExecutor {
    /// Build the reminder this executor would send for `task`
    pub fn reminder_for(task: &Task) -> Notification {
        let due_date = task.due_date_string().unwrap_or_else(|| "none".to_string());
        Notification::reminder(task.title.clone(), due_date)
    }
}

impl TaskExecutor for ReminderTaskExecutor {
    fn execute(&self, task: &Task, out: &mut dyn Write) -> io::Result<()> {
        Self::reminder_for(task).send(out)
    }
}
