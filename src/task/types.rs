use crate::env::DUE_DATE_FORMAT;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for tasks
pub type TaskId = Uuid;

/// Unique identifier for users, task lists and projects
pub type ContainerId = Uuid;

/// Message carried by [`TaskError::InvalidDueDate`]
pub const INVALID_DUE_DATE_MESSAGE: &str = "Invalid due date format. Please use YYYY-MM-DD.";

/// Core task structure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub kind: TaskKind,
    pub created_at: DateTime<Utc>,
}

/// Task status. The only transition is Pending -> Completed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    Pending,
    /// Task was explicitly completed
    Completed,
}

/// What kind of task this is
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum TaskKind {
    #[default]
    Standard,
    /// A task that may be associated with a project. The link is an
    /// association by id only; the project does not own the task.
    Project { project: Option<ContainerId> },
}

/// Errors raised by task bookkeeping operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// Due date text was not a `YYYY-MM-DD` calendar date
    #[error("{message} (got {input:?})")]
    InvalidDueDate { input: String, message: String },

    /// Shifting the due date left the representable date range
    #[error("Due date cannot be moved by {days} days")]
    DueDateOutOfRange { days: i64 },

    /// A task with this id is already registered
    #[error("Task {id} is already registered")]
    DuplicateTask { id: TaskId },

    /// A referenced task, user, list or project is absent
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
}

impl TaskError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded month and day fields, so the parsed date is
/// formatted back and compared with the input to reject `2023-4-5` and
/// similar forms.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::InvalidDueDate {
        input: text.to_string(),
        message: INVALID_DUE_DATE_MESSAGE.to_string(),
    };

    let date = NaiveDate::parse_from_str(text, DUE_DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DUE_DATE_FORMAT).to_string() != text {
        return Err(invalid());
    }
    Ok(date)
}

impl Task {
    /// Create a new pending task without a due date
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Pending,
            due_date: None,
            kind: TaskKind::Standard,
            created_at: Utc::now(),
        }
    }

    /// Create a project task, optionally already linked to a project
    pub fn project_task(
        title: impl Into<String>,
        description: impl Into<String>,
        project: Option<ContainerId>,
    ) -> Self {
        Self {
            kind: TaskKind::Project { project },
            ..Self::new(title, description)
        }
    }

    /// Builder variant of [`Task::set_due_date`]
    pub fn with_due_date(mut self, text: &str) -> Result<Self, TaskError> {
        self.set_due_date(text)?;
        Ok(self)
    }

    /// Parse and store a due date. On failure the previous date is kept.
    pub fn set_due_date(&mut self, text: &str) -> Result<(), TaskError> {
        self.due_date = Some(parse_due_date(text)?);
        Ok(())
    }

    /// Shift the due date by `days` (may be negative). No-op when unset.
    pub fn extend_due_date(&mut self, days: i64) -> Result<(), TaskError> {
        let Some(current) = self.due_date else {
            return Ok(());
        };

        let shifted = Duration::try_days(days)
            .and_then(|delta| current.checked_add_signed(delta))
            .ok_or(TaskError::DueDateOutOfRange { days })?;
        self.due_date = Some(shifted);
        Ok(())
    }

    /// Mark the task completed. Calling it again has no further effect.
    pub fn complete_task(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Due date is set and falls on or before `today`
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due <= today)
    }

    /// Due date is set and falls strictly after `today`
    pub fn is_upcoming_on(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due > today)
    }

    pub fn is_project_task(&self) -> bool {
        matches!(self.kind, TaskKind::Project { .. })
    }

    /// Project this task is associated with, if any
    pub fn project(&self) -> Option<ContainerId> {
        match self.kind {
            TaskKind::Project { project } => project,
            TaskKind::Standard => None,
        }
    }

    /// Associate the task with a project, turning it into a project task
    pub fn set_project(&mut self, project: ContainerId) {
        self.kind = TaskKind::Project {
            project: Some(project),
        };
    }

    /// Due date formatted as `YYYY-MM-DD`
    pub fn due_date_string(&self) -> Option<String> {
        self.due_date
            .map(|date| date.format(DUE_DATE_FORMAT).to_string())
    }
}
