use crate::env::labels;
use crate::task::registry::TaskRegistry;
use crate::task::types::*;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::debug;
use uuid::Uuid;

/// Remove the first occurrence of `task_id`, leaving `tasks` untouched when
/// it is absent
pub(crate) fn remove_first(tasks: &mut Vec<TaskId>, task_id: TaskId) -> Result<(), TaskError> {
    let position = tasks
        .iter()
        .position(|id| *id == task_id)
        .ok_or(TaskError::not_found("Task", task_id))?;
    tasks.remove(position);
    Ok(())
}

/// Distinguishes the container roles that share [`TaskContainer`]
pub trait ContainerKind {
    /// Label printed before the container name by `display_tasks`
    fn header(&self) -> &'static str;

    /// Entity name used in `NotFound` errors and logs
    fn entity(&self) -> &'static str;
}

/// A person tasks are assigned to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
}

/// Plain named list of tasks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ListKind;

/// Project grouping of tasks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ProjectKind;

impl ContainerKind for UserProfile {
    fn header(&self) -> &'static str {
        labels::USER_HEADER
    }

    fn entity(&self) -> &'static str {
        "User"
    }
}

impl ContainerKind for ListKind {
    fn header(&self) -> &'static str {
        labels::LIST_HEADER
    }

    fn entity(&self) -> &'static str {
        "Task list"
    }
}

impl ContainerKind for ProjectKind {
    fn header(&self) -> &'static str {
        labels::PROJECT_HEADER
    }

    fn entity(&self) -> &'static str {
        "Project"
    }
}

/// Named, ordered, non-owning sequence of task ids
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskContainer<K> {
    pub id: ContainerId,
    pub name: String,
    pub kind: K,
    tasks: Vec<TaskId>,
}

pub type User = TaskContainer<UserProfile>;
pub type TaskList = TaskContainer<ListKind>;
pub type Project = TaskContainer<ProjectKind>;

impl<K: ContainerKind> TaskContainer<K> {
    pub fn with_kind(name: impl Into<String>, kind: K) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            tasks: Vec::new(),
        }
    }

    /// Append a task. The same task may be added more than once.
    pub fn add_task(&mut self, task_id: TaskId) {
        self.tasks.push(task_id);
        debug!(
            "{} '{}': added task {}",
            self.kind.entity(),
            self.name,
            task_id
        );
    }

    /// Remove the first occurrence of `task_id`
    pub fn remove_task(&mut self, task_id: TaskId) -> Result<(), TaskError> {
        remove_first(&mut self.tasks, task_id)?;
        debug!(
            "{} '{}': removed task {}",
            self.kind.entity(),
            self.name,
            task_id
        );
        Ok(())
    }

    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.contains(&task_id)
    }

    /// Write the header line followed by each task title
    pub fn display_tasks(&self, registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
        let titles = registry.titles(&self.tasks).map_err(io::Error::other)?;
        writeln!(out, "{}: {}", self.kind.header(), self.name)?;
        for title in titles {
            writeln!(out, "{}", title)?;
        }
        Ok(())
    }
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            UserProfile {
                email: email.into(),
            },
        )
    }

    pub fn email(&self) -> &str {
        &self.kind.email
    }
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, ListKind)
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, ProjectKind)
    }
}
