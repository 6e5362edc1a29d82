use crate::task::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Owns every task, indexed by id.
///
/// Containers, schedulers and the manager only hold [`TaskId`]s, so a change
/// made through the registry is seen by every holder of that id.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskId, Task>,
    /// Insertion order, for stable iteration and export
    order: Vec<TaskId>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a task and return its id.
    ///
    /// An id that is already registered is rejected; changes to a registered
    /// task go through [`TaskRegistry::get_mut`].
    pub fn insert(&mut self, task: Task) -> Result<TaskId, TaskError> {
        let task_id = task.id;
        if self.contains(task_id) {
            return Err(TaskError::DuplicateTask { id: task_id });
        }
        debug!("Registering task {} ({})", task_id, task.title);
        self.tasks.insert(task_id, task);
        self.order.push(task_id);
        Ok(task_id)
    }

    pub fn get(&self, task_id: TaskId) -> Result<&Task, TaskError> {
        self.tasks
            .get(&task_id)
            .ok_or(TaskError::not_found("Task", task_id))
    }

    pub fn get_mut(&mut self, task_id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .get_mut(&task_id)
            .ok_or(TaskError::not_found("Task", task_id))
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.contains_key(&task_id)
    }

    /// Drop a task from the registry. Containers still holding the id will
    /// report `NotFound` when they next resolve it.
    pub fn remove(&mut self, task_id: TaskId) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .remove(&task_id)
            .ok_or(TaskError::not_found("Task", task_id))?;
        self.order.retain(|id| *id != task_id);
        debug!("Removed task {} from registry", task_id);
        Ok(task)
    }

    /// Tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolve the title of every id, failing on the first unknown one
    pub fn titles<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a TaskId>,
    ) -> Result<Vec<&'a str>, TaskError> {
        ids.into_iter()
            .map(|&id| self.get(id).map(|task| task.title.as_str()))
            .collect()
    }

    /// Export all tasks, in insertion order, as pretty JSON
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let tasks: Vec<&Task> = self.iter().collect();
        serde_json::to_string_pretty(&tasks)
    }
}
