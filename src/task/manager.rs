use crate::env::labels;
use crate::task::container::*;
use crate::task::types::*;
use std::io::{self, Write};
use tracing::{debug, info};

/// Aggregates users and task lists
#[derive(Clone, Debug, Default)]
pub struct TaskManager {
    users: Vec<User>,
    task_lists: Vec<TaskList>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) -> ContainerId {
        let user_id = user.id;
        info!("Added user {} ({})", user.name, user_id);
        self.users.push(user);
        user_id
    }

    /// Remove and return the user with the given id
    pub fn remove_user(&mut self, user_id: ContainerId) -> Result<User, TaskError> {
        let position = self
            .users
            .iter()
            .position(|user| user.id == user_id)
            .ok_or(TaskError::not_found("User", user_id))?;
        let user = self.users.remove(position);
        debug!("Removed user {}", user.name);
        Ok(user)
    }

    /// Create a task list owned by the manager and return its id
    pub fn create_task_list(&mut self, name: impl Into<String>) -> ContainerId {
        let task_list = TaskList::new(name);
        let list_id = task_list.id;
        info!("Created task list {} ({})", task_list.name, list_id);
        self.task_lists.push(task_list);
        list_id
    }

    /// Remove and return the task list with the given id
    pub fn remove_task_list(&mut self, list_id: ContainerId) -> Result<TaskList, TaskError> {
        let position = self
            .task_lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or(TaskError::not_found("Task list", list_id))?;
        let task_list = self.task_lists.remove(position);
        debug!("Removed task list {}", task_list.name);
        Ok(task_list)
    }

    pub fn user(&self, user_id: ContainerId) -> Result<&User, TaskError> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or(TaskError::not_found("User", user_id))
    }

    pub fn user_mut(&mut self, user_id: ContainerId) -> Result<&mut User, TaskError> {
        self.users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(TaskError::not_found("User", user_id))
    }

    pub fn task_list(&self, list_id: ContainerId) -> Result<&TaskList, TaskError> {
        self.task_lists
            .iter()
            .find(|list| list.id == list_id)
            .ok_or(TaskError::not_found("Task list", list_id))
    }

    pub fn task_list_mut(&mut self, list_id: ContainerId) -> Result<&mut TaskList, TaskError> {
        self.task_lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or(TaskError::not_found("Task list", list_id))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn task_lists(&self) -> &[TaskList] {
        &self.task_lists
    }

    pub fn display_users(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", labels::USERS_HEADER)?;
        for user in &self.users {
            writeln!(out, "{}", user.name)?;
        }
        Ok(())
    }

    pub fn display_task_lists(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", labels::TASK_LISTS_HEADER)?;
        for task_list in &self.task_lists {
            writeln!(out, "{}", task_list.name)?;
        }
        Ok(())
    }
}
