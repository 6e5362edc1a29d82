use crate::clock::{Clock, SystemClock};
use crate::env::labels;
use crate::task::container::remove_first;
use crate::task::registry::TaskRegistry;
use crate::task::types::*;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

/// Holds tasks and classifies them by due date relative to today
#[derive(Clone, Debug)]
pub struct TaskScheduler {
    tasks: Vec<TaskId>,
    clock: Arc<dyn Clock>,
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScheduler {
    /// Create a scheduler reading today's date from the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a scheduler with a custom date source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    pub fn add_task(&mut self, task_id: TaskId) {
        self.tasks.push(task_id);
        debug!("Scheduler: added task {}", task_id);
    }

    /// Remove the first occurrence of `task_id`
    pub fn remove_task(&mut self, task_id: TaskId) -> Result<(), TaskError> {
        remove_first(&mut self.tasks, task_id)?;
        debug!("Scheduler: removed task {}", task_id);
        Ok(())
    }

    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Current date according to the scheduler's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Tasks whose due date is on or before today, in insertion order.
    /// Tasks without a due date are never due.
    pub fn get_due_tasks(&self, registry: &TaskRegistry) -> Result<Vec<TaskId>, TaskError> {
        let today = self.today();
        self.select(registry, |task| task.is_due_on(today))
    }

    fn select(
        &self,
        registry: &TaskRegistry,
        predicate: impl Fn(&Task) -> bool,
    ) -> Result<Vec<TaskId>, TaskError> {
        let mut selected = Vec::new();
        for &task_id in &self.tasks {
            if predicate(registry.get(task_id)?) {
                selected.push(task_id);
            }
        }
        Ok(selected)
    }

    /// Write every held task under the "Due Tasks:" header.
    ///
    /// The list is not filtered; use [`TaskScheduler::get_due_tasks`] to
    /// classify.
    pub fn display_tasks(&self, registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
        let titles = registry.titles(&self.tasks).map_err(io::Error::other)?;
        writeln!(out, "{}", labels::SCHEDULER_HEADER)?;
        for title in titles {
            writeln!(out, "{}", title)?;
        }
        Ok(())
    }
}

/// Scheduler that can also report tasks due in the future
#[derive(Clone, Debug, Default)]
pub struct TaskPlanner {
    scheduler: TaskScheduler,
}

impl TaskPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            scheduler: TaskScheduler::with_clock(clock),
        }
    }

    pub fn add_task(&mut self, task_id: TaskId) {
        self.scheduler.add_task(task_id);
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Result<(), TaskError> {
        self.scheduler.remove_task(task_id)
    }

    pub fn tasks(&self) -> &[TaskId] {
        self.scheduler.tasks()
    }

    pub fn get_due_tasks(&self, registry: &TaskRegistry) -> Result<Vec<TaskId>, TaskError> {
        self.scheduler.get_due_tasks(registry)
    }

    /// Tasks whose due date is strictly after today, in insertion order
    pub fn get_upcoming_tasks(&self, registry: &TaskRegistry) -> Result<Vec<TaskId>, TaskError> {
        let today = self.scheduler.today();
        self.scheduler
            .select(registry, |task| task.is_upcoming_on(today))
    }

    pub fn display_tasks(&self, registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
        self.scheduler.display_tasks(registry, out)
    }
}
