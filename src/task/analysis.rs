use crate::clock::{Clock, SystemClock};
use crate::task::types::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Evaluates a task and writes advisory output
pub trait TaskAnalyzer {
    fn analyze(&self, task: &Task, out: &mut dyn Write) -> io::Result<()>;
}

/// Flags pending tasks that are due today or overdue
#[derive(Clone, Debug)]
pub struct PriorityTaskAnalyzer {
    clock: Arc<dyn Clock>,
}

impl Default for PriorityTaskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityTaskAnalyzer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Pending, dated, and due on or before today
    pub fn is_high_priority(&self, task: &Task) -> bool {
        task.is_pending() && task.is_due_on(self.clock.today())
    }
}

impl TaskAnalyzer for PriorityTaskAnalyzer {
    fn analyze(&self, task: &Task, out: &mut dyn Write) -> io::Result<()> {
        if self.is_high_priority(task) {
            writeln!(out, "Task '{}' has high priority.", task.title)?;
        }
        Ok(())
    }
}
