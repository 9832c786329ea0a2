//! Row Projection
//!
//! Pure mapping from tasks to table rows.

use crate::domain::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Completed,
    Pending,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Pending => "Pending",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskRow {
    pub id: u32,
    pub description: String,
    pub owner_id: u32,
    pub status: TaskStatus,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            description: task.description.clone(),
            owner_id: task.owner_id,
            status: if task.completed { TaskStatus::Completed } else { TaskStatus::Pending },
        }
    }
}

/// Rows in display order
pub fn render(tasks: &[Task]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from).collect()
}
