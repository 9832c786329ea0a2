//! Task Entity
//!
//! Records in the shape the remote API and the page cache both use:
//! `{ "id", "todo", "completed", "userId" }`.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, TodoError, TodoResult};

/// Owner assigned to every task created from this client
pub const DEFAULT_OWNER_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(rename = "todo")]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub owner_id: u32,
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

impl NewTask {
    /// Validate raw user input; whitespace-only text is rejected.
    pub fn parse(raw: &str) -> TodoResult<Self> {
        let todo = raw.trim();
        if todo.is_empty() {
            return Err(TodoError::Validation("Task cannot be empty".to_string()));
        }
        Ok(Self {
            todo: todo.to_string(),
            completed: false,
            user_id: DEFAULT_OWNER_ID,
        })
    }
}

/// One page of the remote list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskPage {
    pub todos: Vec<Task>,
    pub total: usize,
}
