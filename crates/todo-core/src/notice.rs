//! User Notices and Confirmation
//!
//! Outcome reporting for user-triggered actions. Failures are reported
//! and swallowed here; nothing propagates further.

use crate::domain::{TodoError, TodoResult};

/// Prompt shown before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// User-triggered operations that produce a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Delete,
    Complete,
}

impl Action {
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Action::Load => None,
            Action::Add => Some("Task added successfully."),
            Action::Delete => Some("Task deleted successfully."),
            Action::Complete => Some("Task marked as completed."),
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Load => "An error occurred while loading tasks",
            Action::Add => "An error occurred while adding the task",
            Action::Delete => "An error occurred while deleting the task",
            Action::Complete => "An error occurred while marking the task as completed.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Sink for user-facing notices
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Yes/no answer to a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// A decision already taken, e.g. by an inline confirm control
impl Confirm for bool {
    fn confirm(&self, _message: &str) -> bool {
        *self
    }
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Log the outcome of `action` and notify the user.
///
/// Validation errors show their own text; network, server and storage
/// failures share the action's generic message. Load failures only reach
/// the log.
pub fn report<T>(action: Action, result: &TodoResult<T>, notifier: &dyn Notifier) {
    match result {
        Ok(_) => {
            log::debug!(target: "Session", "{:?} succeeded", action);
            if let Some(message) = action.success_message() {
                notifier.notify(Notice::info(message));
            }
        }
        Err(TodoError::Validation(message)) => {
            log::info!(target: "Session", "{:?} rejected: {}", action, message);
            notifier.notify(Notice::error(message.clone()));
        }
        Err(err) => {
            log::error!(target: "Session", "{:?} failed: {}", action, err);
            if action != Action::Load {
                notifier.notify(Notice::error(action.failure_message()));
            }
        }
    }
}
