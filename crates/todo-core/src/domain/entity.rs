//! Domain Layer - Core Entity Trait and Errors

/// Core trait for records identified by a server-assigned id
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for client operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum TodoError {
    /// Input rejected before any network call
    Validation(String),
    /// Request never produced a response
    Network(String),
    /// Response arrived with a non-success status or an unusable payload
    Server { status: u16, message: String },
    /// Browser storage could not be read or written
    Storage(String),
    /// A payload could not be decoded
    Decode(String),
}

impl TodoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::Validation(msg) => write!(f, "{}", msg),
            TodoError::Network(msg) => write!(f, "Network error: {}", msg),
            TodoError::Server { status, message } => write!(f, "Server error ({}): {}", status, message),
            TodoError::Storage(msg) => write!(f, "Storage error: {}", msg),
            TodoError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Decode(err.to_string())
    }
}
