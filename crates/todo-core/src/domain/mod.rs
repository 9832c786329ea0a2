//! Domain Layer
//!
//! Core entities and the error taxonomy shared by every layer.

mod entity;
mod task;

pub use entity::*;
pub use task::*;
