//! Remote API Wrappers
//!
//! Frontend bindings to the remote task API.

mod todos;

pub use todos::*;
