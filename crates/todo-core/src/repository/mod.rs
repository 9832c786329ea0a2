//! Repository Layer
//!
//! Abstractions over the remote task source and the page cache,
//! plus the in-memory cache used by tests and as a storage fallback.

mod traits;
mod memory;

pub use traits::*;
pub use memory::MemoryPageStore;

/// Default storage key prefix, one key per page: `todos-page-<N>`
pub const DEFAULT_PAGE_PREFIX: &str = "todos-page-";

/// Storage key holding the cached tasks of `page`
pub fn page_key(prefix: &str, page: usize) -> String {
    format!("{}{}", prefix, page)
}

/// Storage key holding the last total count reported by the source
pub fn total_key(prefix: &str) -> String {
    format!("{}total", prefix)
}
