//! Todo Pager Core
//!
//! Target-independent logic of the paged TODO client:
//! - domain: task records and the error taxonomy
//! - repository: remote task source and page cache abstractions
//! - pagination / search / render: pure page bookkeeping and projections
//! - session: the controller that keeps cache, pagination and display in step

pub mod domain;
pub mod repository;
pub mod pagination;
pub mod search;
pub mod render;
pub mod notice;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{Entity, NewTask, Task, TaskPage, TodoError, TodoResult};
pub use notice::{report, Action, Confirm, Notice, NoticeLevel, Notifier, DELETE_PROMPT};
pub use pagination::{Pagination, ITEMS_PER_PAGE};
pub use render::{render, TaskRow, TaskStatus};
pub use repository::{page_key, total_key, MemoryPageStore, PageStore, TaskSource, DEFAULT_PAGE_PREFIX};
pub use search::search;
pub use session::{PageView, Session};
