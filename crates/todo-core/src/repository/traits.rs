//! Repository Layer - Core Traits
//!
//! Futures are not `Send`: both collaborators live on the browser's
//! single UI thread.

use async_trait::async_trait;

use crate::domain::{NewTask, Task, TaskPage, TodoResult};

/// Remote collaborator providing paged list/create/update/delete
#[async_trait(?Send)]
pub trait TaskSource {
    /// Fetch the page starting at offset `skip`
    async fn list(&self, skip: usize) -> TodoResult<TaskPage>;

    /// Create a task; the returned record carries the server-assigned id
    async fn create(&self, task: &NewTask) -> TodoResult<Task>;

    /// Delete a task by id
    async fn delete(&self, id: u32) -> TodoResult<()>;

    /// Partial update setting `completed = true`; returns the updated record
    async fn complete(&self, id: u32) -> TodoResult<Task>;
}

/// Page cache keyed by page number
///
/// Entries are replaced wholesale, never merged. No eviction or expiry.
pub trait PageStore {
    fn get(&self, page: usize) -> TodoResult<Option<Vec<Task>>>;

    fn put(&self, page: usize, tasks: &[Task]) -> TodoResult<()>;

    fn remove(&self, page: usize) -> TodoResult<()>;

    /// Last total count reported by the source, if any was stored
    fn get_total(&self) -> TodoResult<Option<usize>>;

    fn put_total(&self, total: usize) -> TodoResult<()>;
}

impl<T: PageStore + ?Sized> PageStore for Box<T> {
    fn get(&self, page: usize) -> TodoResult<Option<Vec<Task>>> {
        (**self).get(page)
    }

    fn put(&self, page: usize, tasks: &[Task]) -> TodoResult<()> {
        (**self).put(page, tasks)
    }

    fn remove(&self, page: usize) -> TodoResult<()> {
        (**self).remove(page)
    }

    fn get_total(&self) -> TodoResult<Option<usize>> {
        (**self).get_total()
    }

    fn put_total(&self, total: usize) -> TodoResult<()> {
        (**self).put_total(total)
    }
}
