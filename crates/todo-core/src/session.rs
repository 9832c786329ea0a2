//! Session Controller
//!
//! Owns the pagination state and the tasks loaded for the current page,
//! and keeps page cache, remote source and display in step.
//!
//! Every method takes `&self`: state sits behind a `RefCell` and no borrow
//! is held across an `.await`, so handlers can share one session while
//! requests are in flight. Overlapping mutations are not serialised; the
//! last cache write wins.

use std::cell::RefCell;

use crate::domain::{Entity, NewTask, Task, TodoError, TodoResult};
use crate::notice::{Confirm, DELETE_PROMPT};
use crate::pagination::Pagination;
use crate::render::{render, TaskRow};
use crate::repository::{PageStore, TaskSource};
use crate::search::search;

/// Snapshot of what the table and pager show
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub tasks: Vec<Task>,
    pub rows: Vec<TaskRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Default)]
struct SessionState {
    pagination: Pagination,
    /// Full list loaded for the current page; search operates on it
    todos: Vec<Task>,
    /// What is currently on screen
    displayed: Vec<Task>,
}

pub struct Session<S, C> {
    source: S,
    cache: C,
    state: RefCell<SessionState>,
}

impl<S: TaskSource, C: PageStore> Session<S, C> {
    /// Start on page 1 with the last total the cache remembers
    pub fn new(source: S, cache: C) -> Self {
        let total = match cache.get_total() {
            Ok(total) => total.unwrap_or(0),
            Err(e) => {
                log::warn!(target: "Session", "Ignoring unreadable cached total: {}", e);
                0
            }
        };
        Self {
            source,
            cache,
            state: RefCell::new(SessionState {
                pagination: Pagination::new(total),
                ..Default::default()
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn pagination(&self) -> Pagination {
        self.state.borrow().pagination
    }

    /// Current display snapshot
    pub fn view(&self) -> PageView {
        let state = self.state.borrow();
        let pagination = state.pagination;
        PageView {
            rows: render(&state.displayed),
            tasks: state.displayed.clone(),
            current_page: pagination.current_page,
            total_pages: pagination.total_pages(),
            total_items: pagination.total_items,
            previous_enabled: pagination.has_previous(),
            next_enabled: pagination.has_next(),
        }
    }

    /// Show the current page: from cache when present, otherwise fetched
    /// from the source and cached. Cached pages are never revalidated.
    pub async fn load(&self) -> TodoResult<PageView> {
        let pagination = self.pagination();
        let page = pagination.current_page;

        let cached = match self.cache.get(page) {
            Ok(cached) => cached,
            Err(TodoError::Decode(e)) => {
                log::warn!(target: "Session", "Discarding corrupt cache for page {}: {}", page, e);
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(tasks) = cached {
            log::debug!(target: "Session", "Page {} served from cache ({} tasks)", page, tasks.len());
            self.show_page(tasks, None);
            return Ok(self.view());
        }

        log::info!(target: "Session", "Fetching page {} (skip={})", page, pagination.skip());
        let fetched = self.source.list(pagination.skip()).await?;
        self.cache.put(page, &fetched.todos)?;
        self.cache.put_total(fetched.total)?;
        log::info!(target: "Session", "Loaded {} tasks, total {}", fetched.todos.len(), fetched.total);
        self.show_page(fetched.todos, Some(fetched.total));
        Ok(self.view())
    }

    /// Go forward one page. `None` at the last page.
    pub async fn next_page(&self) -> TodoResult<Option<PageView>> {
        self.turn_page(Pagination::advance).await
    }

    /// Go back one page. `None` at page 1.
    pub async fn previous_page(&self) -> TodoResult<Option<PageView>> {
        self.turn_page(Pagination::retreat).await
    }

    /// Move the page index and load; a failed load restores the old index
    async fn turn_page(&self, step: fn(&mut Pagination) -> bool) -> TodoResult<Option<PageView>> {
        let from = self.pagination().current_page;
        if !step(&mut self.state.borrow_mut().pagination) {
            return Ok(None);
        }
        match self.load().await {
            Ok(view) => Ok(Some(view)),
            Err(e) => {
                self.state.borrow_mut().pagination.current_page = from;
                Err(e)
            }
        }
    }

    /// Create a task and append it to the current page's cached list,
    /// whatever its true position on the server.
    pub async fn add(&self, raw: &str) -> TodoResult<PageView> {
        let new_task = NewTask::parse(raw)?;
        let created = self.source.create(&new_task).await?;
        log::info!(target: "Session", "Created task {}", created.id);

        self.sync_current_page(|tasks| tasks.push(created))?;
        self.state.borrow_mut().pagination.record_added();
        Ok(self.view())
    }

    /// Delete a task after confirmation. `None` when the user declines.
    pub async fn delete(&self, id: u32, confirm: &dyn Confirm) -> TodoResult<Option<PageView>> {
        if !confirm.confirm(DELETE_PROMPT) {
            log::debug!(target: "Session", "Delete of task {} cancelled", id);
            return Ok(None);
        }
        self.source.delete(id).await?;
        log::info!(target: "Session", "Deleted task {}", id);

        self.sync_current_page(|tasks| tasks.retain(|task| task.id() != id))?;
        self.state.borrow_mut().pagination.record_removed();
        Ok(Some(self.view()))
    }

    /// Mark a task completed, replacing every cached record with that id
    /// by the server's.
    pub async fn complete(&self, id: u32) -> TodoResult<PageView> {
        let updated = self.source.complete(id).await?;
        if !updated.completed {
            return Err(TodoError::Server {
                status: 200,
                message: format!("task {} was not marked completed", id),
            });
        }
        log::info!(target: "Session", "Completed task {}", id);

        self.sync_current_page(|tasks| {
            for task in tasks.iter_mut().filter(|task| task.id() == id) {
                *task = updated.clone();
            }
        })?;
        Ok(self.view())
    }

    /// Filter the loaded page for display. Cache and pagination are untouched.
    pub fn search(&self, query: &str) -> PageView {
        {
            let mut state = self.state.borrow_mut();
            state.displayed = search(&state.todos, query);
        }
        self.view()
    }

    /// Rewrite the current page's cache entry (missing entries start empty)
    /// and show the result.
    fn sync_current_page(&self, apply: impl FnOnce(&mut Vec<Task>)) -> TodoResult<()> {
        let page = self.pagination().current_page;
        let mut tasks = match self.cache.get(page) {
            Ok(tasks) => tasks.unwrap_or_default(),
            Err(TodoError::Decode(e)) => {
                log::warn!(target: "Session", "Replacing corrupt cache for page {}: {}", page, e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut tasks);
        self.cache.put(page, &tasks)?;
        self.show_page(tasks, None);
        Ok(())
    }

    fn show_page(&self, tasks: Vec<Task>, total: Option<usize>) {
        let mut state = self.state.borrow_mut();
        if let Some(total) = total {
            state.pagination.total_items = total;
        }
        state.displayed = tasks.clone();
        state.todos = tasks;
    }
}
