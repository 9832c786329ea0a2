//! Pager View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over what the
//! table, pager and notice banner show.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Notice, PageView, TaskRow};

/// Display state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PagerState {
    /// Rows currently in the table
    pub rows: Vec<TaskRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// Notice shown in the banner
    pub notice: Option<Notice>,
    /// Bumped on every notice so stale timers leave newer ones alone
    pub notice_seq: u32,
}

impl PagerState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type PagerStore = Store<PagerState>;

/// Get the pager store from context
pub fn use_pager_store() -> PagerStore {
    expect_context::<PagerStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace everything the table and pager show
pub fn store_show_view(store: &PagerStore, view: PageView) {
    store.rows().set(view.rows);
    store.current_page().set(view.current_page);
    store.total_pages().set(view.total_pages);
    store.total_items().set(view.total_items);
    store.previous_enabled().set(view.previous_enabled);
    store.next_enabled().set(view.next_enabled);
}

/// Show a notice; returns its sequence number
pub fn store_push_notice(store: &PagerStore, notice: Notice) -> u32 {
    store.notice_seq().update(|seq| *seq = seq.wrapping_add(1));
    store.notice().set(Some(notice));
    store.notice_seq().get_untracked()
}

/// Clear the notice if it is still the one numbered `seq`
pub fn store_clear_notice(store: &PagerStore, seq: u32) {
    if store.notice_seq().get_untracked() == seq {
        store.notice().set(None);
    }
}
