//! Application Context
//!
//! Shared session handle provided via Leptos Context API. Each action runs
//! the session call, reports the outcome as a notice and pushes the new
//! view into the store.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{report, Action, Notice, Notifier, PageStore, PageView, Session, TodoResult};

use crate::api::HttpTaskSource;
use crate::store::{store_clear_notice, store_push_notice, store_show_view, PagerStore};

pub type TodoSession = Session<HttpTaskSource, Box<dyn PageStore>>;

/// Notifier writing to the banner; notices expire after a timeout
#[derive(Clone, Copy)]
struct BannerNotifier {
    store: PagerStore,
    timeout_ms: u32,
}

impl Notifier for BannerNotifier {
    fn notify(&self, notice: Notice) {
        let store = self.store;
        let timeout_ms = self.timeout_ms;
        let seq = store_push_notice(&store, notice);
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            store_clear_notice(&store, seq);
        });
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Rc<TodoSession>, LocalStorage>,
    /// Display state
    pub store: PagerStore,
    notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(session: TodoSession, store: PagerStore, notice_timeout_ms: u32) -> Self {
        Self {
            session: StoredValue::new_local(Rc::new(session)),
            store,
            notice_timeout_ms,
        }
    }

    fn session(&self) -> Rc<TodoSession> {
        self.session.get_value()
    }

    fn notifier(&self) -> BannerNotifier {
        BannerNotifier { store: self.store, timeout_ms: self.notice_timeout_ms }
    }

    /// Report the outcome and show the new view, if any
    fn settle(&self, action: Action, result: TodoResult<Option<PageView>>) -> TodoResult<()> {
        report(action, &result, &self.notifier());
        let view = result?;
        if let Some(view) = view {
            store_show_view(&self.store, view);
        }
        Ok(())
    }

    /// Load the current page (cache first)
    pub async fn load(self) -> TodoResult<()> {
        let result = self.session().load().await;
        self.settle(Action::Load, result.map(Some))
    }

    pub async fn next_page(self) -> TodoResult<()> {
        let result = self.session().next_page().await;
        self.settle(Action::Load, result)
    }

    pub async fn previous_page(self) -> TodoResult<()> {
        let result = self.session().previous_page().await;
        self.settle(Action::Load, result)
    }

    pub async fn add(self, text: String) -> TodoResult<()> {
        let result = self.session().add(&text).await;
        self.settle(Action::Add, result.map(Some))
    }

    /// `confirmed` is the answer given by the inline confirm control
    pub async fn delete(self, id: u32, confirmed: bool) -> TodoResult<()> {
        let result = self.session().delete(id, &confirmed).await;
        if matches!(result, Ok(None)) {
            return Ok(());
        }
        self.settle(Action::Delete, result)
    }

    pub async fn complete(self, id: u32) -> TodoResult<()> {
        let result = self.session().complete(id).await;
        self.settle(Action::Complete, result.map(Some))
    }

    /// Filter the loaded page; never touches the cache
    pub fn search(self, query: &str) {
        let view = self.session().search(query);
        store_show_view(&self.store, view);
    }
}
