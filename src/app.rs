//! Todo Pager App
//!
//! Main application component: add form, search, task table and pager.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{MemoryPageStore, PageStore, Session};

use crate::api::HttpTaskSource;
use crate::components::{NewTaskForm, NoticeBanner, Pager, SearchBox, TaskTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::LocalPageStore;
use crate::store::{PagerState, PagerStore};

/// Page cache in `localStorage`, or in memory when storage is unavailable
fn open_cache(prefix: &str) -> Box<dyn PageStore> {
    match LocalPageStore::open(prefix) {
        Some(store) => Box::new(store),
        None => {
            log::warn!(target: "App", "localStorage unavailable, caching pages in memory");
            Box::new(MemoryPageStore::with_prefix(prefix))
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = PagerStore::new(PagerState::new());
    let session = Session::new(HttpTaskSource::new(&config.base_url), open_cache(&config.storage_prefix));
    let ctx = AppContext::new(session, store, config.notice_timeout_ms);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial page load
    let base_url = config.base_url.clone();
    Effect::new(move |_| {
        log::info!(target: "App", "Loading current page from {}", base_url);
        spawn_local(async move {
            let _ = ctx.load().await;
        });
    });

    view! {
        <main class="todo-app">
            <h1>"TODO List"</h1>

            <NoticeBanner />

            <div class="toolbar">
                <NewTaskForm />
                <SearchBox />
            </div>

            <TaskTable />

            <Pager />
        </main>
    }
}
