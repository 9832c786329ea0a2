//! Pager Component
//!
//! Previous/next buttons with page and count labels.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{use_pager_store, PagerStateStoreFields};

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_pager_store();

    view! {
        <footer class="pager">
            <button
                id="prev-btn"
                prop:disabled=move || !store.previous_enabled().get()
                on:click=move |_| {
                    spawn_local(async move {
                        let _ = ctx.previous_page().await;
                    });
                }
            >
                "Previous"
            </button>
            <span class="page-label">
                "Page " <span id="current-page">{move || store.current_page().get()}</span>
                " of " <span id="total-pages">{move || store.total_pages().get()}</span>
            </span>
            <button
                id="next-btn"
                prop:disabled=move || !store.next_enabled().get()
                on:click=move |_| {
                    spawn_local(async move {
                        let _ = ctx.next_page().await;
                    });
                }
            >
                "Next"
            </button>
            <span class="task-count">
                "Total tasks: " <span id="task-count">{move || store.total_items().get()}</span>
            </span>
        </footer>
    }
}
