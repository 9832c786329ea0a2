//! Notice Banner Component

use leptos::prelude::*;
use todo_core::NoticeLevel;

use crate::store::{use_pager_store, PagerStateStoreFields};

/// Shows the latest notice until it expires
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_pager_store();

    move || {
        store.notice().get().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice info",
                NoticeLevel::Error => "notice error",
            };
            view! {
                <div class=class role="status">{notice.message}</div>
            }
        })
    }
}
