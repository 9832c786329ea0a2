//! Search Box Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Filters the loaded page as the user types
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <input
            type="search"
            id="search-tasks"
            class="search-box"
            placeholder="Search tasks..."
            on:input=move |ev| ctx.search(&event_target_value(&ev))
        />
    }
}
