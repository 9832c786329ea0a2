//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

/// Text input and Add button; the input clears unless it was rejected
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();

        spawn_local(async move {
            let rejected = matches!(ctx.add(text).await, Err(ref e) if e.is_validation());
            if !rejected {
                set_new_text.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                id="new-task"
                placeholder="Add new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
