//! Delete Confirm Button Component
//!
//! Two-stage delete control: "Delete" arms it, then ✓ or ✗ answers the
//! delete prompt.

use leptos::prelude::*;
use todo_core::DELETE_PROMPT;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Idle,
    Asking,
}

/// Inline delete confirmation
///
/// `on_decision` receives the answer: `true` for ✓, `false` for ✗.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_decision: Callback<bool>,
) -> impl IntoView {
    let (stage, set_stage) = signal(Stage::Idle);

    let answer = move |confirmed: bool| {
        set_stage.set(Stage::Idle);
        on_decision.run(confirmed);
    };

    move || match stage.get() {
        Stage::Idle => view! {
            <button class=button_class.clone() on:click=move |_| set_stage.set(Stage::Asking)>
                "Delete"
            </button>
        }
        .into_any(),
        Stage::Asking => view! {
            <span class="delete-confirm" title=DELETE_PROMPT>
                "Delete? "
                <button class="confirm-btn" on:click=move |_| answer(true)>"✓"</button>
                <button class="cancel-btn" on:click=move |_| answer(false)>"✗"</button>
            </span>
        }
        .into_any(),
    }
}
