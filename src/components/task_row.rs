//! Task Row Component
//!
//! One table row with its delete and done actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{TaskRow, TaskStatus};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let completed = row.status == TaskStatus::Completed;

    view! {
        <tr class={if completed { "task-row completed" } else { "task-row" }}>
            <td>{id}</td>
            <td id={format!("todo-{}", id)}>{row.description}</td>
            <td>{row.owner_id}</td>
            <td>{row.status.label()}</td>
            <td class="task-actions">
                <DeleteConfirmButton
                    button_class="delete"
                    on_decision=move |confirmed: bool| {
                        if !confirmed {
                            log::debug!(target: "TaskRow", "Delete of task {} cancelled", id);
                            return;
                        }
                        spawn_local(async move {
                            let _ = ctx.delete(id, confirmed).await;
                        });
                    }
                />
                <button
                    class="done"
                    on:click=move |_| {
                        spawn_local(async move {
                            let _ = ctx.complete(id).await;
                        });
                    }
                >
                    "Done"
                </button>
            </td>
        </tr>
    }
}
