//! Task Table Component

use leptos::prelude::*;

use crate::components::TaskRowView;
use crate::store::{use_pager_store, PagerStateStoreFields};

/// Table of the rows currently displayed
#[component]
pub fn TaskTable() -> impl IntoView {
    let store = use_pager_store();

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Task"</th>
                    <th>"User"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="todo-table">
                // Keyed by position too: the server may hand out a repeated id
                <For
                    each=move || store.rows().get().into_iter().enumerate()
                    key=|(index, row)| (*index, row.clone())
                    children=move |(_, row)| view! { <TaskRowView row=row /> }
                />
            </tbody>
        </table>
    }
}
