//! UI Components
//!
//! Leptos components of the todo table and its controls.

mod delete_confirm_button;
mod new_task_form;
mod notice_banner;
mod pager;
mod search_box;
mod task_row;
mod task_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use new_task_form::NewTaskForm;
pub use notice_banner::NoticeBanner;
pub use pager::Pager;
pub use search_box::SearchBox;
pub use task_row::TaskRowView;
pub use task_table::TaskTable;
