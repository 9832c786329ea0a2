//! Search Filter
//!
//! View-only filter over the tasks loaded for the current page.

use crate::domain::Task;
use crate::pagination::ITEMS_PER_PAGE;

/// Case-insensitive substring match on description, capped at one page.
/// A blank query yields the tasks unfiltered.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| query.is_empty() || task.description.to_lowercase().contains(&query))
        .take(ITEMS_PER_PAGE)
        .cloned()
        .collect()
}
