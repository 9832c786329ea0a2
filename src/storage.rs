//! Browser Page Store
//!
//! Page cache persisted in `localStorage`, one JSON array per page under
//! `<prefix><page>`.

use todo_core::{page_key, total_key, PageStore, Task, TodoError, TodoResult};
use web_sys::Storage;

pub struct LocalPageStore {
    storage: Storage,
    prefix: String,
}

impl LocalPageStore {
    /// `None` when the browser denies access to `localStorage`
    pub fn open(prefix: &str) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage, prefix: prefix.to_string() })
    }

    fn read(&self, key: &str) -> TodoResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| TodoError::Storage(format!("read {}: {:?}", key, e)))
    }

    fn write(&self, key: &str, value: &str) -> TodoResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(format!("write {}: {:?}", key, e)))
    }
}

impl PageStore for LocalPageStore {
    fn get(&self, page: usize) -> TodoResult<Option<Vec<Task>>> {
        match self.read(&page_key(&self.prefix, page))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put(&self, page: usize, tasks: &[Task]) -> TodoResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.write(&page_key(&self.prefix, page), &json)
    }

    fn remove(&self, page: usize) -> TodoResult<()> {
        let key = page_key(&self.prefix, page);
        self.storage
            .remove_item(&key)
            .map_err(|e| TodoError::Storage(format!("remove {}: {:?}", key, e)))
    }

    fn get_total(&self) -> TodoResult<Option<usize>> {
        match self.read(&total_key(&self.prefix))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put_total(&self, total: usize) -> TodoResult<()> {
        self.write(&total_key(&self.prefix), &total.to_string())
    }
}
