//! In-memory Page Store
//!
//! Holds entries as JSON strings so it behaves like browser storage,
//! including on corrupt values.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{Task, TodoResult};
use super::{page_key, total_key, PageStore, DEFAULT_PAGE_PREFIX};

#[derive(Debug)]
pub struct MemoryPageStore {
    prefix: String,
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PAGE_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Raw stored value for `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store a raw value under `key`, bypassing encoding
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for MemoryPageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore for MemoryPageStore {
    fn get(&self, page: usize) -> TodoResult<Option<Vec<Task>>> {
        match self.raw(&page_key(&self.prefix, page)) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put(&self, page: usize, tasks: &[Task]) -> TodoResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.insert_raw(&page_key(&self.prefix, page), &json);
        Ok(())
    }

    fn remove(&self, page: usize) -> TodoResult<()> {
        self.entries.borrow_mut().remove(&page_key(&self.prefix, page));
        Ok(())
    }

    fn get_total(&self) -> TodoResult<Option<usize>> {
        match self.raw(&total_key(&self.prefix)) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put_total(&self, total: usize) -> TodoResult<()> {
        self.insert_raw(&total_key(&self.prefix), &total.to_string());
        Ok(())
    }
}
