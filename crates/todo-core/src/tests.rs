//! Session Integration Tests
//!
//! Session driven against a recording in-memory task source.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::domain::{NewTask, Task, TaskPage, TodoError, TodoResult};
use crate::repository::{MemoryPageStore, PageStore, TaskSource};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List(usize),
    Create(NewTask),
    Delete(u32),
    Complete(u32),
}

/// Serves pages out of a fixed list of tasks
struct FakeSource {
    tasks: RefCell<Vec<Task>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    fail_with: RefCell<Option<TodoError>>,
    complete_refused: bool,
}

impl FakeSource {
    fn with_tasks(count: u32) -> Self {
        Self {
            tasks: RefCell::new((1..=count).map(|id| task(id, &format!("Task {}", id))).collect()),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(count + 1),
            fail_with: RefCell::new(None),
            complete_refused: false,
        }
    }

    fn failing(self, err: TodoError) -> Self {
        *self.fail_with.borrow_mut() = Some(err);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self) -> TodoResult<()> {
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TaskSource for FakeSource {
    async fn list(&self, skip: usize) -> TodoResult<TaskPage> {
        self.calls.borrow_mut().push(Call::List(skip));
        self.check()?;
        let tasks = self.tasks.borrow();
        Ok(TaskPage {
            todos: tasks.iter().skip(skip).take(30).cloned().collect(),
            total: tasks.len(),
        })
    }

    async fn create(&self, new_task: &NewTask) -> TodoResult<Task> {
        self.calls.borrow_mut().push(Call::Create(new_task.clone()));
        self.check()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(Task {
            id,
            description: new_task.todo.clone(),
            completed: new_task.completed,
            owner_id: new_task.user_id,
        })
    }

    async fn delete(&self, id: u32) -> TodoResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.check()
    }

    async fn complete(&self, id: u32) -> TodoResult<Task> {
        self.calls.borrow_mut().push(Call::Complete(id));
        self.check()?;
        let mut updated = task(id, "Updated on server");
        updated.completed = !self.complete_refused;
        Ok(updated)
    }
}

fn task(id: u32, description: &str) -> Task {
    Task { id, description: description.to_string(), completed: false, owner_id: 1 }
}

fn setup(count: u32) -> Session<FakeSource, MemoryPageStore> {
    Session::new(FakeSource::with_tasks(count), MemoryPageStore::new())
}

fn ids(tasks: &[Task]) -> Vec<u32> {
    tasks.iter().map(|t| t.id).collect()
}

// ========================
// Page load
// ========================

#[tokio::test]
async fn test_first_load_fetches_and_caches() {
    let session = setup(65);

    let view = session.load().await.expect("load failed");

    assert_eq!(session.source().calls(), vec![Call::List(0)]);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_items, 65);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.tasks.len(), 30);
    assert_eq!(view.rows.len(), 30);
    assert!(!view.previous_enabled);
    assert!(view.next_enabled);
    assert_eq!(session.cache().get(1).unwrap(), Some(view.tasks.clone()));
    assert_eq!(session.cache().get_total().unwrap(), Some(65));
}

#[tokio::test]
async fn test_cache_hit_skips_network() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(100, "Cached")]).unwrap();
    cache.put_total(65).unwrap();
    let session = Session::new(FakeSource::with_tasks(65), cache);

    let view = session.load().await.unwrap();

    assert!(session.source().calls().is_empty());
    assert_eq!(ids(&view.tasks), vec![100]);
    assert_eq!(view.total_items, 65);
    assert!(view.next_enabled);
}

#[tokio::test]
async fn test_corrupt_cache_is_refetched() {
    let cache = MemoryPageStore::new();
    cache.insert_raw("todos-page-1", "[{broken");
    let session = Session::new(FakeSource::with_tasks(3), cache);

    let view = session.load().await.unwrap();

    assert_eq!(session.source().calls(), vec![Call::List(0)]);
    assert_eq!(ids(&view.tasks), vec![1, 2, 3]);
    assert_eq!(session.cache().get(1).unwrap().unwrap().len(), 3);
}

#[tokio::test]
async fn test_load_network_error_leaves_state() {
    let session = Session::new(
        FakeSource::with_tasks(10).failing(TodoError::Network("offline".into())),
        MemoryPageStore::new(),
    );

    let err = session.load().await.unwrap_err();

    assert_eq!(err, TodoError::Network("offline".into()));
    assert!(session.cache().is_empty());
    assert!(session.view().tasks.is_empty());
}

// ========================
// Navigation
// ========================

#[tokio::test]
async fn test_navigate_to_last_page() {
    let session = setup(65);
    session.load().await.unwrap();

    let page2 = session.next_page().await.unwrap().expect("page 2");
    let page3 = session.next_page().await.unwrap().expect("page 3");

    assert_eq!(page2.current_page, 2);
    assert_eq!(page3.current_page, 3);
    assert_eq!(ids(&page3.tasks), (61..=65).collect::<Vec<_>>());
    assert!(!page3.next_enabled);
    assert!(page3.previous_enabled);
    assert_eq!(session.source().calls(), vec![Call::List(0), Call::List(30), Call::List(60)]);

    assert!(session.next_page().await.unwrap().is_none());
    assert_eq!(session.source().calls().len(), 3);
}

#[tokio::test]
async fn test_back_navigation_uses_cache() {
    let session = setup(65);
    session.load().await.unwrap();
    session.next_page().await.unwrap();

    let back = session.previous_page().await.unwrap().expect("page 1");

    assert_eq!(back.current_page, 1);
    assert_eq!(back.tasks, session.cache().get(1).unwrap().unwrap());
    assert_eq!(session.source().calls(), vec![Call::List(0), Call::List(30)]);
    assert!(session.previous_page().await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_page_turn_keeps_page() {
    let session = setup(65);
    session.load().await.unwrap();
    *session.source().fail_with.borrow_mut() = Some(TodoError::Server { status: 503, message: "down".into() });

    assert!(session.next_page().await.is_err());

    let view = session.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(ids(&view.tasks), (1..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_restored_total_allows_navigation_from_cache() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(1, "a")]).unwrap();
    cache.put_total(65).unwrap();
    let session = Session::new(FakeSource::with_tasks(65), cache);

    session.load().await.unwrap();
    let page2 = session.next_page().await.unwrap().expect("page 2");

    assert_eq!(page2.current_page, 2);
    assert_eq!(session.source().calls(), vec![Call::List(30)]);
}

// ========================
// Mutations
// ========================

#[tokio::test]
async fn test_add_appends_to_current_page() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[]).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();
    let before = session.view().total_items;

    let view = session.add("Buy milk").await.expect("add failed");

    assert_eq!(
        session.cache().raw("todos-page-1").unwrap(),
        r#"[{"id":1,"todo":"Buy milk","completed":false,"userId":1}]"#
    );
    assert_eq!(view.total_items, before + 1);
    assert_eq!(ids(&view.tasks), vec![1]);
    assert_eq!(
        session.source().calls(),
        vec![Call::Create(NewTask { todo: "Buy milk".into(), completed: false, user_id: 1 })]
    );
}

#[tokio::test]
async fn test_add_lands_on_viewed_page() {
    let session = setup(65);
    session.load().await.unwrap();
    session.next_page().await.unwrap();

    let view = session.add("Late task").await.unwrap();

    assert_eq!(view.current_page, 2);
    assert_eq!(view.tasks.len(), 31);
    assert_eq!(view.tasks.last().unwrap().description, "Late task");
    assert_eq!(session.cache().get(1).unwrap().unwrap().len(), 30);
    assert_eq!(view.total_items, 66);
}

#[tokio::test]
async fn test_add_blank_is_rejected_without_network() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(3, "keep")]).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let err = session.add("   ").await.unwrap_err();

    assert!(err.is_validation());
    assert!(session.source().calls().is_empty());
    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(3, "keep")]));
    assert_eq!(session.view().total_items, 0);
}

#[tokio::test]
async fn test_add_without_cache_entry_starts_empty() {
    let session = setup(0);

    let view = session.add("First").await.unwrap();

    assert_eq!(ids(&view.tasks), vec![1]);
    assert_eq!(session.cache().get(1).unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_filters_task() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(7, "seven"), task(9, "nine")]).unwrap();
    cache.put_total(2).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let view = session.delete(7, &true).await.unwrap().expect("not cancelled");

    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(9, "nine")]));
    assert_eq!(view.total_items, 1);
    assert_eq!(ids(&view.tasks), vec![9]);
    assert_eq!(session.source().calls(), vec![Call::Delete(7)]);
}

#[tokio::test]
async fn test_delete_cancelled_has_no_effect() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(7, "seven")]).unwrap();
    cache.put_total(1).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let asked = RefCell::new(None);
    let decline = |message: &str| {
        *asked.borrow_mut() = Some(message.to_string());
        false
    };
    let outcome = session.delete(7, &decline).await.unwrap();

    assert!(outcome.is_none());
    assert_eq!(asked.borrow().as_deref(), Some(crate::DELETE_PROMPT));
    assert!(session.source().calls().is_empty());
    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(7, "seven")]));
    assert_eq!(session.view().total_items, 1);
}

#[tokio::test]
async fn test_delete_server_error_leaves_cache() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(7, "seven")]).unwrap();
    cache.put_total(1).unwrap();
    let session = Session::new(
        FakeSource::with_tasks(0).failing(TodoError::Server { status: 404, message: "missing".into() }),
        cache,
    );
    session.load().await.unwrap();

    assert!(session.delete(7, &true).await.is_err());
    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(7, "seven")]));
    assert_eq!(session.view().total_items, 1);
}

#[tokio::test]
async fn test_complete_replaces_record() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(4, "four"), task(5, "five")]).unwrap();
    cache.put_total(2).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let view = session.complete(5).await.unwrap();

    let cached = session.cache().get(1).unwrap().unwrap();
    assert_eq!(cached[0], task(4, "four"));
    assert_eq!(cached[1].description, "Updated on server");
    assert!(cached[1].completed);
    assert_eq!(view.total_items, 2);
    assert_eq!(view.rows[1].status.label(), "Completed");
}

#[tokio::test]
async fn test_complete_refused_by_server() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(4, "four")]).unwrap();
    let mut source = FakeSource::with_tasks(0);
    source.complete_refused = true;
    let session = Session::new(source, cache);
    session.load().await.unwrap();

    let err = session.complete(4).await.unwrap_err();

    assert!(matches!(err, TodoError::Server { .. }));
    assert!(!session.cache().get(1).unwrap().unwrap()[0].completed);
}

#[tokio::test]
async fn test_complete_replaces_every_repeated_id() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(255, "a"), task(8, "eight"), task(255, "b")]).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let view = session.complete(255).await.unwrap();

    let completed: Vec<bool> = session.cache().get(1).unwrap().unwrap().iter().map(|t| t.completed).collect();
    assert_eq!(completed, vec![true, false, true]);
    assert_eq!(ids(&view.tasks), vec![255, 8, 255]);
}

#[tokio::test]
async fn test_add_network_error_leaves_cache() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(3, "three")]).unwrap();
    cache.put_total(1).unwrap();
    let session = Session::new(
        FakeSource::with_tasks(0).failing(TodoError::Network("offline".into())),
        cache,
    );
    session.load().await.unwrap();

    let err = session.add("Buy milk").await.unwrap_err();

    assert_eq!(err, TodoError::Network("offline".into()));
    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(3, "three")]));
    let view = session.view();
    assert_eq!(view.total_items, 1);
    assert_eq!(ids(&view.tasks), vec![3]);
}

#[tokio::test]
async fn test_complete_network_error_leaves_cache() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(4, "four"), task(5, "five")]).unwrap();
    cache.put_total(2).unwrap();
    let session = Session::new(
        FakeSource::with_tasks(0).failing(TodoError::Network("offline".into())),
        cache,
    );
    session.load().await.unwrap();

    let err = session.complete(5).await.unwrap_err();

    assert_eq!(err, TodoError::Network("offline".into()));
    assert_eq!(session.cache().get(1).unwrap(), Some(vec![task(4, "four"), task(5, "five")]));
    let view = session.view();
    assert_eq!(view.total_items, 2);
    assert_eq!(ids(&view.tasks), vec![4, 5]);
    assert!(view.tasks.iter().all(|t| !t.completed));
}

// ========================
// Search
// ========================

#[tokio::test]
async fn test_search_is_view_only() {
    let cache = MemoryPageStore::new();
    cache.put(1, &[task(1, "Buy milk"), task(2, "Walk dog")]).unwrap();
    cache.put_total(2).unwrap();
    let session = Session::new(FakeSource::with_tasks(0), cache);
    session.load().await.unwrap();

    let first = session.search("MILK");
    let second = session.search("MILK");

    assert_eq!(ids(&first.tasks), vec![1]);
    assert_eq!(first, second);
    assert_eq!(session.cache().get(1).unwrap().unwrap().len(), 2);
    assert_eq!(first.total_items, 2);
    assert_eq!(first.current_page, 1);

    let cleared = session.search("");
    assert_eq!(ids(&cleared.tasks), vec![1, 2]);
}

#[tokio::test]
async fn test_search_sees_mutated_page() {
    let session = setup(2);
    session.load().await.unwrap();
    session.add("Buy milk").await.unwrap();

    let view = session.search("milk");

    assert_eq!(ids(&view.tasks), vec![3]);
}

#[tokio::test]
async fn test_navigation_replaces_search_results() {
    let session = setup(65);
    session.load().await.unwrap();
    assert!(session.search("zzz").tasks.is_empty());

    let page2 = session.next_page().await.unwrap().unwrap();

    assert_eq!(page2.tasks.len(), 30);
}
