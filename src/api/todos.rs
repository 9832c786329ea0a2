//! Todo Endpoints
//!
//! `reqwest` client for the paged todo API:
//! - `GET /todos?skip=N`
//! - `POST /todos/add`
//! - `DELETE /todos/{id}`
//! - `PATCH /todos/{id}`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use todo_core::{NewTask, Task, TaskPage, TaskSource, TodoError, TodoResult};

#[derive(Serialize)]
struct CompleteArgs {
    completed: bool,
}

// ========================
// URLs
// ========================

pub fn list_url(base_url: &str, skip: usize) -> String {
    format!("{}/todos?skip={}", base_url, skip)
}

pub fn add_url(base_url: &str) -> String {
    format!("{}/todos/add", base_url)
}

pub fn todo_url(base_url: &str, id: u32) -> String {
    format!("{}/todos/{}", base_url, id)
}

// ========================
// Source
// ========================

pub struct HttpTaskSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Send a request and map transport and status failures
    async fn send(&self, request: reqwest::RequestBuilder) -> TodoResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| TodoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TodoError::Server { status: status.as_u16(), message });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> TodoResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| TodoError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TaskSource for HttpTaskSource {
    async fn list(&self, skip: usize) -> TodoResult<TaskPage> {
        self.send_json(self.client.get(list_url(&self.base_url, skip))).await
    }

    async fn create(&self, task: &NewTask) -> TodoResult<Task> {
        self.send_json(self.client.post(add_url(&self.base_url)).json(task)).await
    }

    async fn delete(&self, id: u32) -> TodoResult<()> {
        self.send(self.client.delete(todo_url(&self.base_url, id))).await?;
        Ok(())
    }

    async fn complete(&self, id: u32) -> TodoResult<Task> {
        let request = self
            .client
            .patch(todo_url(&self.base_url, id))
            .json(&CompleteArgs { completed: true });
        self.send_json(request).await
    }
}
