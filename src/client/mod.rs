use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::types::{CreateTaskResponse, PrioritizeRequest, PrioritizedTask, TaskInput, TaskRecord};
use crate::{Error, Result};

/// A prioritization response together with the epoch of the call that
/// produced it. The epoch lets a view drop responses from calls that were
/// superseded while in flight.
#[derive(Debug, Clone)]
pub struct PrioritizeCall {
    pub epoch: u64,
    pub tasks: Vec<PrioritizedTask>,
}

/// HTTP client for the task prioritization server.
#[derive(Clone)]
pub struct TaskApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    prioritize_epoch: Arc<AtomicU64>,
}

impl TaskApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            prioritize_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Submit a new task. One attempt, no retry. The reply body is parsed
    /// as JSON whatever the status code; callers decide what a missing
    /// `message` means.
    pub async fn create_task(&self, task: &TaskInput) -> Result<CreateTaskResponse> {
        tracing::debug!("POST /tasks: {:?}", task);
        let response = self
            .http
            .post(self.config.endpoint("tasks"))
            .json(task)
            .send()
            .await?;
        Ok(response.json::<CreateTaskResponse>().await?)
    }

    /// Fetch every stored task.
    pub async fn get_tasks(&self) -> Result<Vec<TaskRecord>> {
        let response = self.http.get(self.config.endpoint("tasks")).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status { code: status.as_u16(), body });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Update an existing task.
    pub async fn update_task(&self, id: i64, task: &TaskInput) -> Result<CreateTaskResponse> {
        let response = self
            .http
            .put(self.config.endpoint(&format!("tasks/{}", id)))
            .json(task)
            .send()
            .await?;
        Ok(response.json::<CreateTaskResponse>().await?)
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: i64) -> Result<CreateTaskResponse> {
        let response = self
            .http
            .delete(self.config.endpoint(&format!("tasks/{}", id)))
            .send()
            .await?;
        Ok(response.json::<CreateTaskResponse>().await?)
    }

    /// Ask the server for a ranked task list. `completed_ids` names the
    /// tasks whose dependents may now be unblocked; the returned order is
    /// the server's, the client never re-sorts.
    ///
    /// Each call gets a fresh epoch before the request goes out, so a view
    /// can tell a superseded call's response from the latest one.
    pub async fn prioritize(&self, completed_ids: &[i64]) -> Result<PrioritizeCall> {
        let epoch = self.prioritize_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let request = PrioritizeRequest {
            completed_ids: completed_ids.to_vec(),
        };
        tracing::debug!("POST /tasks/prioritize (epoch {}): {:?}", epoch, request);

        let response = self
            .http
            .post(self.config.endpoint("tasks/prioritize"))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status { code: status.as_u16(), body });
        }
        let tasks: Vec<PrioritizedTask> = serde_json::from_str(&body)?;
        Ok(PrioritizeCall { epoch, tasks })
    }
}

#[cfg(test)]
mod tests;
