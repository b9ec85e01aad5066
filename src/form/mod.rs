use crate::client::TaskApiClient;
use crate::notify::{Notice, NoticeIcon, Notifier};
use crate::types::{parse_dependencies, TaskInput};

/// Raw values of the five task intake fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub deadline: String,
    pub urgency: String,
    pub normalized_urgency: String,
    pub dependencies: String,
}

impl TaskForm {
    /// Build the request body. Parsing stays lenient: a numeric field that
    /// fails to parse falls back to zero with a warning, and bad dependency
    /// entries are dropped. Nothing aborts the submission.
    pub fn parse(&self) -> TaskInput {
        let urgency_score = self.urgency.trim().parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!("Unparseable urgency {:?}, defaulting to 0", self.urgency);
            0
        });
        let normalized_urgency = self.normalized_urgency.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(
                "Unparseable normalized urgency {:?}, defaulting to 0.0",
                self.normalized_urgency
            );
            0.0
        });
        TaskInput {
            name: self.name.clone(),
            deadline: self.deadline.clone(),
            urgency_score,
            normalized_urgency,
            dependencies: parse_dependencies(&self.dependencies),
        }
    }

    /// Clear every field after a successful submit.
    pub fn reset(&mut self) {
        self.name.clear();
        self.deadline.clear();
        self.urgency.clear();
        self.normalized_urgency.clear();
        self.dependencies.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server confirmed the task; the form was reset.
    Created,
    /// Server replied without a message; no notification, form untouched.
    Silent,
    /// Request or decode failed; error was notified and logged.
    Failed,
}

/// The submit handler: one attempt, outcome surfaced through the notifier.
/// Errors never propagate out of here, a failed submission is terminal for
/// that action and the user retries by submitting again.
pub async fn submit(
    client: &TaskApiClient,
    notifier: &dyn Notifier,
    form: &mut TaskForm,
) -> SubmitOutcome {
    let task = form.parse();
    match client.create_task(&task).await {
        Ok(response) if response.is_success() => {
            notifier
                .success(Notice::new(
                    "Task Added!",
                    "Your task was added successfully.",
                    NoticeIcon::Success,
                    "Cool",
                ))
                .await;
            form.reset();
            SubmitOutcome::Created
        }
        Ok(_) => SubmitOutcome::Silent,
        Err(e) => {
            notifier
                .error(Notice::new(
                    "Error!",
                    "Something went wrong.",
                    NoticeIcon::Error,
                    "Try Again",
                ))
                .await;
            tracing::error!("Error: {}", e);
            SubmitOutcome::Failed
        }
    }
}
