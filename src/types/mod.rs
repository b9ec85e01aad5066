use serde::{Deserialize, Serialize};

/// Body of a task creation request, built fresh for each submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskInput {
    pub name: String,
    pub deadline: String,
    pub urgency_score: i64,
    pub normalized_urgency: f64,
    pub dependencies: Vec<i64>,
}

/// One entry of a prioritization response. The server sends back the full
/// task record; only these three fields are rendered, the rest is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrioritizedTask {
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub status: String,
}

/// A stored task as returned by `GET /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    pub id: i64,
    pub name: String,
    pub deadline: String,
    pub urgency_score: i64,
    pub normalized_urgency: f64,
    pub status: String,
    #[serde(default)]
    pub dependencies: Vec<i64>,
}

/// Reply to task creation/update/deletion. A non-empty `message` is the
/// success signal; everything else is treated as a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateTaskResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl CreateTaskResponse {
    pub fn is_success(&self) -> bool {
        self.message.as_deref().map_or(false, |m| !m.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizeRequest {
    pub completed_ids: Vec<i64>,
}

/// Parse a comma separated dependency list ("1, 2,3") into task ids.
/// Entries that fail integer parsing are dropped with a warning rather
/// than aborting the submission.
pub fn parse_dependencies(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Skipping unparseable dependency id: {:?}", s);
                None
            }
        })
        .collect()
}
