use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Aggregate statistics for a project, based on classifications and
/// ground-truth feedback. Read-only snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Number of classification requests.
    #[serde(default)]
    pub total_classifications: u64,
    /// Total content items across all requests.
    #[serde(default)]
    pub total_content_items_classified: u64,
    #[serde(default)]
    pub total_feedback_received: u64,
    /// Accuracy against ground truth, in `[0.0, 1.0]`.
    #[serde(default)]
    pub accuracy_rate: f64,
    /// Count of predicted labels.
    #[serde(default)]
    pub label_distribution: HashMap<String, u64>,
    /// Count of ground-truth labels.
    #[serde(default)]
    pub ground_truth_distribution: HashMap<String, u64>,
    /// Content types seen in this project ("text", "image").
    #[serde(default)]
    pub content_types_used: Vec<String>,
    /// Current project label set.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Whether the label set was inferred from a description.
    #[serde(default)]
    pub inferred_labels: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_used_at: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    /// Timestamp as the service sends it (numeric or string).
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
