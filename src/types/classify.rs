use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::content::ContentItem;

/// Body of `POST /classify`.
///
/// Unset optional fields are omitted from the JSON; the service treats an
/// absent field differently from an empty one.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    pub content: Vec<ContentItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Result of a classification request.
///
/// Fields are lenient: anything the service omits deserializes to its
/// default rather than failing the call.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationResult {
    /// Score per label, each in `[0.0, 1.0]`.
    #[serde(default)]
    pub labels: HashMap<String, f64>,
    /// The top predicted label.
    #[serde(default)]
    pub label: String,
    /// Identifier for submitting ground-truth feedback later.
    #[serde(default)]
    pub detection_id: String,
    #[serde(default)]
    pub project_id: String,
    /// Labels the service actually classified against, in order.
    #[serde(default)]
    pub labels_used: Vec<String>,
    #[serde(default)]
    pub ground_truth_url: String,
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub processing_time_ms: f64,
}

impl ClassificationResult {
    /// Score for a specific label, if the service returned one.
    pub fn score(&self, label: &str) -> Option<f64> {
        self.labels.get(label).copied()
    }
}
