use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Ground-truth label(s) for a prior detection.
///
/// The two shapes use different field names on the wire and the service
/// distinguishes them, so they are kept separate rather than collapsed into
/// a single-element list:
/// - `Single("spam")` → `{"ground_truth": "spam"}`
/// - `Labels(vec![...])` → `{"ground_truth_labels": [...]}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundTruth {
    Single(String),
    Labels(Vec<String>),
}

impl Serialize for GroundTruth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Single(label) => map.serialize_entry("ground_truth", label)?,
            Self::Labels(labels) => map.serialize_entry("ground_truth_labels", labels)?,
        }
        map.end()
    }
}

impl From<&str> for GroundTruth {
    fn from(label: &str) -> Self {
        Self::Single(label.to_string())
    }
}

impl From<String> for GroundTruth {
    fn from(label: String) -> Self {
        Self::Single(label)
    }
}

impl From<Vec<String>> for GroundTruth {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Vec<&str>> for GroundTruth {
    fn from(labels: Vec<&str>) -> Self {
        Self::Labels(labels.into_iter().map(str::to_string).collect())
    }
}

/// Result of a ground-truth submission.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub detection_id: String,
    #[serde(default)]
    pub updated_content_count: u64,
    /// Labels newly added to the project's label set by this submission.
    #[serde(default)]
    pub new_labels_added: Vec<String>,
}
