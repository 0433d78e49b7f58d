use reqwest::Method;
use tracing::{debug, info};

use super::ClassifaiClient;
use super::error::ClassifaiError;
use super::response::map_response;
use crate::types::classify::{ClassificationResult, ClassifyRequest};
use crate::types::content::Content;

/// Options for a classification request.
///
/// The service expects at least one of `labels` (2–50 entries),
/// `description` (≤500 chars, used to infer labels), or `project_id`
/// (reuses the project's label set); none of that is validated locally.
#[derive(Default)]
pub struct ClassifyOptions<'a> {
    pub labels: Option<&'a [String]>,
    pub description: Option<&'a str>,
    pub project_id: Option<&'a str>,
}

impl<'a> ClassifyOptions<'a> {
    pub fn labels(labels: &'a [String]) -> Self {
        Self {
            labels: Some(labels),
            ..Self::default()
        }
    }

    pub fn description(description: &'a str) -> Self {
        Self {
            description: Some(description),
            ..Self::default()
        }
    }

    pub fn project(project_id: &'a str) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::default()
        }
    }
}

impl ClassifaiClient {
    /// Classify content into labels.
    ///
    /// Accepts a single string, a list of strings, or pre-formed
    /// [`crate::ContentItem`]s; see [`Content`] for how strings are
    /// detected as text, file paths, or URLs. All items are analyzed
    /// jointly and produce a single result.
    pub async fn classify(
        &self,
        content: impl Into<Content>,
        options: ClassifyOptions<'_>,
    ) -> Result<ClassificationResult, ClassifaiError> {
        let content = self.normalize_content(content.into()).await?;
        info!(
            "Classifying {} content item(s) (labels: {})",
            content.len(),
            options.labels.map_or(0, <[String]>::len)
        );

        let request_body = ClassifyRequest {
            content,
            labels: options.labels.map(<[String]>::to_vec),
            description: options.description.map(str::to_string),
            project_id: options.project_id.map(str::to_string),
        };

        debug!("POST {}/classify", self.config.base_url);
        let response = self
            .request(Method::POST, "/classify")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        map_response(status, &body)
    }
}
