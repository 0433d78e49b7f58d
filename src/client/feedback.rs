use reqwest::Method;
use tracing::{debug, info};

use super::ClassifaiClient;
use super::error::ClassifaiError;
use super::response::map_response;
use crate::types::feedback::{FeedbackResult, GroundTruth};

impl ClassifaiClient {
    /// Submit ground-truth feedback for a prior classification.
    ///
    /// Accepts a single label or a list of labels; labels not yet in the
    /// project's label set are added to it. The two shapes are sent under
    /// different field names, see [`GroundTruth`].
    pub async fn submit_feedback(
        &self,
        detection_id: &str,
        ground_truth: impl Into<GroundTruth>,
    ) -> Result<FeedbackResult, ClassifaiError> {
        let request_body = ground_truth.into();
        info!("Submitting feedback for detection {detection_id}");

        let path = format!("/ground_truth/{detection_id}");
        debug!("POST {}{path}", self.config.base_url);
        let response = self
            .request(Method::POST, &path)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        map_response(status, &body)
    }
}
