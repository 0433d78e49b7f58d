use reqwest::Method;
use tracing::debug;

use super::ClassifaiClient;
use super::error::ClassifaiError;
use super::response::map_response;
use crate::types::project::{HealthStatus, ProjectStats};

impl ClassifaiClient {
    /// Get accuracy and usage statistics for a project.
    ///
    /// Requires ownership of the project (same API key or IP).
    pub async fn get_project_stats(
        &self,
        project_id: &str,
    ) -> Result<ProjectStats, ClassifaiError> {
        let path = format!("/projects/{project_id}/stats");
        debug!("GET {}{path}", self.config.base_url);
        let response = self.request(Method::GET, &path).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        map_response(status, &body)
    }

    /// Check API health.
    pub async fn health_check(&self) -> Result<HealthStatus, ClassifaiError> {
        debug!("GET {}/health", self.config.base_url);
        let response = self.request(Method::GET, "/health").send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        map_response(status, &body)
    }
}
