pub mod types;

#[cfg(feature = "client")]
pub mod client;

// Re-export commonly used types at crate root
pub use types::classify::{ClassificationResult, ClassifyRequest};
pub use types::content::{Content, ContentItem};
pub use types::feedback::{FeedbackResult, GroundTruth};
pub use types::project::{HealthStatus, ProjectStats};

#[cfg(feature = "client")]
pub use client::{ClassifaiClient, ClassifaiError, ClassifyOptions, ClientConfig};
