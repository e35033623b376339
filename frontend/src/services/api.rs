use gloo::net::http::Request;
use shared::{FeedbackClient, FeedbackRequest, SubmissionError};

/// Backend used when no `API_BASE_URL` was set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(configured_base_url().to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn feedback_url(&self) -> String {
        format!("{}/feedback/", self.base_url)
    }

    /// Submit user feedback. Any 2xx counts as success; the body is ignored.
    pub async fn post_feedback(&self, request: &FeedbackRequest) -> Result<(), SubmissionError> {
        match Request::post(&self.feedback_url())
            .json(request)
            .map_err(|e| SubmissionError::Serialize(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(SubmissionError::Server { status, body })
                }
            }
            Err(e) => Err(SubmissionError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackClient for ApiClient {
    async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<(), SubmissionError> {
        self.post_feedback(request).await
    }
}

/// Base URL baked in at build time, falling back to the local dev server
pub fn configured_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}
