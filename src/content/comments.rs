//! Comment submission endpoint client.
//!
//! Comments are posted as JSON to the comment endpoint (by default this
//! server's own `/api/comments`). The endpoint decides whether a comment is
//! accepted; the client only checks that required fields are present.

use serde_json::Value;
use tracing::{debug, info};

use super::{CommentSubmission, ContentError};
use crate::config::{Config, Endpoint};

#[derive(Clone)]
pub struct CommentsApi {
    http: reqwest::Client,
    url: Endpoint,
}

impl CommentsApi {
    /// Create a comment client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self::with_http(http, config.comments_api_url.clone()))
    }

    #[must_use]
    pub fn with_http(http: reqwest::Client, url: Endpoint) -> Self {
        Self { http, url }
    }

    /// Submit a comment and return the endpoint's parsed JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the request fails,
    /// the endpoint answers with a non-success status, or the body is not JSON.
    pub async fn submit_comment(&self, submission: &CommentSubmission) -> Result<Value, ContentError> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(ContentError::MissingFields(missing));
        }

        debug!(url = %self.url, slug = %submission.slug, "Submitting comment");

        let response = self
            .http
            .post(self.url.url().clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ContentError::status(status, &body));
        }

        let parsed = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)?
        };

        info!(slug = %submission.slug, "Comment submitted");
        Ok(parsed)
    }
}
