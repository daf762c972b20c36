use reqwest::StatusCode;
use thiserror::Error;

/// Longest response body kept in a [`ContentError::Status`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to content API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("content API returned errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),
    #[error("content API response contained no data")]
    MissingData,
    #[error("failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("comment submission is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ContentError {
    pub(crate) fn status(status: StatusCode, body: &str) -> Self {
        let body = if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &body[..cut])
        } else {
            body.to_string()
        };
        Self::Status { status, body }
    }

    /// Whether the caller, rather than the backend, is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::MissingFields(_) | Self::GraphQL(_) => true,
            Self::Status { status, .. } => status.is_client_error(),
            _ => false,
        }
    }
}
