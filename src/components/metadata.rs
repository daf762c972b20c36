//! Open Graph metadata and small text formatting helpers.

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::content::Post;

/// Longest description placed in preview metadata.
const MAX_DESCRIPTION_LEN: usize = 200;

/// Open Graph metadata for social media previews.
///
/// Generates both Open Graph and Twitter Card meta tags.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    /// Page title (og:title)
    pub title: String,
    /// Page description (og:description)
    pub description: String,
    /// Open Graph type (og:type) - e.g., "website", "article"
    pub og_type: String,
    /// Image URL (og:image)
    pub image: Option<String>,
    /// Site name (og:site_name)
    pub site_name: String,
}

impl OpenGraphMetadata {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            og_type: "website".to_string(),
            image: None,
            site_name: String::new(),
        }
    }

    /// Article metadata for a post's detail page.
    #[must_use]
    pub fn for_post(post: &Post, site_name: &str) -> Self {
        let description = post
            .excerpt
            .as_deref()
            .map(|e| truncate_text(e, MAX_DESCRIPTION_LEN))
            .unwrap_or_default();

        Self::new(&post.title, description)
            .with_type("article")
            .with_image(post.featured_image_url())
            .with_site_name(site_name)
    }

    #[must_use]
    pub fn with_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = og_type.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = image.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Render the metadata tags.
    pub fn render(&self) -> Markup {
        let twitter_card = if self.image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };

        html! {
            meta property="og:title" content=(&self.title);
            meta property="og:description" content=(&self.description);
            meta property="og:type" content=(&self.og_type);
            @if !self.site_name.is_empty() {
                meta property="og:site_name" content=(&self.site_name);
            }
            @if let Some(ref image_url) = self.image {
                meta property="og:image" content=(image_url);
            }

            meta name="twitter:card" content=(twitter_card);
            meta name="twitter:title" content=(&self.title);
            meta name="twitter:description" content=(&self.description);
            @if let Some(ref image_url) = self.image {
                meta name="twitter:image" content=(image_url);
            }

            meta name="description" content=(&self.description);
        }
    }
}

/// Helper to truncate text to a maximum number of characters with ellipsis.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let mut truncated = text
            .chars()
            .take(max_len.saturating_sub(3))
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// Format a timestamp the way post lists show it, e.g. `Mar 01, 2024`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y").to_string()
}
