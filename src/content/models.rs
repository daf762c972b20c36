use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// An uploaded asset (image) referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
}

/// A post author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo: Option<Asset>,
}

/// A category a post may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Rich text body of a post, kept as the raw AST the content API returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichContent {
    pub raw: serde_json::Value,
}

/// A blog post.
///
/// Different queries select different fields, so everything outside
/// `slug`, `title` and `createdAt` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured_image: Option<Asset>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<RichContent>,
}

impl Post {
    #[must_use]
    pub fn featured_image_url(&self) -> Option<&str> {
        self.featured_image.as_ref().map(|a| a.url.as_str())
    }

    /// Path of the post's detail page.
    #[must_use]
    pub fn path(&self) -> String {
        post_path(&self.slug)
    }

    /// Slugs of the categories this post belongs to.
    #[must_use]
    pub fn category_slugs(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.slug.clone()).collect()
    }

    #[must_use]
    pub fn has_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }
}

/// A comment left on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// The chronological neighbours of a post. Either side may be absent at the
/// ends of the timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacentPosts {
    pub next: Option<Post>,
    pub previous: Option<Post>,
}

/// Payload sent when a reader submits a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSubmission {
    /// Slug of the post being commented on.
    #[serde(default, alias = "postSlug")]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub comment: String,
}

impl CommentSubmission {
    /// Names of required fields that are empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.slug.trim().is_empty() {
            missing.push("slug");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.comment.trim().is_empty() {
            missing.push("comment");
        }
        missing
    }
}

/// Path of a post's detail page.
#[must_use]
pub fn post_path(slug: &str) -> String {
    format!("/post/{}", urlencoding::encode(slug))
}

/// Path of a category listing page.
#[must_use]
pub fn category_path(slug: &str) -> String {
    format!("/category/{}", urlencoding::encode(slug))
}

/// Deserialize an optional field, treating a malformed value as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient::<D, Vec<T>>(deserializer)?.unwrap_or_default())
}
