//! Client for the headless GraphQL content API.
//!
//! Every operation is a single, uncached round trip. Read operations never
//! fail: a transport, status or decode error is logged and the read yields
//! [`Fetched::Unavailable`], which pages render as an empty section. Write
//! operations return the error so the caller can report it to the reader.

pub mod comments;
mod error;
mod models;
pub mod queries;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

pub use comments::CommentsApi;
pub use error::ContentError;
pub use models::{
    category_path, post_path, AdjacentPosts, Asset, Author, Category, Comment, CommentSubmission,
    Post, RichContent,
};

use crate::config::{Config, Endpoint};

/// Most posts the recent and similar post queries return.
pub const WIDGET_POST_LIMIT: usize = 3;

/// Outcome of a read operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The content API answered.
    Data(T),
    /// The fetch failed; the failure has already been logged.
    Unavailable,
}

impl<T> Fetched<T> {
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    #[must_use]
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Unavailable => None,
        }
    }
}

impl<T: Default> Fetched<T> {
    /// The fetched data, or the empty value of `T` if the fetch failed.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQLErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostsConnectionData {
    posts_connection: Connection,
}

#[derive(Debug, Deserialize)]
struct Connection {
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    node: Post,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    #[serde(default)]
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct PostData {
    post: Option<Post>,
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct AdjacentData {
    #[serde(default)]
    next: Vec<Post>,
    #[serde(default)]
    previous: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct CommentsData {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommentData {
    create_comment: CreatedComment,
}

#[derive(Debug, Deserialize)]
struct CreatedComment {
    id: String,
}

/// GraphQL client bound to one validated content endpoint.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    token: Option<String>,
}

impl ContentClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http(
            http,
            config.graphcms_endpoint.clone(),
            config.graphcms_token.clone(),
        ))
    }

    /// Create a client sharing an existing HTTP connection pool.
    #[must_use]
    pub fn with_http(http: reqwest::Client, endpoint: Endpoint, token: Option<String>) -> Self {
        Self {
            http,
            endpoint,
            token,
        }
    }

    /// All posts, newest first.
    pub async fn get_posts(&self) -> Fetched<Vec<Post>> {
        let result = self
            .execute::<PostsConnectionData>("getPosts", queries::GET_POSTS, Value::Null)
            .await
            .map(|d| into_nodes(d.posts_connection));
        read("getPosts", result)
    }

    /// The three newest posts.
    pub async fn get_recent_posts(&self) -> Fetched<Vec<Post>> {
        let result = self
            .execute::<PostsData>("getRecentPosts", queries::GET_RECENT_POSTS, Value::Null)
            .await
            .map(|d| {
                let mut posts = d.posts;
                posts.truncate(WIDGET_POST_LIMIT);
                posts
            });
        read("getRecentPosts", result)
    }

    pub async fn get_categories(&self) -> Fetched<Vec<Category>> {
        let result = self
            .execute::<CategoriesData>("getCategories", queries::GET_CATEGORIES, Value::Null)
            .await
            .map(|d| d.categories);
        read("getCategories", result)
    }

    /// A single post including its rich text content, or `None` if no post
    /// has this slug.
    pub async fn get_post_details(&self, slug: &str) -> Fetched<Option<Post>> {
        let result = self
            .execute::<PostData>(
                "getPostDetails",
                queries::GET_POST_DETAILS,
                json!({ "slug": slug }),
            )
            .await
            .map(|d| d.post);
        read("getPostDetails", result)
    }

    /// Up to three posts sharing any of `categories`, never the post `slug`.
    pub async fn get_similar_posts(&self, categories: &[String], slug: &str) -> Fetched<Vec<Post>> {
        let result = self
            .execute::<PostsData>(
                "getSimilarPosts",
                queries::GET_SIMILAR_POSTS,
                json!({ "slug": slug, "categories": categories }),
            )
            .await
            .map(|d| {
                let mut posts: Vec<Post> = d.posts.into_iter().filter(|p| p.slug != slug).collect();
                posts.truncate(WIDGET_POST_LIMIT);
                posts
            });
        read("getSimilarPosts", result)
    }

    /// The posts immediately after and before `created_at`, excluding `slug`.
    pub async fn get_adjacent_posts(
        &self,
        created_at: DateTime<Utc>,
        slug: &str,
    ) -> Fetched<AdjacentPosts> {
        let result = self
            .execute::<AdjacentData>(
                "getAdjacentPosts",
                queries::GET_ADJACENT_POSTS,
                json!({
                    "createdAt": created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                    "slug": slug,
                }),
            )
            .await
            .map(|d| AdjacentPosts {
                next: d.next.into_iter().find(|p| p.slug != slug),
                previous: d.previous.into_iter().find(|p| p.slug != slug),
            });
        read("getAdjacentPosts", result)
    }

    /// Posts belonging to the category `slug`.
    pub async fn get_category_posts(&self, slug: &str) -> Fetched<Vec<Post>> {
        let result = self
            .execute::<PostsConnectionData>(
                "getCategoryPost",
                queries::GET_CATEGORY_POSTS,
                json!({ "slug": slug }),
            )
            .await
            .map(|d| into_nodes(d.posts_connection));
        read("getCategoryPost", result)
    }

    pub async fn get_featured_posts(&self) -> Fetched<Vec<Post>> {
        let result = self
            .execute::<PostsData>("getFeaturedPosts", queries::GET_FEATURED_POSTS, Value::Null)
            .await
            .map(|d| d.posts);
        read("getFeaturedPosts", result)
    }

    /// Comments left on the post `slug`.
    pub async fn get_comments(&self, slug: &str) -> Fetched<Vec<Comment>> {
        let result = self
            .execute::<CommentsData>("getComments", queries::GET_COMMENTS, json!({ "slug": slug }))
            .await
            .map(|d| d.comments);
        read("getComments", result)
    }

    /// Create a comment through the content API mutation and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are empty or the API rejects or
    /// fails the mutation.
    pub async fn create_comment(&self, submission: &CommentSubmission) -> Result<String, ContentError> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(ContentError::MissingFields(missing));
        }

        let data = self
            .execute::<CreateCommentData>(
                "createComment",
                queries::CREATE_COMMENT,
                json!({
                    "name": submission.name,
                    "email": submission.email,
                    "comment": submission.comment,
                    "slug": submission.slug,
                }),
            )
            .await?;

        debug!(slug = %submission.slug, id = %data.create_comment.id, "Comment created");
        Ok(data.create_comment.id)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<T, ContentError> {
        debug!(operation, endpoint = %self.endpoint, "Sending GraphQL request");

        let mut request = self
            .http
            .post(self.endpoint.url().clone())
            .json(&GraphQLRequest { query, variables });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error bodies often still carry a GraphQL `errors` array.
        let envelope = match serde_json::from_str::<GraphQLResponse>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(ContentError::status(status, &body)),
            Err(e) => return Err(ContentError::Decode(e)),
        };

        if !envelope.errors.is_empty() {
            return Err(ContentError::GraphQL(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        if !status.is_success() {
            return Err(ContentError::status(status, &body));
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ => Err(ContentError::MissingData),
        }
    }
}

fn into_nodes(connection: Connection) -> Vec<Post> {
    connection.edges.into_iter().map(|e| e.node).collect()
}

fn read<T>(operation: &'static str, result: Result<T, ContentError>) -> Fetched<T> {
    match result {
        Ok(data) => Fetched::Data(data),
        Err(e) => {
            warn!(operation, error = %e, "Content fetch failed, rendering without it");
            Fetched::Unavailable
        }
    }
}
