//! Related/recent posts sidebar widget.
//!
//! The widget is a two-state machine: `Loading` until a fetch for its
//! current context completes, then `Loaded` with whatever came back. Each
//! fetch is issued under a [`FetchTicket`]; changing the context invalidates
//! every outstanding ticket so a slow response for an old context can never
//! overwrite a newer one.

use async_trait::async_trait;
use maud::{html, Markup, Render};
use tracing::debug;

use crate::components::format_date;
use crate::content::{ContentClient, Fetched, Post};

/// Where the widget gets its posts from.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn similar_posts(&self, categories: &[String], slug: &str) -> Fetched<Vec<Post>>;
    async fn recent_posts(&self) -> Fetched<Vec<Post>>;
}

#[async_trait]
impl PostSource for ContentClient {
    async fn similar_posts(&self, categories: &[String], slug: &str) -> Fetched<Vec<Post>> {
        self.get_similar_posts(categories, slug).await
    }

    async fn recent_posts(&self) -> Fetched<Vec<Post>> {
        self.get_recent_posts().await
    }
}

/// The input the widget renders for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetContext {
    pub categories: Vec<String>,
    pub slug: Option<String>,
}

impl WidgetContext {
    /// Context for a post page: show posts related to `slug`.
    #[must_use]
    pub fn related(categories: Vec<String>, slug: impl Into<String>) -> Self {
        Self {
            categories,
            slug: Some(slug.into()),
        }
    }

    /// Context without a post: show the newest posts.
    #[must_use]
    pub fn recent() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.slug.is_some() {
            "Related Posts"
        } else {
            "Recent Posts"
        }
    }
}

/// Proof that a fetch was started for a particular context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    context: WidgetContext,
}

impl FetchTicket {
    #[must_use]
    pub fn context(&self) -> &WidgetContext {
        &self.context
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState {
    Loading,
    Loaded(Vec<Post>),
}

#[derive(Debug, Clone)]
pub struct PostWidget {
    context: WidgetContext,
    generation: u64,
    state: WidgetState,
}

impl PostWidget {
    #[must_use]
    pub fn new(context: WidgetContext) -> Self {
        Self {
            context,
            generation: 0,
            state: WidgetState::Loading,
        }
    }

    #[must_use]
    pub fn context(&self) -> &WidgetContext {
        &self.context
    }

    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Posts currently shown; empty while loading.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        match &self.state {
            WidgetState::Loaded(posts) => posts,
            WidgetState::Loading => &[],
        }
    }

    /// Switch to a new context. A different context drops the current posts
    /// and invalidates outstanding tickets; the same context is a no-op.
    pub fn set_context(&mut self, context: WidgetContext) {
        if context != self.context {
            self.context = context;
            self.generation += 1;
            self.state = WidgetState::Loading;
        }
    }

    /// Start a fetch for the current context.
    #[must_use]
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            context: self.context.clone(),
        }
    }

    /// Apply the result of a fetch. Returns `false` and leaves the widget
    /// untouched if the ticket belongs to a superseded context.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Fetched<Vec<Post>>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale widget response"
            );
            return false;
        }
        self.state = WidgetState::Loaded(result.into_inner());
        true
    }

    /// Fetch posts for the current context from `source` and apply them.
    pub async fn refresh<S: PostSource + ?Sized>(&mut self, source: &S) -> bool {
        let ticket = self.begin_fetch();
        let result = fetch(source, ticket.context()).await;
        self.complete(&ticket, result)
    }
}

/// Fetch the posts a context calls for.
pub async fn fetch<S: PostSource + ?Sized>(source: &S, context: &WidgetContext) -> Fetched<Vec<Post>> {
    match &context.slug {
        Some(slug) => source.similar_posts(&context.categories, slug).await,
        None => source.recent_posts().await,
    }
}

impl Render for PostWidget {
    fn render(&self) -> Markup {
        let posts = self.posts();
        if posts.is_empty() {
            return html! {};
        }

        html! {
            aside class="post-widget" {
                h3 class="post-widget-heading" { (self.context.heading()) }
                @for post in posts {
                    div class="post-widget-item" {
                        div class="post-widget-thumb" {
                            @if let Some(url) = post.featured_image_url() {
                                img src=(url) alt=(post.title) width="60" height="60";
                            }
                        }
                        div class="post-widget-body" {
                            p class="post-widget-date" { (format_date(&post.created_at)) }
                            a href=(post.path()) { (post.title) }
                            @if let Some(excerpt) = &post.excerpt {
                                p class="post-widget-excerpt line-clamp-2" { (excerpt) }
                            }
                        }
                    }
                }
            }
        }
    }
}
