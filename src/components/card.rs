//! Card components for displaying posts, authors, categories and comments.

use maud::{html, Markup, Render};

use super::metadata::format_date;
use crate::content::{category_path, Author, Category, Comment, Post};

/// A post summary card used in the main post list.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            article class="post-card" {
                @if let Some(url) = post.featured_image_url() {
                    img class="post-card-image" src=(url) alt=(post.title);
                }
                h2 class="post-card-title" {
                    a href=(post.path()) { (post.title) }
                }
                p class="meta" {
                    @if let Some(author) = &post.author {
                        (AuthorBadge::new(author))
                    }
                    span class="post-date" { (format_date(&post.created_at)) }
                }
                @if let Some(excerpt) = &post.excerpt {
                    p class="post-card-excerpt" { (excerpt) }
                }
                a class="post-card-more" href=(post.path()) { "Continue Reading" }
            }
        }
    }
}

/// A list of post cards, or an empty-state message when there are none.
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [Post],
    pub empty_message: &'a str,
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post]) -> Self {
        Self {
            posts,
            empty_message: "No posts yet.",
        }
    }

    #[must_use]
    pub const fn with_empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        if self.posts.is_empty() {
            return EmptyState::new(self.empty_message).render();
        }

        html! {
            div class="post-list" {
                @for post in self.posts {
                    (PostCard::new(post))
                }
            }
        }
    }
}

/// A horizontal strip of featured posts. Renders nothing when empty.
#[derive(Debug, Clone)]
pub struct FeaturedPosts<'a> {
    pub posts: &'a [Post],
}

impl<'a> FeaturedPosts<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post]) -> Self {
        Self { posts }
    }
}

impl Render for FeaturedPosts<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.posts.is_empty() {
                section class="featured-posts" {
                    @for post in self.posts {
                        a class="featured-post" href=(post.path()) {
                            @if let Some(url) = post.featured_image_url() {
                                img src=(url) alt=(post.title);
                            }
                            span class="featured-post-date" { (format_date(&post.created_at)) }
                            strong class="featured-post-title" { (post.title) }
                            @if let Some(author) = &post.author {
                                (AuthorBadge::new(author))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Small inline author name with photo.
#[derive(Debug, Clone)]
pub struct AuthorBadge<'a> {
    pub author: &'a Author,
}

impl<'a> AuthorBadge<'a> {
    #[must_use]
    pub const fn new(author: &'a Author) -> Self {
        Self { author }
    }
}

impl Render for AuthorBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="author" {
                @if let Some(photo) = &self.author.photo {
                    img class="author-photo" src=(photo.url) alt=(self.author.name) width="30" height="30";
                }
                (self.author.name)
            }
        }
    }
}

/// Full author card with bio, shown below a post.
#[derive(Debug, Clone)]
pub struct AuthorCard<'a> {
    pub author: &'a Author,
}

impl<'a> AuthorCard<'a> {
    #[must_use]
    pub const fn new(author: &'a Author) -> Self {
        Self { author }
    }
}

impl Render for AuthorCard<'_> {
    fn render(&self) -> Markup {
        html! {
            section class="author-card" {
                @if let Some(photo) = &self.author.photo {
                    img class="author-photo" src=(photo.url) alt=(self.author.name) width="100" height="100";
                }
                h3 { (self.author.name) }
                @if let Some(bio) = &self.author.bio {
                    p { (bio) }
                }
            }
        }
    }
}

/// Sidebar list of categories. Renders nothing when empty.
#[derive(Debug, Clone)]
pub struct CategoryList<'a> {
    pub categories: &'a [Category],
    pub current: Option<&'a str>,
}

impl<'a> CategoryList<'a> {
    #[must_use]
    pub const fn new(categories: &'a [Category]) -> Self {
        Self {
            categories,
            current: None,
        }
    }

    /// Highlight the category with this slug.
    #[must_use]
    pub const fn with_current(mut self, slug: &'a str) -> Self {
        self.current = Some(slug);
        self
    }
}

impl Render for CategoryList<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.categories.is_empty() {
                aside class="category-list" {
                    h3 { "Categories" }
                    ul {
                        @for category in self.categories {
                            li {
                                a href=(category_path(&category.slug))
                                    aria-current=[(self.current == Some(category.slug.as_str())).then_some("page")] {
                                    (category.name)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The comments left on a post. Renders nothing when there are none.
#[derive(Debug, Clone)]
pub struct CommentList<'a> {
    pub comments: &'a [Comment],
}

impl<'a> CommentList<'a> {
    #[must_use]
    pub const fn new(comments: &'a [Comment]) -> Self {
        Self { comments }
    }
}

impl Render for CommentList<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.comments.is_empty() {
                section class="comments" {
                    h3 { (self.comments.len()) " Comments" }
                    @for comment in self.comments {
                        article class="comment" {
                            p class="meta" {
                                strong { (comment.name) }
                                " on "
                                (format_date(&comment.created_at))
                            }
                            p class="comment-body" { (comment.comment) }
                        }
                    }
                }
            }
        }
    }
}

/// An empty state message component.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}
