//! Post detail page.

use maud::{html, Markup, Render};

use crate::components::{
    format_date, Alert, AuthorBadge, AuthorCard, BaseLayout, CategoryList, CommentList,
    EmptyState, Form, Input, Label, OpenGraphMetadata, RichText, TextArea,
};
use crate::content::{category_path, AdjacentPosts, Category, Comment, Post};
use crate::widget::PostWidget;

/// Outcome of a comment submitted from this page, carried in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentNotice<'a> {
    Submitted,
    Failed(&'a str),
}

/// Values a reader already typed into the comment form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentDraft<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub comment: &'a str,
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct PostDetailParams<'a> {
    pub site_name: &'a str,
    pub post: &'a Post,
    pub adjacent: &'a AdjacentPosts,
    pub comments: &'a [Comment],
    pub categories: &'a [Category],
    pub widget: &'a PostWidget,
    pub notice: Option<CommentNotice<'a>>,
    pub draft: CommentDraft<'a>,
}

#[must_use]
pub fn render_post_detail_page(params: &PostDetailParams<'_>) -> Markup {
    let post = params.post;
    let comment_action = format!("{}/comments", post.path());

    let content = html! {
        div class="grid" {
            div class="post-main" {
                article class="post-detail" {
                    @if let Some(url) = post.featured_image_url() {
                        img class="post-featured-image" src=(url) alt=(post.title);
                    }
                    p class="meta" {
                        @if let Some(author) = &post.author {
                            (AuthorBadge::new(author))
                        }
                        span class="post-date" { (format_date(&post.created_at)) }
                    }
                    h1 { (post.title) }
                    @if !post.categories.is_empty() {
                        p class="post-categories" {
                            @for category in &post.categories {
                                a class="category-tag" href=(category_path(&category.slug)) { (category.name) }
                                " "
                            }
                        }
                    }
                    @if let Some(content) = &post.content {
                        (RichText::new(&content.raw))
                    }
                }
                @if let Some(author) = &post.author {
                    (AuthorCard::new(author))
                }
                (AdjacentPostNav::new(params.adjacent))
                (render_comment_form(&comment_action, params.notice, params.draft))
                div id="comments" {
                    (CommentList::new(params.comments))
                }
            }
            div class="sidebar" {
                (params.widget)
                (CategoryList::new(params.categories))
            }
        }
    };

    BaseLayout::new(&post.title, params.site_name)
        .with_categories(params.categories)
        .with_og_metadata(OpenGraphMetadata::for_post(post, params.site_name))
        .render(content)
}

fn render_comment_form(
    action: &str,
    notice: Option<CommentNotice<'_>>,
    draft: CommentDraft<'_>,
) -> Markup {
    let fields = html! {
        (Label::new("comment", "Comment"))
        (TextArea::new("comment")
            .id("comment")
            .rows(4)
            .placeholder("Leave a comment")
            .value_opt(non_empty(draft.comment))
            .required())
        (Label::new("name", "Name"))
        (Input::text("name").id("name").placeholder("Name").value_opt(non_empty(draft.name)).required())
        (Label::new("email", "Email"))
        (Input::email("email").id("email").placeholder("Email").value_opt(non_empty(draft.email)))
        button type="submit" { "Post Comment" }
    };

    html! {
        section class="comment-form" id="comment-form" {
            h3 { "Leave a Reply" }
            @match notice {
                Some(CommentNotice::Submitted) => (Alert::success("Comment submitted for review")),
                Some(CommentNotice::Failed(message)) => (Alert::error(message)),
                None => {}
            }
            (Form::post(action, fields))
        }
    }
}

/// Post page shown when the post could not be fetched: the layout and
/// sidebar render as usual with the post section left empty.
#[must_use]
pub fn render_post_unavailable_page(
    site_name: &str,
    categories: &[Category],
    widget: &PostWidget,
) -> Markup {
    let content = html! {
        div class="grid" {
            div class="post-main" {
                (EmptyState::new("This post could not be loaded right now. Please try again shortly."))
            }
            div class="sidebar" {
                (widget)
                (CategoryList::new(categories))
            }
        }
    };

    BaseLayout::new("Post", site_name)
        .with_categories(categories)
        .render(content)
}

/// Links to the chronologically previous and next posts. Renders nothing
/// when both are absent.
#[derive(Debug, Clone)]
pub struct AdjacentPostNav<'a> {
    pub adjacent: &'a AdjacentPosts,
}

impl<'a> AdjacentPostNav<'a> {
    #[must_use]
    pub const fn new(adjacent: &'a AdjacentPosts) -> Self {
        Self { adjacent }
    }
}

impl Render for AdjacentPostNav<'_> {
    fn render(&self) -> Markup {
        let AdjacentPosts { next, previous } = self.adjacent;
        if next.is_none() && previous.is_none() {
            return html! {};
        }

        html! {
            nav class="adjacent-posts" {
                @if let Some(previous) = previous {
                    a class="adjacent-previous" href=(previous.path()) {
                        small { "Previous Post" }
                        " "
                        (previous.title)
                    }
                }
                @if let Some(next) = next {
                    a class="adjacent-next" href=(next.path()) {
                        small { "Next Post" }
                        " "
                        (next.title)
                    }
                }
            }
        }
    }
}
