use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::pages::{
    render_category_page, render_home_page, render_message_page, render_post_detail_page,
    render_post_unavailable_page, CategoryPageParams, CommentDraft, CommentNotice,
    HomePageParams, PostDetailParams,
};
use super::AppState;
use crate::content::{post_path, CommentSubmission, ContentError, Fetched};
use crate::widget::{PostWidget, WidgetContext};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/post/:slug", get(post_detail))
        .route("/post/:slug/comments", post(submit_comment_form))
        .route("/category/:slug", get(category))
        .route("/api/comments", post(api_create_comment))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let mut widget = PostWidget::new(WidgetContext::recent());
    let (posts, featured, categories, _) = tokio::join!(
        state.content.get_posts(),
        state.content.get_featured_posts(),
        state.content.get_categories(),
        widget.refresh(&state.content),
    );

    let posts = posts.into_inner();
    let featured = featured.into_inner();
    let categories = categories.into_inner();

    let html = render_home_page(&HomePageParams {
        site_name: &state.config.site_name,
        posts: &posts,
        featured: &featured,
        categories: &categories,
        widget: &widget,
    });
    Html(html.into_string()).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    commented: Option<String>,
}

async fn post_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PostQuery>,
) -> Response {
    let notice = query.commented.map(|_| CommentNotice::Submitted);
    render_post(&state, &slug, notice, CommentDraft::default()).await
}

/// Render a post page. A post that does not exist is a 404; a post that
/// could not be fetched renders the page without its post section.
async fn render_post(
    state: &AppState,
    slug: &str,
    notice: Option<CommentNotice<'_>>,
    draft: CommentDraft<'_>,
) -> Response {
    let (details, categories) = tokio::join!(
        state.content.get_post_details(slug),
        state.content.get_categories(),
    );
    let categories = categories.into_inner();
    let site_name = state.config.site_name.as_str();

    let post = match details {
        Fetched::Data(Some(post)) => post,
        Fetched::Data(None) => {
            let html = render_message_page(
                "Post not found",
                "There is no post at this address.",
                site_name,
                &categories,
            );
            return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
        }
        Fetched::Unavailable => {
            let mut widget = PostWidget::new(WidgetContext::recent());
            widget.refresh(&state.content).await;
            let html = render_post_unavailable_page(site_name, &categories, &widget);
            return Html(html.into_string()).into_response();
        }
    };

    let mut widget = PostWidget::new(WidgetContext::related(post.category_slugs(), &post.slug));
    let (adjacent, comments, _) = tokio::join!(
        state.content.get_adjacent_posts(post.created_at, &post.slug),
        state.content.get_comments(&post.slug),
        widget.refresh(&state.content),
    );
    let adjacent = adjacent.into_inner();
    let comments = comments.into_inner();

    let html = render_post_detail_page(&PostDetailParams {
        site_name,
        post: &post,
        adjacent: &adjacent,
        comments: &comments,
        categories: &categories,
        widget: &widget,
        notice,
        draft,
    });
    Html(html.into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    comment: String,
}

/// Handler for the comment form on a post page (POST /post/:slug/comments).
///
/// Forwards the comment to the comment endpoint. On success redirects back
/// to the post; on failure re-renders the post with the error and the
/// reader's input still in the form.
async fn submit_comment_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    let submission = CommentSubmission {
        slug,
        name: form.name.trim().to_string(),
        email: Some(form.email.trim().to_string()).filter(|e| !e.is_empty()),
        comment: form.comment.trim().to_string(),
    };

    let e = match state.comments.submit_comment(&submission).await {
        Ok(_) => {
            let back = post_path(&submission.slug);
            return Redirect::to(&format!("{back}?commented=1#comment-form")).into_response();
        }
        Err(e) => e,
    };

    let message = match &e {
        ContentError::MissingFields(fields) => format!("Please fill in: {}", fields.join(", ")),
        _ => {
            tracing::error!(slug = %submission.slug, "Failed to submit comment: {e}");
            "Your comment could not be submitted. Please try again later.".to_string()
        }
    };
    let draft = CommentDraft {
        name: &form.name,
        email: &form.email,
        comment: &form.comment,
    };
    render_post(
        &state,
        &submission.slug,
        Some(CommentNotice::Failed(&message)),
        draft,
    )
    .await
}

async fn category(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let (posts, categories) = tokio::join!(
        state.content.get_category_posts(&slug),
        state.content.get_categories(),
    );
    let posts = posts.into_inner();
    let categories = categories.into_inner();

    let html = render_category_page(&CategoryPageParams {
        site_name: &state.config.site_name,
        slug: &slug,
        posts: &posts,
        categories: &categories,
    });
    Html(html.into_string()).into_response()
}

// ========== API Routes ==========

/// Handler for comment creation (POST /api/comments).
///
/// Accepts the payload `submit_comment` sends and creates the comment
/// through the content API.
async fn api_create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentSubmission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::debug!("Rejected comment payload: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match state.content.create_comment(&submission).await {
        Ok(id) => {
            tracing::info!(slug = %submission.slug, id = %id, "Comment created");
            Json(json!({ "createComment": { "id": id } })).into_response()
        }
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!(slug = %submission.slug, "Failed to create comment: {e}");
                StatusCode::BAD_GATEWAY
            };
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

// ========== Utility Routes ==========

async fn health() -> &'static str {
    "OK"
}

async fn favicon() -> Response {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">📝</text></svg>"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
        .into_response()
}
