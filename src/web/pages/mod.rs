//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod category;
pub mod home;
pub mod message;
pub mod post;

pub use category::{render_category_page, CategoryPageParams};
pub use home::{render_home_page, HomePageParams};
pub use message::render_message_page;
pub use post::{
    render_post_detail_page, render_post_unavailable_page, AdjacentPostNav, CommentDraft,
    CommentNotice, PostDetailParams,
};
