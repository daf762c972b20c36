//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and category navigation
//! - `card`: Post, author, category and comment components
//! - `alert`: Alert messages
//! - `form`: Form elements
//! - `metadata`: Open Graph tags and text formatting helpers
//! - `rich_text`: Post body rendering

pub mod alert;
pub mod card;
pub mod form;
pub mod layout;
pub mod metadata;
pub mod rich_text;

pub use alert::{Alert, AlertVariant};
pub use card::{
    AuthorBadge, AuthorCard, CategoryList, CommentList, EmptyState, FeaturedPosts, PostCard,
    PostList,
};
pub use form::{Form, Input, Label, TextArea};
pub use layout::BaseLayout;
pub use metadata::{format_date, truncate_text, OpenGraphMetadata};
pub use rich_text::RichText;
