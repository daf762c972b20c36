//! Plain message page used when a post does not exist.

use maud::{html, Markup};

use crate::components::{BaseLayout, EmptyState};
use crate::content::Category;

#[must_use]
pub fn render_message_page(
    title: &str,
    message: &str,
    site_name: &str,
    categories: &[Category],
) -> Markup {
    let content = html! {
        h1 { (title) }
        (EmptyState::new(message))
        p { a href="/" { "Back to all posts" } }
    };

    BaseLayout::new(title, site_name)
        .with_categories(categories)
        .render(content)
}
