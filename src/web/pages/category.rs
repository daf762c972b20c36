//! Category page listing the posts of one category.

use maud::{html, Markup};

use crate::components::{BaseLayout, CategoryList, PostList};
use crate::content::{Category, Post};

#[derive(Debug, Clone)]
pub struct CategoryPageParams<'a> {
    pub site_name: &'a str,
    pub slug: &'a str,
    pub posts: &'a [Post],
    pub categories: &'a [Category],
}

impl CategoryPageParams<'_> {
    /// Display name of the category, falling back to its slug when the
    /// category list is unavailable.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.categories
            .iter()
            .find(|c| c.slug == self.slug)
            .map_or(self.slug, |c| c.name.as_str())
    }
}

#[must_use]
pub fn render_category_page(params: &CategoryPageParams<'_>) -> Markup {
    let name = params.category_name();

    let content = html! {
        div class="grid" {
            section class="posts" {
                h1 { (name) }
                (PostList::new(params.posts).with_empty_message("No posts in this category yet."))
            }
            div class="sidebar" {
                (CategoryList::new(params.categories).with_current(params.slug))
            }
        }
    };

    BaseLayout::new(name, params.site_name)
        .with_categories(params.categories)
        .render(content)
}
