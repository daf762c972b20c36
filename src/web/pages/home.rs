//! Home page: all posts, featured posts and the recent posts widget.

use maud::{html, Markup};

use crate::components::{BaseLayout, CategoryList, FeaturedPosts, PostList};
use crate::content::{Category, Post};
use crate::widget::PostWidget;

#[derive(Debug, Clone)]
pub struct HomePageParams<'a> {
    pub site_name: &'a str,
    pub posts: &'a [Post],
    pub featured: &'a [Post],
    pub categories: &'a [Category],
    pub widget: &'a PostWidget,
}

#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let content = html! {
        (FeaturedPosts::new(params.featured))
        div class="grid" {
            section class="posts" {
                (PostList::new(params.posts))
            }
            div class="sidebar" {
                (params.widget)
                (CategoryList::new(params.categories))
            }
        }
    };

    BaseLayout::new("Home", params.site_name)
        .with_categories(params.categories)
        .render(content)
}
