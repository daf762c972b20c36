//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, category navigation, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::metadata::OpenGraphMetadata;
use crate::content::{category_path, Category};

/// Critical theme initialization script that runs in <head> to prevent flash of wrong theme.
/// Must be inline (not external) to execute before body renders.
const THEME_INIT_SCRIPT: &str = r#"(function() {
    if (window.matchMedia('(prefers-color-scheme: dark)').matches) {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();"#;

/// Two-line clamp used for excerpts in sidebar lists.
const LINE_CLAMP_STYLE: &str = ".line-clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page", "My Blog")
///     .with_categories(&categories)
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    site_name: &'a str,
    categories: &'a [Category],
    og_metadata: Option<OpenGraphMetadata>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and site name.
    #[must_use]
    pub fn new(title: &'a str, site_name: &'a str) -> Self {
        Self {
            title,
            site_name,
            categories: &[],
            og_metadata: None,
        }
    }

    /// Categories listed in the header navigation.
    #[must_use]
    pub fn with_categories(mut self, categories: &'a [Category]) -> Self {
        self.categories = categories;
        self
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" data-theme="light" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - " (self.site_name) }

                    @if let Some(ref og) = self.og_metadata {
                        (og.render())
                    }

                    link rel="stylesheet" href="/static/css/style.css";
                    style { (PreEscaped(LINE_CLAMP_STYLE)) }
                    script { (PreEscaped(THEME_INIT_SCRIPT)) }
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (self.render_footer())
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="container" {
                nav {
                    ul {
                        li {
                            a href="/" {
                                strong class="site-logo" { (self.site_name) }
                            }
                        }
                    }
                    ul {
                        @for category in self.categories {
                            li { a href=(category_path(&category.slug)) { (category.name) } }
                        }
                    }
                }
            }
        }
    }

    fn render_footer(&self) -> Markup {
        html! {
            footer class="container" {
                small {
                    (self.site_name)
                    " | "
                    a href="/" { "Home" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_title_and_doctype() {
        let html = BaseLayout::new("Hello", "My Blog")
            .render(html! { p { "body" } })
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hello - My Blog</title>"));
        assert!(html.contains("<main class=\"container\"><p>body</p></main>"));
    }

    #[test]
    fn test_layout_category_navigation() {
        let categories = vec![
            Category {
                name: "Tech".to_string(),
                slug: "tech".to_string(),
            },
            Category {
                name: "Travel".to_string(),
                slug: "travel".to_string(),
            },
        ];
        let html = BaseLayout::new("Home", "My Blog")
            .with_categories(&categories)
            .render(html! {})
            .into_string();
        assert!(html.contains(r#"href="/category/tech""#));
        assert!(html.contains(">Travel</a>"));
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = BaseLayout::new("<script>", "Blog")
            .render(html! {})
            .into_string();
        assert!(html.contains("&lt;script&gt; - Blog"));
    }

    #[test]
    fn test_theme_follows_color_scheme_preference() {
        let html = BaseLayout::new("Home", "My Blog")
            .render(html! {})
            .into_string();
        assert!(html.contains("prefers-color-scheme: dark"));
        assert!(!html.contains("localStorage"));
    }
}
