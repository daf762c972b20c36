//! Renders the rich text AST returned in `content.raw`.
//!
//! The AST is a tree of element nodes (`{"type": ..., "children": [...]}`)
//! with text leaves (`{"text": ..., "bold": true, ...}`). Unknown element
//! types render their children so new block kinds degrade to plain text.

use maud::{html, Markup, Render};
use serde_json::Value;

/// A post body to render.
#[derive(Debug, Clone)]
pub struct RichText<'a> {
    pub raw: &'a Value,
}

impl<'a> RichText<'a> {
    #[must_use]
    pub const fn new(raw: &'a Value) -> Self {
        Self { raw }
    }
}

impl Render for RichText<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="rich-text" {
                (render_children(self.raw))
            }
        }
    }
}

fn render_children(node: &Value) -> Markup {
    let children = node
        .get("children")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    html! {
        @for child in children {
            (render_node(child))
        }
    }
}

fn render_node(node: &Value) -> Markup {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        return render_text(node, text);
    }

    let str_attr = |name: &str| node.get(name).and_then(Value::as_str);
    let children = render_children(node);

    match str_attr("type").unwrap_or_default() {
        "paragraph" => html! { p { (children) } },
        "heading-one" => html! { h1 { (children) } },
        "heading-two" => html! { h2 { (children) } },
        "heading-three" => html! { h3 { (children) } },
        "heading-four" => html! { h4 { (children) } },
        "heading-five" => html! { h5 { (children) } },
        "heading-six" => html! { h6 { (children) } },
        "block-quote" => html! { blockquote { (children) } },
        "code-block" => html! { pre { code { (children) } } },
        "bulleted-list" => html! { ul { (children) } },
        "numbered-list" => html! { ol { (children) } },
        "list-item" => html! { li { (children) } },
        "link" => {
            let new_tab = node
                .get("openInNewTab")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            html! {
                a href=[str_attr("href")]
                    target=[new_tab.then_some("_blank")]
                    rel=[new_tab.then_some("noopener noreferrer")] {
                    (children)
                }
            }
        }
        "image" => {
            let alt = str_attr("altText").or_else(|| str_attr("title")).unwrap_or_default();
            html! {
                @if let Some(src) = str_attr("src") {
                    img src=(src)
                        alt=(alt)
                        width=[node.get("width").and_then(Value::as_u64)]
                        height=[node.get("height").and_then(Value::as_u64)];
                }
            }
        }
        _ => children,
    }
}

fn render_text(node: &Value, text: &str) -> Markup {
    let mark = |name: &str| node.get(name).and_then(Value::as_bool).unwrap_or(false);

    let mut markup = html! { (text) };
    if mark("code") {
        markup = html! { code { (markup) } };
    }
    if mark("underline") {
        markup = html! { u { (markup) } };
    }
    if mark("italic") {
        markup = html! { em { (markup) } };
    }
    if mark("bold") {
        markup = html! { strong { (markup) } };
    }
    markup
}
