//! Form components for maud templates.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("text", "email", "hidden", etc.)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            id: None,
        }
    }

    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::new(name, "text")
    }

    #[must_use]
    pub fn email(name: &'a str) -> Self {
        Self::new(name, "email")
    }

    #[must_use]
    pub fn value_opt(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                required[self.required]
                id=[self.id];
        }
    }
}

/// A textarea element.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub rows: Option<u32>,
    pub required: bool,
    pub id: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            placeholder: None,
            rows: None,
            required: false,
            id: None,
        }
    }

    #[must_use]
    pub fn value_opt(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea
                name=(self.name)
                placeholder=[self.placeholder]
                rows=[self.rows]
                required[self.required]
                id=[self.id]
            {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

/// A label element for form inputs.
#[derive(Debug)]
pub struct Label<'a> {
    /// The ID of the input this label is for
    pub r#for: &'a str,
    /// Label text
    pub text: &'a str,
}

impl<'a> Label<'a> {
    #[must_use]
    pub fn new(r#for: &'a str, text: &'a str) -> Self {
        Self { r#for, text }
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Markup {
        html! {
            label for=(self.r#for) { (self.text) }
        }
    }
}
