//! Alert components for displaying messages to readers.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// An alert message component.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::success("Comment submitted for review");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self {
            variant: AlertVariant::Success,
            message,
        }
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self {
            variant: AlertVariant::Error,
            message,
        }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            article class=(self.variant.article_class()) role="status" {
                (self.message)
            }
        }
    }
}
