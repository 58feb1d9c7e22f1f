//! Badge rendering capability.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::escape::escape_html;

/// Visual style of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A design-system badge.
///
/// `content` is plain text; implementations are responsible for escaping it.
pub trait Badge {
    /// Render a badge as an HTML fragment.
    fn render(&self, variant: BadgeVariant, content: &str) -> String;
}

/// Default badge markup: `<span class="badge badge-{variant}">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBadge;

impl Badge for HtmlBadge {
    fn render(&self, variant: BadgeVariant, content: &str) -> String {
        format!(
            r#"<span class="badge badge-{}">{}</span>"#,
            variant,
            escape_html(content)
        )
    }
}

impl<B: Badge + ?Sized> Badge for &B {
    fn render(&self, variant: BadgeVariant, content: &str) -> String {
        (**self).render(variant, content)
    }
}
