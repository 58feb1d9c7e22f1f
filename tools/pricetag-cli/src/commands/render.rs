//! Render command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use pricetag_view::{render_price_display, HtmlBadge, PriceDisplayProps};
use serde::Serialize;

use super::RenderArgs;
use crate::context::Context;

/// Rendered fragment with the inputs it came from.
#[derive(Debug, Serialize)]
pub struct Rendered {
    pub props: PriceDisplayProps,
    pub now: DateTime<Utc>,
    pub html: String,
}

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let rendered = render(&args, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&rendered);
    } else {
        ctx.output.raw(&rendered.html);
    }

    Ok(())
}

/// Merge flags over the offers file and render.
pub fn render(args: &RenderArgs, ctx: &Context) -> Result<Rendered> {
    let now = args.price.resolve_now()?;
    let mut props = args.price.props(&ctx.config)?;

    if let Some(class_name) = &args.class_name {
        props.class_name = class_name.clone();
    }
    if args.no_badge {
        props.show_savings_badge = false;
    }

    ctx.output.debug(&format!("Evaluating offers at {}", now.to_rfc3339()));
    let html = render_price_display(&props, now, &HtmlBadge);

    Ok(Rendered { props, now, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::PriceArgs;
    use crate::commands::tests::context_with;

    fn args(class_name: Option<&str>, no_badge: bool) -> RenderArgs {
        RenderArgs {
            price: PriceArgs {
                price: 1000.0,
                now: Some("2026-06-15T12:00:00Z".to_string()),
                currency: None,
            },
            class_name: class_name.map(String::from),
            no_badge,
        }
    }

    #[test]
    fn test_render_uses_offers_file() {
        let (_dir, ctx) = context_with("class_name = \"from-file\"\n");
        let rendered = render(&args(None, false), &ctx).unwrap();

        assert!(rendered.html.contains("price-display from-file"));
        assert!(rendered.html.contains("\u{20b9}800.00"));
        assert!(rendered.html.contains("Save \u{20b9}200.00 (20% OFF)"));
    }

    #[test]
    fn test_class_flag_overrides_file() {
        let (_dir, ctx) = context_with("class_name = \"from-file\"\n");
        let rendered = render(&args(Some("from-flag"), false), &ctx).unwrap();

        assert_eq!(rendered.props.class_name, "from-flag");
        assert!(rendered.html.contains("price-display from-flag"));
        assert!(!rendered.html.contains("from-file"));
    }

    #[test]
    fn test_no_badge_flag_hides_badge() {
        let (_dir, ctx) = context_with("show_savings_badge = true\n");
        let rendered = render(&args(None, true), &ctx).unwrap();

        assert!(!rendered.props.show_savings_badge);
        assert!(rendered.html.contains("\u{20b9}800.00"));
        assert!(rendered.html.contains("line-through"));
        assert!(!rendered.html.contains("badge"));
    }

    #[test]
    fn test_run_json_mode() {
        let (_dir, ctx) = context_with("");
        assert!(run(args(None, false), &ctx).is_ok());
    }

    #[test]
    fn test_invalid_now_fails() {
        let (_dir, ctx) = context_with("");
        let mut bad = args(None, false);
        bad.price.now = Some("C:\\x".to_string());
        let err = run(bad, &ctx).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid --now value"));
    }
}
