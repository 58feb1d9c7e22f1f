//! Price display section renderer.

use chrono::{DateTime, Utc};
use pricetag_core::{format_amount, Clock, PriceQuote};
use tracing::trace;

use crate::badge::{Badge, BadgeVariant};
use crate::escape::escape_html;
use crate::props::PriceDisplayProps;

/// Variant used for the savings badge.
pub const SAVINGS_BADGE_VARIANT: BadgeVariant = BadgeVariant::Success;

/// Render the price display at `now`.
pub fn render_price_display(props: &PriceDisplayProps, now: DateTime<Utc>, badge: &dyn Badge) -> String {
    match props.quote_at(now) {
        Some(quote) => render_discounted(props, &quote, badge),
        None => render_plain(props),
    }
}

/// Render the price display, reading "now" from `clock` once.
pub fn render_price_display_with_clock(
    props: &PriceDisplayProps,
    clock: &impl Clock,
    badge: &dyn Badge,
) -> String {
    render_price_display(props, clock.now(), badge)
}

fn render_discounted(props: &PriceDisplayProps, quote: &PriceQuote, badge: &dyn Badge) -> String {
    trace!(
        discount_percent = quote.discount_percent,
        badge = props.show_savings_badge,
        "rendering discounted price"
    );

    let savings_badge = if props.show_savings_badge {
        badge.render(SAVINGS_BADGE_VARIANT, &quote.savings_label(props.currency))
    } else {
        String::new()
    };

    format!(
        r#"<div class="{root_class}" data-section="pricing">
    <span class="price-current">{current}</span>
    <span class="price-original line-through">{original}</span>
    {savings_badge}
</div>"#,
        root_class = escape_html(&props.root_class()),
        current = escape_html(&format_amount(quote.discounted_price, props.currency)),
        original = escape_html(&format_amount(quote.original_price, props.currency)),
        savings_badge = savings_badge
    )
}

fn render_plain(props: &PriceDisplayProps) -> String {
    format!(
        r#"<div class="{root_class}" data-section="pricing">
    <span class="price-current">{current}</span>
</div>"#,
        root_class = escape_html(&props.root_class()),
        current = escape_html(&format_amount(props.original_price, props.currency))
    )
}
