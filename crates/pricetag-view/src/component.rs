//! Leptos components for the price display.
//!
//! Import from this module (`pricetag_view::component::*`); `#[component]`
//! generates its own `PriceDisplayProps` builder here, distinct from the
//! crate-level props record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use pricetag_core::{format_amount, Clock, Currency, Offer, SystemClock};

use crate::badge::BadgeVariant;
use crate::props::PriceDisplayProps as DisplayRecord;
use crate::render::SAVINGS_BADGE_VARIANT;

/// Renders a badge from its variant and text.
pub type BadgeRenderer = Arc<dyn Fn(BadgeVariant, String) -> AnyView + Send + Sync>;

/// Design-system badge primitive.
#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    let class = format!("badge badge-{}", variant.as_str());
    view! { <span class=class>{children()}</span> }
}

/// Product price, discounted by the best live product or category offer.
///
/// `now` defaults to the system clock, sampled each time the component
/// renders. `badge` replaces the built-in [`Badge`] for the savings label.
#[component]
pub fn PriceDisplay(
    original_price: f64,
    #[prop(optional)] product_offer: Option<Offer>,
    #[prop(optional)] category_offer: Option<Offer>,
    #[prop(optional, into)] class_name: String,
    #[prop(default = true)] show_savings_badge: bool,
    #[prop(optional)] currency: Currency,
    #[prop(optional)] now: Option<DateTime<Utc>>,
    #[prop(optional)] badge: Option<BadgeRenderer>,
) -> impl IntoView {
    let record = DisplayRecord {
        original_price,
        product_offer,
        category_offer,
        class_name,
        show_savings_badge,
        currency,
    };
    let root_class = record.root_class();
    let now = now.unwrap_or_else(|| SystemClock.now());

    match record.quote_at(now) {
        Some(quote) => {
            let current = format_amount(quote.discounted_price, currency);
            let original = format_amount(quote.original_price, currency);
            let savings = quote.savings_label(currency);
            let savings_badge = show_savings_badge.then(move || match badge {
                Some(render) => render(SAVINGS_BADGE_VARIANT, savings),
                None => view! { <Badge variant=SAVINGS_BADGE_VARIANT>{savings}</Badge> }.into_any(),
            });

            view! {
                <div class=root_class data-section="pricing">
                    <span class="price-current">{current}</span>
                    <span class="price-original line-through">{original}</span>
                    {savings_badge}
                </div>
            }
            .into_any()
        }
        None => {
            let current = format_amount(original_price, currency);

            view! {
                <div class=root_class data-section="pricing">
                    <span class="price-current">{current}</span>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(all(test, feature = "leptos"))]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn live(percent: f64) -> Offer {
        Offer::new(percent)
            .starting(now() - Duration::days(1))
            .ending(now() + Duration::days(1))
    }

    fn render_html(view: impl FnOnce() -> AnyView) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn test_component_renders_discount_and_badge() {
        let html = render_html(|| {
            view! {
                <PriceDisplay original_price=1000.0 product_offer={live(20.0)} now={now()} class_name="pdp"/>
            }
            .into_any()
        });

        assert!(html.contains("price-display pdp"));
        assert!(html.contains("\u{20b9}800.00"));
        assert!(html.contains("\u{20b9}1000.00"));
        assert!(html.contains("badge badge-success"));
        assert!(html.contains("Save \u{20b9}200.00 (20% OFF)"));
    }

    #[test]
    fn test_component_plain_price_outside_window() {
        let html = render_html(|| {
            view! {
                <PriceDisplay original_price=500.0 product_offer={live(20.0)} now={now() + Duration::days(2)}/>
            }
            .into_any()
        });

        assert!(html.contains("\u{20b9}500.00"));
        assert!(!html.contains("line-through"));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn test_component_uses_injected_badge() {
        let badge: BadgeRenderer = Arc::new(|variant: BadgeVariant, content: String| {
            view! { <em data-variant={variant.as_str()}>{content}</em> }.into_any()
        });

        let html = render_html(move || {
            view! {
                <PriceDisplay original_price=1000.0 category_offer={live(20.0)} now={now()} badge=badge/>
            }
            .into_any()
        });

        assert!(html.contains("data-variant=\"success\""));
        assert!(html.contains("Save \u{20b9}200.00 (20% OFF)"));
        assert!(!html.contains("badge-success"));
    }

    #[test]
    fn test_component_hides_badge() {
        let html = render_html(|| {
            view! {
                <PriceDisplay original_price=1000.0 product_offer={live(20.0)} now={now()} show_savings_badge=false/>
            }
            .into_any()
        });

        assert!(html.contains("\u{20b9}800.00"));
        assert!(!html.contains("Save"));
    }
}
