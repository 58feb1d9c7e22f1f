//! Price display rendering.
//!
//! Renders a product price, discounted by the best live offer when there is
//! one, as either:
//!
//! - an HTML fragment ([`render_price_display`]), in the same style as the
//!   streaming page sections, or
//! - a Leptos component (`component::PriceDisplay`, behind the `leptos`
//!   feature).
//!
//! The savings badge is an injected capability ([`Badge`]) so the markup of
//! the design system's badge is not baked into the price logic.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use pricetag_core::Offer;
//! use pricetag_view::{render_price_display, HtmlBadge, PriceDisplayProps};
//!
//! let now = Utc::now();
//! let props = PriceDisplayProps::new(1000.0).with_product_offer(
//!     Offer::new(20.0)
//!         .starting(now - Duration::days(1))
//!         .ending(now + Duration::days(1)),
//! );
//!
//! let html = render_price_display(&props, now, &HtmlBadge);
//! assert!(html.contains("\u{20b9}800.00"));
//! assert!(html.contains("Save \u{20b9}200.00 (20% OFF)"));
//! ```

mod badge;
mod escape;
mod props;
mod render;

#[cfg(feature = "leptos")]
pub mod component;

pub use badge::*;
pub use props::*;
pub use render::*;
