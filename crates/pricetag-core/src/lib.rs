//! Offer evaluation and price quotes.
//!
//! This crate holds everything the price display needs except rendering:
//!
//! - **Offers**: time-bounded percentage promotions scoped to a product or a category
//! - **Quotes**: the result of applying the best eligible offer to a base price
//! - **Clock**: an injectable source of "now"
//! - **Currency**: symbols and fixed 2-decimal amount formatting
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use pricetag_core::prelude::*;
//!
//! let now = Utc::now();
//! let offer = Offer::new(20.0)
//!     .starting(now - Duration::days(1))
//!     .ending(now + Duration::days(1));
//!
//! let quote = PriceQuote::compute(1000.0, Some(&offer), None, now).unwrap();
//! assert_eq!(format_amount(quote.discounted_price, Currency::INR), "\u{20b9}800.00");
//! assert_eq!(quote.savings_label(Currency::INR), "Save \u{20b9}200.00 (20% OFF)");
//! ```

pub mod clock;
pub mod currency;
pub mod error;
pub mod offer;
pub mod quote;

pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{format_amount, Currency};
pub use error::PricingError;
pub use offer::{parse_offer_date, parse_offer_date_strict, Ineligibility, Offer, OfferScope};
pub use quote::{best_discount_percent, PriceQuote};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::currency::{format_amount, Currency};
    pub use crate::error::PricingError;
    pub use crate::offer::{parse_offer_date, Ineligibility, Offer, OfferScope};
    pub use crate::quote::{best_discount_percent, PriceQuote};
}
