//! Price quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::currency::{format_amount, Currency};
use crate::offer::{Offer, OfferScope};

/// A base price with the best eligible discount applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceQuote {
    /// `original_price * (1 - discount_percent / 100)`.
    pub discounted_price: f64,
    /// Price before the discount.
    pub original_price: f64,
    /// `original_price - discounted_price`.
    pub savings: f64,
    /// Percentage that was applied.
    pub discount_percent: f64,
}

impl PriceQuote {
    /// Apply a percentage to a price. No clamping is done.
    pub fn from_percent(original_price: f64, discount_percent: f64) -> Self {
        let discounted_price = original_price * (1.0 - discount_percent / 100.0);
        Self {
            discounted_price,
            original_price,
            savings: original_price - discounted_price,
            discount_percent,
        }
    }

    /// Quote a price against a product and a category offer at `now`.
    ///
    /// Returns `None` when neither offer qualifies or the best qualifying
    /// percentage is zero.
    pub fn compute(
        original_price: f64,
        product_offer: Option<&Offer>,
        category_offer: Option<&Offer>,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let candidates = [
            (OfferScope::Product, product_offer),
            (OfferScope::Category, category_offer),
        ];
        let best = best_discount_percent(candidates, now);

        if best == 0.0 {
            trace!(original_price, "no discount applies");
            return None;
        }

        let quote = Self::from_percent(original_price, best);
        debug!(
            original_price,
            discount_percent = best,
            discounted_price = quote.discounted_price,
            "price quoted"
        );
        Some(quote)
    }

    /// Same as [`PriceQuote::compute`], reading "now" from `clock` once.
    pub fn compute_with(
        clock: &impl Clock,
        original_price: f64,
        product_offer: Option<&Offer>,
        category_offer: Option<&Offer>,
    ) -> Option<Self> {
        Self::compute(original_price, product_offer, category_offer, clock.now())
    }

    /// Whole-number percentage for display (e.g. `20`).
    pub fn percent_label(&self) -> String {
        format!("{:.0}", self.discount_percent)
    }

    /// Badge text, e.g. "Save ₹200.00 (20% OFF)".
    pub fn savings_label(&self, currency: Currency) -> String {
        format!(
            "Save {} ({}% OFF)",
            format_amount(self.savings, currency),
            self.percent_label()
        )
    }
}

/// Largest `discount_percent` among the offers applicable at `now`, or 0.
pub fn best_discount_percent<'a, I>(offers: I, now: DateTime<Utc>) -> f64
where
    I: IntoIterator<Item = (OfferScope, Option<&'a Offer>)>,
{
    let mut best = 0.0_f64;

    for (scope, offer) in offers {
        let Some(offer) = offer else {
            continue;
        };

        match offer.ineligibility_at(now) {
            None => {
                trace!(%scope, percent = offer.discount_percent, "offer qualifies");
                best = best.max(offer.discount_percent);
            }
            Some(reason) => {
                trace!(%scope, %reason, "offer skipped");
            }
        }
    }

    best
}
