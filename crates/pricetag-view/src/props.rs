//! Inputs to the price display.

use chrono::{DateTime, Utc};
use pricetag_core::{Currency, Offer, PriceQuote};
use serde::{Deserialize, Serialize};

/// Everything the price display renders from.
///
/// Optional fields default to: no offers, `class_name = ""`,
/// `show_savings_badge = true`, INR.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceDisplayProps {
    /// Base price before any offer.
    #[serde(alias = "originalPrice")]
    pub original_price: f64,
    /// Offer attached to the product.
    #[serde(default, alias = "productOffer", skip_serializing_if = "Option::is_none")]
    pub product_offer: Option<Offer>,
    /// Offer attached to the product's category.
    #[serde(default, alias = "categoryOffer", skip_serializing_if = "Option::is_none")]
    pub category_offer: Option<Offer>,
    /// Extra classes appended to the root container.
    #[serde(default, alias = "className")]
    pub class_name: String,
    /// Show the "Save ..." badge when a discount applies.
    #[serde(default = "default_show_savings_badge", alias = "showSavingsBadge")]
    pub show_savings_badge: bool,
    /// Currency used for the price prefix.
    #[serde(default)]
    pub currency: Currency,
}

fn default_show_savings_badge() -> bool {
    true
}

impl PriceDisplayProps {
    /// Props for a plain price with all defaults.
    pub fn new(original_price: f64) -> Self {
        Self {
            original_price,
            product_offer: None,
            category_offer: None,
            class_name: String::new(),
            show_savings_badge: default_show_savings_badge(),
            currency: Currency::default(),
        }
    }

    pub fn with_product_offer(mut self, offer: Offer) -> Self {
        self.product_offer = Some(offer);
        self
    }

    pub fn with_category_offer(mut self, offer: Offer) -> Self {
        self.category_offer = Some(offer);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_savings_badge(mut self, show: bool) -> Self {
        self.show_savings_badge = show;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Quote for these props at `now`.
    pub fn quote_at(&self, now: DateTime<Utc>) -> Option<PriceQuote> {
        PriceQuote::compute(
            self.original_price,
            self.product_offer.as_ref(),
            self.category_offer.as_ref(),
            now,
        )
    }

    /// Root container class: `price-display` plus the caller's classes.
    pub fn root_class(&self) -> String {
        let extra = self.class_name.trim();
        if extra.is_empty() {
            "price-display".to_string()
        } else {
            format!("price-display {}", extra)
        }
    }
}
