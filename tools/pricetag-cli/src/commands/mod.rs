//! CLI command implementations.

pub mod quote;
pub mod render;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use pricetag_core::{parse_offer_date_strict, Clock, Currency, SystemClock};
use pricetag_view::PriceDisplayProps;

use crate::config::PreviewConfig;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub price: PriceArgs,

    /// Extra classes for the root container (overrides the offers file)
    #[arg(long = "class")]
    pub class_name: Option<String>,

    /// Hide the savings badge
    #[arg(long)]
    pub no_badge: bool,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub price: PriceArgs,
}

/// Arguments shared by every command that prices something.
#[derive(Args)]
pub struct PriceArgs {
    /// Original price
    #[arg(short, long)]
    pub price: f64,

    /// Evaluate offers at this instant instead of the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Currency code (overrides the offers file)
    #[arg(long)]
    pub currency: Option<String>,
}

impl PriceArgs {
    /// Instant to evaluate offers at.
    pub fn resolve_now(&self) -> Result<DateTime<Utc>> {
        match self.now.as_deref() {
            Some(raw) => parse_offer_date_strict(raw).context("Invalid --now value"),
            None => Ok(SystemClock.now()),
        }
    }

    /// Merge the offers file with these flags.
    pub fn props(&self, config: &PreviewConfig) -> Result<PriceDisplayProps> {
        let currency = match self.currency.as_deref() {
            Some(code) => code.parse::<Currency>().context("Invalid --currency value")?,
            None => config.currency,
        };

        let mut props = PriceDisplayProps::new(self.price)
            .with_currency(currency)
            .with_class_name(config.class_name.clone())
            .with_savings_badge(config.show_savings_badge);
        props.product_offer = config.product_offer.clone();
        props.category_offer = config.category_offer.clone();

        Ok(props)
    }
}
