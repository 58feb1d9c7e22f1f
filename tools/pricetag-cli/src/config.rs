//! Offers file.

use anyhow::{Context, Result};
use pricetag_core::{Currency, Offer};
use serde::{Deserialize, Serialize};

/// Offers file contents.
///
/// Everything is optional; command-line flags override these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Currency for the price prefix.
    #[serde(default)]
    pub currency: Currency,

    /// Extra classes for the root container.
    #[serde(default)]
    pub class_name: String,

    /// Show the savings badge.
    #[serde(default = "default_show_savings_badge")]
    pub show_savings_badge: bool,

    /// Offer on the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_offer: Option<Offer>,

    /// Offer on the product's category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_offer: Option<Offer>,
}

fn default_show_savings_badge() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            class_name: String::new(),
            show_savings_badge: default_show_savings_badge(),
            product_offer: None,
            category_offer: None,
        }
    }
}

impl PreviewConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read offers file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON offers file: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML offers file: {}", path))
        }
    }
}
