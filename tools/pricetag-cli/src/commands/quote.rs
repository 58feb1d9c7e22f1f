//! Quote command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use pricetag_core::{format_amount, Currency, Offer, OfferScope, PriceQuote};
use pricetag_view::PriceDisplayProps;
use serde::Serialize;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::eligibility_badge;

/// Quote with the inputs it came from.
#[derive(Debug, Serialize)]
pub struct QuoteReport {
    pub now: DateTime<Utc>,
    pub original_price: f64,
    pub currency: Currency,
    pub quote: Option<PriceQuote>,
    #[serde(skip)]
    props: PriceDisplayProps,
}

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let report = quote(&args, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    let props = &report.props;
    ctx.output.header(&format!("Quote at {}", report.now.to_rfc3339()));
    describe_offer(ctx, OfferScope::Product, props.product_offer.as_ref(), report.now);
    describe_offer(ctx, OfferScope::Category, props.category_offer.as_ref(), report.now);

    match report.quote {
        Some(quote) => {
            ctx.output.kv("original", &format_amount(quote.original_price, props.currency));
            ctx.output.kv("discounted", &format_amount(quote.discounted_price, props.currency));
            ctx.output.kv("savings", &format_amount(quote.savings, props.currency));
            ctx.output.kv("percent off", &quote.percent_label());
            ctx.output.success(&quote.savings_label(props.currency));
        }
        None => {
            ctx.output.kv("price", &format_amount(props.original_price, props.currency));
            ctx.output.info("No discount applies");
        }
    }

    Ok(())
}

/// Merge flags over the offers file and compute the quote.
pub fn quote(args: &QuoteArgs, ctx: &Context) -> Result<QuoteReport> {
    let now = args.price.resolve_now()?;
    let props = args.price.props(&ctx.config)?;

    Ok(QuoteReport {
        now,
        original_price: props.original_price,
        currency: props.currency,
        quote: props.quote_at(now),
        props,
    })
}

fn describe_offer(ctx: &Context, scope: OfferScope, offer: Option<&Offer>, now: DateTime<Utc>) {
    let Some(offer) = offer else {
        ctx.output.kv(&format!("{} offer", scope), "none");
        return;
    };

    let reason = offer.ineligibility_at(now);
    ctx.output.kv(
        &format!("{} offer", scope),
        &format!(
            "{}% [{}]",
            offer.discount_percent,
            eligibility_badge(reason.as_ref().map(|r| r.as_str()))
        ),
    );
}
