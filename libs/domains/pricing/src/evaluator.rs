//! The pricing-rule evaluator.
//!
//! A pure function over a [`RateConfig`] snapshot. No rounding is applied;
//! callers format values for display.

use crate::models::{ChannelType, LineItemKind, LineItemSide, ProductTier};
use crate::rates::RateConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;
use utoipa::ToSchema;

/// Share of the original price covered by the subsidy
pub const SUBSIDY_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Absolute subsidy ceiling in currency units
pub const SUBSIDY_CAP: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Price after the capped subsidy, the basis for every rate.
pub fn subsidy_base_price(original_price: Decimal) -> Decimal {
    let subsidy = (original_price * SUBSIDY_RATE).min(SUBSIDY_CAP);
    original_price - subsidy
}

/// Result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    #[ts(type = "string")]
    pub subsidy_base_price: Decimal,
    /// Theoretical discount the margin can absorb
    #[ts(type = "string")]
    pub max_potential_discount: Decimal,
    #[ts(type = "string")]
    pub group_price: Decimal,
    /// Negative when the group discount exceeds the margin
    #[ts(type = "string")]
    pub actual_profit: Decimal,
    #[ts(type = "string")]
    pub net_rate: Decimal,
    #[ts(type = "string")]
    pub total_income_rate: Decimal,
    #[ts(type = "string")]
    pub total_deduction_rate: Decimal,
    /// Signed amount per component, `subsidy_base_price * rate`.
    /// Deductions are negative, so the values sum to `max_potential_discount`.
    #[ts(type = "Record<string, string>")]
    pub line_items: BTreeMap<LineItemKind, Decimal>,
}

impl PricingBreakdown {
    pub fn is_loss(&self) -> bool {
        self.actual_profit.is_sign_negative() && !self.actual_profit.is_zero()
    }

    pub fn line_item(&self, kind: LineItemKind) -> Option<Decimal> {
        self.line_items.get(&kind).copied()
    }
}

/// Evaluate a price for a tier and channel against `rates`.
///
/// Negative net rates and losses are ordinary results. Amounts up to
/// [`MAX_AMOUNT`](crate::models::MAX_AMOUNT) and rates up to
/// [`MAX_RATE`](crate::rates::MAX_RATE) stay far inside `Decimal` range.
pub fn evaluate(
    original_price: Decimal,
    group_discount: Decimal,
    tier: ProductTier,
    channel: ChannelType,
    rates: &RateConfig,
) -> PricingBreakdown {
    let base = subsidy_base_price(original_price);
    let mut line_items = BTreeMap::new();

    let mut accumulate = |kinds: &[LineItemKind]| {
        kinds.iter().fold(Decimal::ZERO, |total, kind| {
            let rate = rates.rate_for(*kind, tier);
            let amount = base * rate;
            let signed = match kind.side() {
                LineItemSide::Income => amount,
                LineItemSide::Deduction => -amount,
            };
            line_items.insert(*kind, signed);
            total + rate
        })
    };

    let total_income_rate = accumulate(&LineItemKind::INCOME[..]);
    let total_deduction_rate = accumulate(channel.deduction_items());

    let net_rate = total_income_rate - total_deduction_rate;
    let max_potential_discount = base * net_rate;

    PricingBreakdown {
        subsidy_base_price: base,
        max_potential_discount,
        group_price: base - group_discount,
        actual_profit: max_potential_discount - group_discount,
        net_rate,
        total_income_rate,
        total_deduction_rate,
        line_items,
    }
}
