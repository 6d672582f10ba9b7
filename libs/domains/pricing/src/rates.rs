//! Configurable fee rates.
//!
//! Every rate is a fraction of the subsidy base price (`0.037` is 3.7%).

use crate::error::{PricingError, PricingResult};
use crate::models::{LineItemKind, ProductTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use ts_rs::TS;
use utoipa::ToSchema;

/// Largest accepted rate (1000%)
pub const MAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Commission rate per product tier.
///
/// One field per [`ProductTier`], so every tier always has a rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(default)]
pub struct TierCommissions {
    #[ts(type = "string")]
    pub low_wall: Decimal,
    #[ts(type = "string")]
    pub low_cabinet: Decimal,
    #[ts(type = "string")]
    pub ordinary: Decimal,
    #[ts(type = "string")]
    pub mid_range: Decimal,
    #[ts(type = "string")]
    pub high_range: Decimal,
}

impl Default for TierCommissions {
    fn default() -> Self {
        Self {
            low_wall: Decimal::new(2, 2),
            low_cabinet: Decimal::new(3, 2),
            ordinary: Decimal::new(3, 2),
            mid_range: Decimal::new(4, 2),
            high_range: Decimal::new(6, 2),
        }
    }
}

impl TierCommissions {
    pub fn get(&self, tier: ProductTier) -> Decimal {
        match tier {
            ProductTier::LowWall => self.low_wall,
            ProductTier::LowCabinet => self.low_cabinet,
            ProductTier::Ordinary => self.ordinary,
            ProductTier::MidRange => self.mid_range,
            ProductTier::HighRange => self.high_range,
        }
    }

    pub fn set(&mut self, tier: ProductTier, rate: Decimal) {
        let slot = match tier {
            ProductTier::LowWall => &mut self.low_wall,
            ProductTier::LowCabinet => &mut self.low_cabinet,
            ProductTier::Ordinary => &mut self.ordinary,
            ProductTier::MidRange => &mut self.mid_range,
            ProductTier::HighRange => &mut self.high_range,
        };
        *slot = rate;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductTier, Decimal)> + '_ {
        ProductTier::iter().map(|tier| (tier, self.get(tier)))
    }
}

/// The full rate table consumed by the evaluator.
///
/// Missing keys in a persisted document fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct RateConfig {
    pub tier_commission: TierCommissions,
    #[ts(type = "string")]
    pub subsidy_platform_fee: Decimal,
    #[ts(type = "string")]
    pub transaction_service_fee: Decimal,
    #[ts(type = "string")]
    pub platform_base_deduction: Decimal,
    #[ts(type = "string")]
    pub rebate_framework_fee: Decimal,
    #[ts(type = "string")]
    pub reduced_deduction: Decimal,
    #[ts(type = "string")]
    pub cps_external_commission: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            tier_commission: TierCommissions::default(),
            subsidy_platform_fee: Decimal::new(53, 3),
            transaction_service_fee: Decimal::new(6, 3),
            platform_base_deduction: Decimal::new(37, 3),
            rebate_framework_fee: Decimal::new(25, 3),
            reduced_deduction: Decimal::new(14, 3),
            cps_external_commission: Decimal::new(3, 2),
        }
    }
}

impl RateConfig {
    /// Rate applied for a line item. Tier commission depends on `tier`.
    pub fn rate_for(&self, kind: LineItemKind, tier: ProductTier) -> Decimal {
        match kind {
            LineItemKind::TierCommission => self.tier_commission.get(tier),
            LineItemKind::SubsidyPlatformFee => self.subsidy_platform_fee,
            LineItemKind::TransactionFee => self.transaction_service_fee,
            LineItemKind::PlatformBaseDeduction => self.platform_base_deduction,
            LineItemKind::RebateFrameworkFee => self.rebate_framework_fee,
            LineItemKind::ReducedDeduction => self.reduced_deduction,
            LineItemKind::CpsExternalCommission => self.cps_external_commission,
        }
    }

    /// Every rate with its dotted wire name, tier commissions first.
    pub fn named_rates(&self) -> Vec<(String, Decimal)> {
        let mut rates: Vec<(String, Decimal)> = self
            .tier_commission
            .iter()
            .map(|(tier, rate)| (format!("tierCommission.{tier}"), rate))
            .collect();

        rates.extend([
            ("subsidyPlatformFee".to_string(), self.subsidy_platform_fee),
            ("transactionServiceFee".to_string(), self.transaction_service_fee),
            ("platformBaseDeduction".to_string(), self.platform_base_deduction),
            ("rebateFrameworkFee".to_string(), self.rebate_framework_fee),
            ("reducedDeduction".to_string(), self.reduced_deduction),
            ("cpsExternalCommission".to_string(), self.cps_external_commission),
        ]);
        rates
    }

    /// Reject rates below zero or above [`MAX_RATE`]. The first offending
    /// rate is named in the error.
    pub fn validate(&self) -> PricingResult<()> {
        for (name, rate) in self.named_rates() {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(PricingError::invalid_rate(
                    name,
                    format!("must not be negative (got {rate})"),
                ));
            }
            if rate > MAX_RATE {
                return Err(PricingError::invalid_rate(
                    name,
                    format!("must not exceed {MAX_RATE} (got {rate})"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_match_published_rates() {
        let rates = RateConfig::default();
        assert_eq!(rates.tier_commission.get(ProductTier::LowWall), Decimal::new(2, 2));
        assert_eq!(rates.tier_commission.get(ProductTier::LowCabinet), Decimal::new(3, 2));
        assert_eq!(rates.tier_commission.get(ProductTier::Ordinary), Decimal::new(3, 2));
        assert_eq!(rates.tier_commission.get(ProductTier::MidRange), Decimal::new(4, 2));
        assert_eq!(rates.tier_commission.get(ProductTier::HighRange), Decimal::new(6, 2));
        assert_eq!(rates.subsidy_platform_fee, Decimal::new(53, 3));
        assert_eq!(rates.transaction_service_fee, Decimal::new(6, 3));
        assert_eq!(rates.platform_base_deduction, Decimal::new(37, 3));
        assert_eq!(rates.rebate_framework_fee, Decimal::new(25, 3));
        assert_eq!(rates.reduced_deduction, Decimal::new(14, 3));
        assert_eq!(rates.cps_external_commission, Decimal::new(3, 2));
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_set_tier_only_touches_that_tier() {
        let mut tiers = TierCommissions::default();
        tiers.set(ProductTier::Ordinary, Decimal::new(45, 3));

        assert_eq!(tiers.get(ProductTier::Ordinary), Decimal::new(45, 3));
        assert_eq!(tiers.get(ProductTier::LowCabinet), Decimal::new(3, 2));
    }

    #[test]
    fn test_validate_names_negative_tier_rate() {
        let mut rates = RateConfig::default();
        rates.tier_commission.high_range = Decimal::new(-1, 2);

        match rates.validate() {
            Err(PricingError::InvalidRate { name, .. }) => {
                assert_eq!(name, "tierCommission.high_range")
            }
            other => panic!("expected InvalidRate, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_allows_zero_and_over_one() {
        let rates = RateConfig {
            reduced_deduction: Decimal::ZERO,
            cps_external_commission: Decimal::new(15, 1),
            ..RateConfig::default()
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_rate_above_ceiling() {
        let rates = RateConfig {
            transaction_service_fee: Decimal::new(3, 0),
            ..RateConfig::default()
        };
        assert!(rates.validate().is_ok());

        let rates = RateConfig {
            rebate_framework_fee: Decimal::from_str("100000000000000000000").unwrap(),
            ..RateConfig::default()
        };
        match rates.validate() {
            Err(PricingError::InvalidRate { name, reason }) => {
                assert_eq!(name, "rebateFrameworkFee");
                assert!(reason.contains("must not exceed 10"));
            }
            other => panic!("expected InvalidRate, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let json = r#"{"reducedDeduction": "0.02", "tierCommission": {"mid_range": 0.05}}"#;
        let rates: RateConfig = serde_json::from_str(json).unwrap();

        assert_eq!(rates.reduced_deduction, Decimal::new(2, 2));
        assert_eq!(rates.tier_commission.mid_range, Decimal::new(5, 2));
        assert_eq!(rates.tier_commission.high_range, Decimal::new(6, 2));
        assert_eq!(rates.platform_base_deduction, Decimal::new(37, 3));
    }

    #[test]
    fn test_named_rates_cover_every_rate() {
        let names: Vec<String> = RateConfig::default()
            .named_rates()
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names.len(), 11);
        assert!(names.contains(&"tierCommission.low_wall".to_string()));
        assert!(names.contains(&"cpsExternalCommission".to_string()));
    }
}
