//! Pricing-specific metrics.

use metrics::{counter, gauge};

/// Pricing metrics recorder
pub struct PricingMetrics;

impl PricingMetrics {
    /// Record one evaluation. `loss` marks a negative actual profit.
    pub fn record_evaluation(tier: &str, channel: &str, loss: bool) {
        counter!(
            "pricing_evaluations_total",
            "tier" => tier.to_string(),
            "channel" => channel.to_string()
        )
        .increment(1);

        if loss {
            counter!(
                "pricing_loss_evaluations_total",
                "tier" => tier.to_string(),
                "channel" => channel.to_string()
            )
            .increment(1);

            tracing::debug!(tier, channel, "Evaluation produced a loss");
        }
    }

    /// Record an accepted rate change. `operation` is e.g. "replace", "tier", "reset".
    pub fn record_rates_updated(operation: &str) {
        counter!(
            "pricing_rate_updates_total",
            "operation" => operation.to_string(),
            "status" => "accepted"
        )
        .increment(1);
    }

    /// Record a rate change rejected by validation
    pub fn record_rates_rejected(operation: &str, rate_name: &str) {
        counter!(
            "pricing_rate_updates_total",
            "operation" => operation.to_string(),
            "status" => "rejected"
        )
        .increment(1);

        tracing::warn!(operation, rate_name, "Rate change rejected");
    }

    /// Publish the currently active value of a named rate
    pub fn set_rate(rate_name: &str, value: f64) {
        gauge!("pricing_rate_value", "rate" => rate_name.to_string()).set(value);
    }
}
