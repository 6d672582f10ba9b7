//! Plain-text tables for terminal output.
//!
//! Amounts are rounded to cents and rates shown as percentages here only;
//! the JSON output keeps full precision.

use domain_pricing::{
    EvaluateRequest, PricingBreakdown, ProductEvaluation, RateConfig,
};
use rust_decimal::{Decimal, RoundingStrategy};

fn money(value: Decimal) -> String {
    let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{cents:.2}")
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn row(label: &str, value: String) -> String {
    format!("  {label:<28}{value:>14}")
}

pub fn breakdown(request: &EvaluateRequest, result: &PricingBreakdown) -> String {
    let mut lines = vec![
        format!(
            "{} / {}",
            request.tier.label(),
            request.channel.label()
        ),
        row("Original price", money(request.original_price)),
        row("Subsidy base price", money(result.subsidy_base_price)),
        String::new(),
    ];

    for (kind, amount) in &result.line_items {
        lines.push(row(kind.label(), money(*amount)));
    }

    lines.extend([
        String::new(),
        row("Income rate", percent(result.total_income_rate)),
        row("Deduction rate", percent(result.total_deduction_rate)),
        row("Net rate", percent(result.net_rate)),
        row("Max potential discount", money(result.max_potential_discount)),
        row("Group discount", money(request.group_discount)),
        row("Group price", money(result.group_price)),
        row("Actual profit", money(result.actual_profit)),
    ]);

    if result.is_loss() {
        lines.push("  LOSS: the group discount exceeds the margin".to_string());
    }

    lines.join("\n")
}

pub fn rates(rates: &RateConfig) -> String {
    rates
        .named_rates()
        .into_iter()
        .map(|(name, rate)| format!("  {name:<32}{:>10}", percent(rate)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn products(evaluations: &[ProductEvaluation]) -> String {
    let mut lines = vec![format!(
        "  {:<12}{:<20}{:<10}{:>10}{:>12}{:>12}{:>12}",
        "Name", "Model", "Tier", "List", "Subsidized", "Group", "Profit"
    )];

    for evaluation in evaluations {
        let product = &evaluation.product;
        let mut line = format!(
            "  {:<12}{:<20}{:<10}{:>10}{:>12}{:>12}{:>12}",
            product.name,
            product.model,
            product.tier.label(),
            money(product.list_price),
            money(product.subsidy_price),
            money(evaluation.breakdown.group_price),
            money(evaluation.breakdown.actual_profit),
        );
        if evaluation.breakdown.is_loss() {
            line.push_str("  loss");
        }
        lines.push(line);
    }

    lines.join("\n")
}
