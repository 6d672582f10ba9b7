//! Command line definition

use clap::{Args, Parser, Subcommand};
use domain_pricing::models::check_amount;
use domain_pricing::{ChannelType, ProductTier};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Debug, Parser)]
#[command(name = "gree-pricing", version)]
#[command(about = "Evaluate air-conditioner group-buy pricing against subsidy, commission and channel fees")]
pub struct Cli {
    /// Rate file to read and update (defaults to RATES_FILE or rates.json)
    #[arg(long, global = true)]
    pub rates_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve,

    /// Evaluate one price
    Evaluate(EvaluateArgs),

    /// Show or change the fee rates
    Rates {
        #[command(subcommand)]
        action: RatesAction,
    },

    /// Price the product catalog on a channel
    Products(ProductsArgs),
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Official guide price
    #[arg(short, long, value_parser = parse_amount)]
    pub price: Decimal,

    /// Group-buy discount given to the customer
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub discount: Decimal,

    /// Product tier (low-wall, low-cabinet, ordinary, mid-range, high-range)
    #[arg(short, long, value_parser = parse_tier, default_value = "mid-range")]
    pub tier: ProductTier,

    /// Sales channel (normal, livestream, cps-self, cps-external)
    #[arg(short, long, value_parser = parse_channel, default_value = "normal")]
    pub channel: ChannelType,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[arg(short, long, value_parser = parse_channel, default_value = "normal")]
    pub channel: ChannelType,

    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub discount: Decimal,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum RatesAction {
    /// Print the active rates
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Restore the default rates
    Reset,

    /// Set the commission rate of one tier, e.g. `set-tier high-range 0.065`
    SetTier {
        #[arg(value_parser = parse_tier)]
        tier: ProductTier,

        #[arg(value_parser = parse_rate)]
        rate: Decimal,
    },
}

fn kebab(value: impl ToString) -> String {
    value.to_string().replace('_', "-")
}

/// Accepts `mid-range` as well as the wire form `mid_range`
pub fn parse_tier(raw: &str) -> Result<ProductTier, String> {
    ProductTier::from_str(&raw.trim().replace('-', "_")).map_err(|_| {
        let known: Vec<String> = ProductTier::iter().map(kebab).collect();
        format!("unknown tier '{raw}', expected one of: {}", known.join(", "))
    })
}

pub fn parse_channel(raw: &str) -> Result<ChannelType, String> {
    ChannelType::from_str(&raw.trim().replace('-', "_")).map_err(|_| {
        let known: Vec<String> = ChannelType::iter().map(kebab).collect();
        format!("unknown channel '{raw}', expected one of: {}", known.join(", "))
    })
}

/// Money amount between zero and the accepted maximum
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| format!("'{raw}': {e}"))?;
    check_amount(&value).map_err(|e| match e.message {
        Some(message) => format!("'{raw}' {message}"),
        None => format!("'{raw}' is out of range"),
    })?;
    Ok(value)
}

/// Rate as a fraction (`0.037`) or a percentage (`3.7%`)
pub fn parse_rate(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    match raw.strip_suffix('%') {
        Some(percent) => Decimal::from_str(percent.trim())
            .map(|p| p / Decimal::ONE_HUNDRED)
            .map_err(|e| format!("'{raw}': {e}")),
        None => Decimal::from_str(raw).map_err(|e| format!("'{raw}': {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tier_accepts_kebab_and_snake() {
        assert_eq!(parse_tier("mid-range").unwrap(), ProductTier::MidRange);
        assert_eq!(parse_tier("low_cabinet").unwrap(), ProductTier::LowCabinet);
        assert_eq!(parse_tier("High-Range").unwrap(), ProductTier::HighRange);

        let err = parse_tier("premium").unwrap_err();
        assert!(err.contains("low-wall, low-cabinet, ordinary, mid-range, high-range"));
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!(parse_channel("cps-external").unwrap(), ChannelType::CpsExternal);
        assert!(parse_channel("wholesale").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(parse_amount("3699").unwrap(), Decimal::from(3699));
        assert!(parse_amount("-1").unwrap_err().contains("must not be negative"));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1000000000000").is_ok());
        assert!(
            parse_amount("70000000000000000000000000000")
                .unwrap_err()
                .contains("must not exceed")
        );
    }

    #[test]
    fn test_parse_rate_accepts_percent() {
        assert_eq!(parse_rate("3.7%").unwrap(), Decimal::new(37, 3));
        assert_eq!(parse_rate("0.037").unwrap(), Decimal::new(37, 3));
    }

    #[test]
    fn test_evaluate_defaults() {
        let cli = Cli::try_parse_from(["gree-pricing", "evaluate", "--price", "3699"]).unwrap();

        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.price, Decimal::from(3699));
                assert!(args.discount.is_zero());
                assert_eq!(args.tier, ProductTier::MidRange);
                assert_eq!(args.channel, ChannelType::Normal);
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rates_set_tier() {
        let cli = Cli::try_parse_from([
            "gree-pricing",
            "--rates-file",
            "/tmp/r.json",
            "rates",
            "set-tier",
            "high-range",
            "6.5%",
        ])
        .unwrap();

        assert_eq!(cli.rates_file, Some(PathBuf::from("/tmp/r.json")));
        match cli.command {
            Command::Rates {
                action: RatesAction::SetTier { tier, rate },
            } => {
                assert_eq!(tier, ProductTier::HighRange);
                assert_eq!(rate, Decimal::new(65, 3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
