//! Gree Pricing - group-buy pricing evaluator
//!
//! Serves the pricing HTTP API or evaluates prices from the command line
//! against the rate table stored in `RATES_FILE`.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};

mod api;
mod cli;
mod commands;
mod config;
mod openapi;
mod render;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()?.with_rates_file(cli.rates_file);
    init_tracing(&config.environment);

    commands::run(cli.command, &config).await
}
