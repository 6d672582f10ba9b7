//! Subcommand implementations

use axum_helpers::create_app;
use domain_pricing::{
    EvaluateRequest, JsonFileRateRepository, PricingService, ProductEvaluateRequest, RateRepository,
};
use eyre::WrapErr;
use std::sync::Arc;
use tracing::info;

use crate::api;
use crate::cli::{Command, EvaluateArgs, ProductsArgs, RatesAction};
use crate::config::Config;
use crate::render;

pub async fn run(command: Command, config: &Config) -> eyre::Result<()> {
    let output = match command {
        Command::Serve => return serve(config).await,
        Command::Evaluate(args) => evaluate(&load_service(config).await?, args)?,
        Command::Rates { action } => rates(&load_service(config).await?, action).await?,
        Command::Products(args) => products(&load_service(config).await?, args)?,
    };

    println!("{output}");
    Ok(())
}

async fn load_service(config: &Config) -> eyre::Result<PricingService<JsonFileRateRepository>> {
    let repository = JsonFileRateRepository::new(&config.rates_file);
    PricingService::load(repository)
        .await
        .wrap_err_with(|| format!("Failed to load rates from {}", config.rates_file.display()))
}

async fn serve(config: &Config) -> eyre::Result<()> {
    observability::init_metrics().wrap_err("Failed to install metrics recorder")?;

    let service = Arc::new(load_service(config).await?);
    let app = api::app(service, config)?;

    info!(
        rates_file = %config.rates_file.display(),
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(app, &config.server)
        .await
        .wrap_err("Server error")?;

    info!("Pricing service shutdown complete");
    Ok(())
}

pub fn evaluate<R: RateRepository>(
    service: &PricingService<R>,
    args: EvaluateArgs,
) -> eyre::Result<String> {
    let request = EvaluateRequest::new(args.price, args.discount, args.tier, args.channel);
    let result = service.evaluate(&request)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(render::breakdown(&request, &result))
    }
}

pub async fn rates<R: RateRepository>(
    service: &PricingService<R>,
    action: RatesAction,
) -> eyre::Result<String> {
    let rates = match action {
        RatesAction::Show { json: true } => {
            return Ok(serde_json::to_string_pretty(service.rates().as_ref())?);
        }
        RatesAction::Show { json: false } => service.rates(),
        RatesAction::Reset => service.reset_rates().await?,
        RatesAction::SetTier { tier, rate } => service.set_tier_commission(tier, rate).await?,
    };

    Ok(render::rates(&rates))
}

pub fn products<R: RateRepository>(
    service: &PricingService<R>,
    args: ProductsArgs,
) -> eyre::Result<String> {
    let request = ProductEvaluateRequest {
        channel: args.channel,
        group_discount: args.discount,
    };

    let evaluations = service
        .products()
        .iter()
        .map(|product| service.evaluate_product(&product.id, &request))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        Ok(serde_json::to_string_pretty(&evaluations)?)
    } else {
        Ok(render::products(&evaluations))
    }
}
