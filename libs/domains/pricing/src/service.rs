use observability::PricingMetrics;
use parking_lot::RwLock;
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::Mutex;
use tracing::{info, instrument};
use validator::Validate;

use crate::catalog::{Catalog, Product, ProductEvaluation};
use crate::error::{PricingError, PricingResult};
use crate::evaluator::{self, PricingBreakdown};
use crate::models::{
    ChannelOption, ChannelType, EvaluateRequest, ProductEvaluateRequest, ProductTier, TierOption,
};
use crate::rates::RateConfig;
use crate::repository::RateRepository;

/// Owns the active rate table and evaluates prices against it.
///
/// Readers take an `Arc` snapshot of the rates, so an evaluation never sees a
/// half-applied update. Writers are serialized and persist before swapping.
pub struct PricingService<R: RateRepository> {
    repository: Arc<R>,
    current: RwLock<Arc<RateConfig>>,
    writer: Mutex<()>,
    catalog: Catalog,
}

impl<R: RateRepository> PricingService<R> {
    /// Service over `repository` starting from the default rates, without reading storage
    pub fn new(repository: R) -> Self {
        Self::with_rates(repository, RateConfig::default())
    }

    pub fn with_rates(repository: R, rates: RateConfig) -> Self {
        publish_rates(&rates);
        Self {
            repository: Arc::new(repository),
            current: RwLock::new(Arc::new(rates)),
            writer: Mutex::new(()),
            catalog: Catalog::sample(),
        }
    }

    /// Read persisted rates, falling back to the defaults when none are stored
    #[instrument(skip(repository))]
    pub async fn load(repository: R) -> PricingResult<Self> {
        let rates = match repository.load().await? {
            Some(rates) => {
                info!("Using persisted rates");
                rates
            }
            None => {
                info!("No persisted rates, using defaults");
                RateConfig::default()
            }
        };
        rates.validate()?;

        Ok(Self::with_rates(repository, rates))
    }

    /// Confirm the rate storage can still be read
    #[instrument(skip(self))]
    pub async fn check_storage(&self) -> PricingResult<()> {
        self.repository.load().await.map(|_| ())
    }

    /// Current rate snapshot
    pub fn rates(&self) -> Arc<RateConfig> {
        self.current.read().clone()
    }

    #[instrument(skip(self))]
    pub fn evaluate(&self, request: &EvaluateRequest) -> PricingResult<PricingBreakdown> {
        request
            .validate()
            .map_err(|e| PricingError::InvalidInput(e.to_string()))?;

        let rates = self.rates();
        let breakdown = evaluator::evaluate(
            request.original_price,
            request.group_discount,
            request.tier,
            request.channel,
            &rates,
        );

        PricingMetrics::record_evaluation(
            request.tier.as_ref(),
            request.channel.as_ref(),
            breakdown.is_loss(),
        );
        Ok(breakdown)
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn product(&self, id: &str) -> PricingResult<&Product> {
        self.catalog.get(id)
    }

    /// Evaluate a catalog product at its list price and tier
    #[instrument(skip(self))]
    pub fn evaluate_product(
        &self,
        id: &str,
        request: &ProductEvaluateRequest,
    ) -> PricingResult<ProductEvaluation> {
        let product = self.catalog.get(id)?.clone();
        let breakdown = self.evaluate(&EvaluateRequest::new(
            product.list_price,
            request.group_discount,
            product.tier,
            request.channel,
        ))?;

        Ok(ProductEvaluation {
            product,
            channel: request.channel,
            group_discount: request.group_discount,
            breakdown,
        })
    }

    /// Tiers with labels and the commission currently applied
    pub fn tiers(&self) -> Vec<TierOption> {
        let rates = self.rates();
        ProductTier::iter()
            .map(|tier| TierOption {
                tier,
                label: tier.label().to_string(),
                commission: rates.tier_commission.get(tier),
            })
            .collect()
    }

    pub fn channels(&self) -> Vec<ChannelOption> {
        ChannelType::iter()
            .map(|channel| ChannelOption {
                channel,
                label: channel.label().to_string(),
                deductions: channel.deduction_items().to_vec(),
            })
            .collect()
    }

    /// Replace the whole rate table
    #[instrument(skip(self, rates))]
    pub async fn update_rates(&self, rates: RateConfig) -> PricingResult<Arc<RateConfig>> {
        self.apply("replace", move |_| rates).await
    }

    /// Change the commission of a single tier
    #[instrument(skip(self))]
    pub async fn set_tier_commission(
        &self,
        tier: ProductTier,
        rate: rust_decimal::Decimal,
    ) -> PricingResult<Arc<RateConfig>> {
        self.apply("tier", move |current| {
            let mut next = current.clone();
            next.tier_commission.set(tier, rate);
            next
        })
        .await
    }

    /// Restore and persist the default rates
    #[instrument(skip(self))]
    pub async fn reset_rates(&self) -> PricingResult<Arc<RateConfig>> {
        self.apply("reset", |_| RateConfig::default()).await
    }

    async fn apply<F>(&self, operation: &'static str, change: F) -> PricingResult<Arc<RateConfig>>
    where
        F: FnOnce(&RateConfig) -> RateConfig + Send,
    {
        let _guard = self.writer.lock().await;

        let current = self.rates();
        let next = change(current.as_ref());

        if let Err(err) = next.validate() {
            if let PricingError::InvalidRate { name, .. } = &err {
                PricingMetrics::record_rates_rejected(operation, name);
            }
            return Err(err);
        }

        self.repository.save(&next).await?;

        let next = Arc::new(next);
        *self.current.write() = Arc::clone(&next);

        publish_rates(&next);
        PricingMetrics::record_rates_updated(operation);
        info!(operation, "Rates updated");

        Ok(next)
    }
}

fn publish_rates(rates: &RateConfig) {
    for (name, rate) in rates.named_rates() {
        PricingMetrics::set_rate(&name, rate.to_f64().unwrap_or_default());
    }
}
