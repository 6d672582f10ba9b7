use async_trait::async_trait;

use crate::error::PricingResult;
use crate::rates::RateConfig;

/// Storage for the active rate table.
///
/// Implementations persist a whole [`RateConfig`] at a time; there is no
/// partial update at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Load the persisted rates, `None` when nothing has been saved yet
    async fn load(&self) -> PricingResult<Option<RateConfig>>;

    /// Replace the persisted rates
    async fn save(&self, rates: &RateConfig) -> PricingResult<()>;
}
