use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::PricingResult;
use crate::rates::RateConfig;
use crate::repository::RateRepository;

/// Process-local rate storage, used by tests and one-shot CLI runs
#[derive(Debug, Default)]
pub struct InMemoryRateRepository {
    rates: RwLock<Option<RateConfig>>,
}

impl InMemoryRateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateRepository for InMemoryRateRepository {
    async fn load(&self) -> PricingResult<Option<RateConfig>> {
        Ok(self.rates.read().clone())
    }

    async fn save(&self, rates: &RateConfig) -> PricingResult<()> {
        *self.rates.write() = Some(rates.clone());
        Ok(())
    }
}
