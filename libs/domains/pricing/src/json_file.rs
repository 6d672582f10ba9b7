use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::error::PricingResult;
use crate::rates::RateConfig;
use crate::repository::RateRepository;

/// Rates persisted as a single JSON document of named rates.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so readers never see a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileRateRepository {
    path: PathBuf,
}

impl JsonFileRateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "rates.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl RateRepository for JsonFileRateRepository {
    async fn load(&self) -> PricingResult<Option<RateConfig>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No rate file, using defaults");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let rates: RateConfig = serde_json::from_str(&raw)?;
        rates.validate()?;

        debug!(path = %self.path.display(), "Loaded rate file");
        Ok(Some(rates))
    }

    async fn save(&self, rates: &RateConfig) -> PricingResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(rates)?;
        let temp = self.temp_path();
        fs::write(&temp, body).await?;
        fs::rename(&temp, &self.path).await?;

        info!(path = %self.path.display(), "Saved rate file");
        Ok(())
    }
}
