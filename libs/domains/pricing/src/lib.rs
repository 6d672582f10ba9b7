//! Pricing Domain
//!
//! Evaluates what a group-buy discount costs on an air-conditioner sale once
//! the government subsidy, tier commission and channel fees are applied.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← Axum routes + OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Rate snapshots, validation, catalog
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼────┐ ┌▼────────────┐
//! │ Eval  │ │ Repository  │  ← Rate storage (memory, JSON file)
//! └───────┘ └─────────────┘
//! ```
//!
//! The evaluator is a pure function; everything stateful lives in
//! [`PricingService`].
//!
//! ```rust,ignore
//! let service = PricingService::load(JsonFileRateRepository::new("rates.json")).await?;
//! let breakdown = service.evaluate(&EvaluateRequest::new(
//!     Decimal::from(3699),
//!     Decimal::from(100),
//!     ProductTier::MidRange,
//!     ChannelType::Normal,
//! ))?;
//! assert!(breakdown.is_loss());
//! ```

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod handlers;
pub mod json_file;
pub mod memory;
pub mod models;
pub mod rates;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use catalog::{Catalog, MountType, Product, ProductEvaluation};
pub use error::{PricingError, PricingResult};
pub use evaluator::{PricingBreakdown, SUBSIDY_CAP, SUBSIDY_RATE, evaluate, subsidy_base_price};
pub use json_file::JsonFileRateRepository;
pub use memory::InMemoryRateRepository;
pub use models::{
    ChannelOption, ChannelType, EvaluateRequest, LineItemKind, LineItemSide,
    ProductEvaluateRequest, ProductTier, TierOption, TierRateUpdate,
};
pub use rates::{RateConfig, TierCommissions};
pub use repository::RateRepository;
pub use service::PricingService;
