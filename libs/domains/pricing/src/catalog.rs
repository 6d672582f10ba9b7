use crate::error::{PricingError, PricingResult};
use crate::evaluator::{PricingBreakdown, subsidy_base_price};
use crate::models::{ChannelType, ProductTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::ToSchema;

/// Indoor unit form factor
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MountType {
    Wall,
    Cabinet,
}

impl MountType {
    pub fn label(&self) -> &'static str {
        match self {
            MountType::Wall => "挂机",
            MountType::Cabinet => "柜机",
        }
    }
}

/// A catalog product. `subsidy_price` is derived from `list_price` on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Model code slug, e.g. `kfr-26gw-nhma1bg`
    pub id: String,
    pub name: String,
    pub model: String,
    #[ts(type = "string")]
    pub list_price: Decimal,
    #[ts(type = "string")]
    pub subsidy_price: Decimal,
    pub tier: ProductTier,
    pub mount: MountType,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        list_price: Decimal,
        tier: ProductTier,
        mount: MountType,
    ) -> Self {
        let model = model.into();
        Self {
            id: model_slug(&model),
            name: name.into(),
            model,
            list_price,
            subsidy_price: subsidy_base_price(list_price),
            tier,
            mount,
        }
    }
}

/// A catalog product priced on a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductEvaluation {
    pub product: Product,
    pub channel: ChannelType,
    #[ts(type = "string")]
    pub group_discount: Decimal,
    pub breakdown: PricingBreakdown,
}

fn model_slug(model: &str) -> String {
    model
        .chars()
        .map(|c| match c {
            '/' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Read-only product list
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shipped sample products
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(
                "云佳Pro26",
                "KFR-26GW/NhMa1BG",
                Decimal::from(2999),
                ProductTier::LowWall,
                MountType::Wall,
            ),
            Product::new(
                "云佳Pro35",
                "KFR-35GW/NhMa1BG",
                Decimal::from(3199),
                ProductTier::LowWall,
                MountType::Wall,
            ),
            Product::new(
                "云锦Pro26",
                "KFR-26GW/NhMb1BG",
                Decimal::from(3662),
                ProductTier::MidRange,
                MountType::Wall,
            ),
            Product::new(
                "全能王50",
                "KFR-50LW/NhQa1BG",
                Decimal::from(10999),
                ProductTier::HighRange,
                MountType::Cabinet,
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> PricingResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| PricingError::ProductNotFound(id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
