use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Product tier (机型档次), selects the tier commission rate
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProductTier {
    LowWall,
    LowCabinet,
    Ordinary,
    #[default]
    MidRange,
    HighRange,
}

impl ProductTier {
    /// Display label used by the storefront
    pub fn label(&self) -> &'static str {
        match self {
            ProductTier::LowWall => "低端挂机",
            ProductTier::LowCabinet => "低端柜机",
            ProductTier::Ordinary => "普通机",
            ProductTier::MidRange => "中端机",
            ProductTier::HighRange => "高端机",
        }
    }
}

/// Sales channel (销售渠道), selects the deduction schedule
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ChannelType {
    /// Regular listing, full platform deduction plus rebate framework fee
    #[default]
    Normal,
    /// Livestream room, reduced deduction
    Livestream,
    /// CPS where the seller keeps the commission
    CpsSelf,
    /// CPS paying commission to an external promoter
    CpsExternal,
}

impl ChannelType {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelType::Normal => "非降扣渠道",
            ChannelType::Livestream => "直播间渠道",
            ChannelType::CpsSelf => "CPS (佣金自拿)",
            ChannelType::CpsExternal => "CPS (佣金外分)",
        }
    }

    /// Deduction line items charged on this channel, transaction fee first.
    ///
    /// Exactly one channel branch applies; `Normal` is the only channel with the
    /// full base deduction and `CpsExternal` the only one paying out commission.
    pub fn deduction_items(&self) -> &'static [LineItemKind] {
        use LineItemKind::*;

        match self {
            ChannelType::Normal => &[TransactionFee, PlatformBaseDeduction, RebateFrameworkFee],
            ChannelType::Livestream | ChannelType::CpsSelf => &[TransactionFee, ReducedDeduction],
            ChannelType::CpsExternal => {
                &[TransactionFee, ReducedDeduction, CpsExternalCommission]
            }
        }
    }
}

/// Which side of the ledger a line item sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineItemSide {
    Income,
    Deduction,
}

/// Named income and cost components of a breakdown.
///
/// Declaration order is display order: income first, then deductions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum LineItemKind {
    TierCommission,
    SubsidyPlatformFee,
    TransactionFee,
    PlatformBaseDeduction,
    RebateFrameworkFee,
    ReducedDeduction,
    CpsExternalCommission,
}

impl LineItemKind {
    pub const INCOME: [LineItemKind; 2] =
        [LineItemKind::TierCommission, LineItemKind::SubsidyPlatformFee];

    pub fn side(&self) -> LineItemSide {
        match self {
            LineItemKind::TierCommission | LineItemKind::SubsidyPlatformFee => LineItemSide::Income,
            _ => LineItemSide::Deduction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::TierCommission => "机型佣金",
            LineItemKind::SubsidyPlatformFee => "补贴平台费",
            LineItemKind::TransactionFee => "平台交易服务费",
            LineItemKind::PlatformBaseDeduction => "平台基础扣点",
            LineItemKind::RebateFrameworkFee => "返利框架费",
            LineItemKind::ReducedDeduction => "降扣后平台扣点",
            LineItemKind::CpsExternalCommission => "CPS佣金支出",
        }
    }
}

/// Input for a single evaluation.
///
/// An empty group discount field counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    /// Official guide price (官方指导价)
    #[validate(custom(function = "check_amount"))]
    #[ts(type = "string")]
    pub original_price: Decimal,
    /// Group-buy discount actually given (团购优惠)
    #[serde(default)]
    #[validate(custom(function = "check_amount"))]
    #[ts(type = "string")]
    pub group_discount: Decimal,
    #[serde(default)]
    pub tier: ProductTier,
    #[serde(default)]
    pub channel: ChannelType,
}

impl EvaluateRequest {
    pub fn new(
        original_price: Decimal,
        group_discount: Decimal,
        tier: ProductTier,
        channel: ChannelType,
    ) -> Self {
        Self {
            original_price,
            group_discount,
            tier,
            channel,
        }
    }
}

/// Evaluate a catalog product on a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductEvaluateRequest {
    #[serde(default)]
    pub channel: ChannelType,
    #[serde(default)]
    #[validate(custom(function = "check_amount"))]
    #[ts(type = "string")]
    pub group_discount: Decimal,
}

/// Body of `PUT /rates/tiers/{tier}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TierRateUpdate {
    pub rate: Decimal,
}

/// Tier with its label and active commission rate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TierOption {
    pub tier: ProductTier,
    pub label: String,
    pub commission: Decimal,
}

/// Channel with its label and the deduction items it charges
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChannelOption {
    pub channel: ChannelType,
    pub label: String,
    pub deductions: Vec<LineItemKind>,
}

/// Largest accepted price or discount (one trillion)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Why `value` is not an acceptable price or discount, if it is not.
pub fn check_amount(value: &Decimal) -> Result<(), ValidationError> {
    let (code, message) = if value.is_sign_negative() && !value.is_zero() {
        ("non_negative", "must not be negative".to_string())
    } else if *value > MAX_AMOUNT {
        ("max_amount", format!("must not exceed {MAX_AMOUNT}"))
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err.add_param("value".into(), &value.to_string());
    Err(err)
}
