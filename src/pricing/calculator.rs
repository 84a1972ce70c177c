//! Rate Calculator
//!
//! Weekly/monthly rates derived from the nightly price.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::BedCategory;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// 周租：7 晚 × 9 折
const WEEKLY_NIGHTS: i64 = 7;
/// 月租：30 晚 × 8 折
const MONTHLY_NIGHTS: i64 = 30;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for the wire, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// 周租价 = price × 7 × 0.9
pub fn weekly_rate(nightly: f64) -> f64 {
    let discount = Decimal::new(9, 1); // 0.9
    to_f64(to_decimal(nightly) * Decimal::from(WEEKLY_NIGHTS) * discount)
}

/// 月租价 = price × 30 × 0.8
pub fn monthly_rate(nightly: f64) -> f64 {
    let discount = Decimal::new(8, 1); // 0.8
    to_f64(to_decimal(nightly) * Decimal::from(MONTHLY_NIGHTS) * discount)
}

/// 单个类别的价格面板
///
/// 周租/月租仅在请求折扣详情时计算并返回 (对应仪表盘的显示开关)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub category_id: i64,
    /// 每晚价格
    pub nightly: f64,
    /// 周租折扣价 (仅在请求详情时出现)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<f64>,
    /// 月租折扣价 (仅在请求详情时出现)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
    /// 入住时间 (原样转发)
    pub check_in_time: String,
    /// 附加说明 (原样转发)
    pub additional_details: String,
}

/// 生成价格面板
pub fn rate_card(category: &BedCategory, include_discounts: bool) -> RateCard {
    RateCard {
        category_id: category.id,
        nightly: category.price,
        weekly: include_discounts.then(|| weekly_rate(category.price)),
        monthly: include_discounts.then(|| monthly_rate(category.price)),
        check_in_time: category.check_in_time.clone(),
        additional_details: category.additional_details.clone(),
    }
}
