//! Rates API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::pricing::{RateCard, rate_card};
use crate::utils::AppResult;

/// 价格面板查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesQuery {
    /// 是否显示周租/月租折扣价 (对应仪表盘的显示开关)
    #[serde(default)]
    pub include_discounts: bool,
}

/// GET /api/beds/{id}/rates - 价格面板
///
/// 折扣价是 `price` 的纯函数，现算现返，从不存储
pub async fn get_rates(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<RatesQuery>,
) -> AppResult<Json<RateCard>> {
    let category = state.catalog().get(id)?;
    Ok(Json(rate_card(&category, query.include_discounts)))
}
