//! Beds API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::catalog::CategoryOccupancy;
use crate::core::ServerState;
use crate::models::{AvailabilityUpdate, BedCategory};
use crate::utils::AppResult;

const RESOURCE: &str = "bed_category";

/// GET /api/beds - 获取所有床位类别 (插入顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BedCategory>>> {
    Ok(Json(state.catalog().list()))
}

/// GET /api/beds/{id} - 获取单个类别
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BedCategory>> {
    let category = state.catalog().get(id)?;
    Ok(Json(category))
}

/// PUT /api/beds/{id}/availability - 更新可用床位数
///
/// 可用性编辑器的提交动作。成功后发出用户可见通知并广播同步信号。
pub async fn update_availability(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AvailabilityUpdate>,
) -> AppResult<Json<BedCategory>> {
    let category = state.catalog().update_availability(id, payload.available)?;

    // 用户可见通知 (对应仪表盘 toast)
    state.notify(
        "Bed availability updated",
        format!(
            "{} beds availability has been updated to {}",
            category.bed_type, category.available
        ),
    );

    // 广播同步通知
    state.broadcast_sync(RESOURCE, "updated", &id.to_string(), Some(&category));

    Ok(Json(category))
}

/// POST /api/beds/{id}/release - 归还床位 (出院流程)
pub async fn release(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BedCategory>> {
    let category = state.catalog().release_bed(id)?;

    state.notify(
        "Bed released",
        format!(
            "A {} bed has been released, {} now available",
            category.bed_type, category.available
        ),
    );

    state.broadcast_sync(RESOURCE, "released", &id.to_string(), Some(&category));

    Ok(Json(category))
}

/// 占用网格查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyQuery {
    /// 不传表示 "All" 标签页
    pub category_id: Option<i64>,
}

/// GET /api/occupancy - 占用网格
///
/// 切换标签页只改变渲染子集，不变更任何状态
pub async fn occupancy(
    State(state): State<ServerState>,
    Query(query): Query<OccupancyQuery>,
) -> AppResult<Json<Vec<CategoryOccupancy>>> {
    let grid = state.catalog().occupancy(query.category_id)?;
    Ok(Json(grid))
}
