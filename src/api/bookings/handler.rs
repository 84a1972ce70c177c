//! Bookings API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::catalog::PendingBooking;
use crate::core::ServerState;
use crate::models::{BookingReceipt, BookingRequest};
use crate::utils::AppResult;

const RESOURCE: &str = "bed_category";

/// POST /api/bookings - 发起预订
///
/// 对应点击空闲床位图标：校验通过则打开确认对话框 (Pending)。
/// 已有待确认预订时返回 409。
pub async fn request(
    State(state): State<ServerState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<PendingBooking>> {
    let pending = state
        .catalog()
        .request_booking(payload.category_id, payload.slot_number)?;
    Ok(Json(pending))
}

/// POST /api/bookings/confirm - 确认预订
///
/// 精确减少 1 个可用床位，发出通知并广播同步信号
pub async fn confirm(State(state): State<ServerState>) -> AppResult<Json<BookingReceipt>> {
    let receipt = state.catalog().confirm_booking()?;

    // 用户可见通知 (对应仪表盘 toast)
    state.notify(
        "Bed Booked",
        format!(
            "You have successfully booked {} bed number {}.",
            receipt.bed_type, receipt.slot_number
        ),
    );

    // 广播同步通知
    let category = state.catalog().get(receipt.category_id)?;
    state.broadcast_sync(
        RESOURCE,
        "booked",
        &receipt.category_id.to_string(),
        Some(&category),
    );

    Ok(Json(receipt))
}

/// 取消结果
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOutcome {
    /// 是否真的清除了一个待确认预订
    pub cancelled: bool,
    /// 被清除的预订 (如果有)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<PendingBooking>,
}

/// POST /api/bookings/cancel - 取消预订
///
/// 关闭对话框，不做任何变更。幂等。
pub async fn cancel(State(state): State<ServerState>) -> AppResult<Json<CancelOutcome>> {
    let booking = state.catalog().cancel_booking();
    Ok(Json(CancelOutcome {
        cancelled: booking.is_some(),
        booking,
    }))
}

/// GET /api/bookings/pending - 查询待确认预订
pub async fn pending(
    State(state): State<ServerState>,
) -> AppResult<Json<Option<PendingBooking>>> {
    Ok(Json(state.catalog().pending_booking()))
}
