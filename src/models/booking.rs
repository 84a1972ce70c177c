//! Booking Payloads

use serde::{Deserialize, Serialize};

use super::BedType;

/// 预订请求载荷 (POST /api/bookings)
///
/// 对应仪表盘上点击某个空闲床位图标
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// 床位类别 ID
    pub category_id: i64,
    /// 1-based 槽位编号 (展示编号)
    pub slot_number: u32,
}

/// 预订回执 (POST /api/bookings/confirm 的响应)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    /// 床位类别 ID
    pub category_id: i64,
    /// 床位类型
    pub bed_type: BedType,
    /// 最初点击的槽位编号
    pub slot_number: u32,
    /// 确认后剩余可用床位数
    pub remaining: u32,
    /// 确认时间 (Unix 毫秒)
    pub confirmed_at: i64,
}
