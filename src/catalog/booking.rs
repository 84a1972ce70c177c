//! 预订确认状态机
//!
//! 仪表盘上的确认对话框建模为显式两状态机：
//! 同一时刻最多一个预订待确认，"不可重入" 由状态本身保证，
//! 而不是依赖 UI 组件的默认行为。

use serde::{Deserialize, Serialize};

use crate::models::BedType;

/// 待确认的预订
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    /// 床位类别 ID
    pub category_id: i64,
    /// 床位类型 (回执展示用)
    pub bed_type: BedType,
    /// 最初点击的 1-based 槽位编号
    pub slot_number: u32,
    /// 请求时间 (Unix 毫秒)
    pub requested_at: i64,
}

/// 预订流程状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BookingState {
    /// 无待确认预订
    #[default]
    Idle,
    /// 一个预订等待确认 (对话框打开)
    Pending(PendingBooking),
}

impl BookingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// 当前待确认的预订 (如果有)
    pub fn pending(&self) -> Option<&PendingBooking> {
        match self {
            Self::Idle => None,
            Self::Pending(p) => Some(p),
        }
    }

    /// 清空状态，返回之前待确认的预订
    pub fn take(&mut self) -> Option<PendingBooking> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending(p) => Some(p),
        }
    }
}
