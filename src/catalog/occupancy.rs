//! 占用网格视图
//!
//! 每个类别渲染 `total` 个离散槽位，1-based 编号。
//! 编号 n 的槽位空闲当且仅当 `n <= available`。
//! 纯读取视图，生成过程不触碰任何状态。

use serde::{Deserialize, Serialize};

use crate::models::{BedCategory, BedType};

/// 槽位状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// 空闲 (可点击预订)
    Free,
    /// 已占用 (不可交互)
    Occupied,
}

/// 单个床位槽位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// 1-based 展示编号
    pub number: u32,
    pub status: SlotStatus,
}

/// 单个类别的占用网格
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOccupancy {
    pub category_id: i64,
    pub bed_type: BedType,
    /// 图标强调色 (展示提示)
    pub accent_color: &'static str,
    pub total: u32,
    pub available: u32,
    pub slots: Vec<Slot>,
}

impl CategoryOccupancy {
    /// 从类别记录生成网格
    pub fn from_category(category: &BedCategory) -> Self {
        let slots = (1..=category.total)
            .map(|number| Slot {
                number,
                status: if category.is_slot_free(number) {
                    SlotStatus::Free
                } else {
                    SlotStatus::Occupied
                },
            })
            .collect();

        Self {
            category_id: category.id,
            bed_type: category.bed_type,
            accent_color: category.bed_type.accent_color(),
            total: category.total,
            available: category.available,
            slots,
        }
    }
}
