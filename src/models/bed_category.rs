//! Bed Category Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// 床位类型
///
/// 线上表示使用前端展示标签 ("ICU" 而非 "Icu")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedType {
    General,
    #[serde(rename = "ICU")]
    Icu,
    Emergency,
    Pediatric,
    Maternity,
}

impl BedType {
    /// 展示标签
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Icu => "ICU",
            Self::Emergency => "Emergency",
            Self::Pediatric => "Pediatric",
            Self::Maternity => "Maternity",
        }
    }

    /// 仪表盘图标强调色 (展示提示，由客户端消费)
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::General => "blue",
            Self::Icu => "red",
            Self::Emergency => "yellow",
            Self::Pediatric => "green",
            Self::Maternity => "pink",
        }
    }
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 床位类别实体
///
/// # 不变式
///
/// `0 <= available <= total`，由 [`CatalogManager`](crate::catalog::CatalogManager)
/// 的更新接口强制保证。`id` 是唯一查找键；`bed_type` 只是展示标签。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedCategory {
    /// 唯一 ID (稳定，播种时分配)
    pub id: i64,
    /// 床位类型
    #[serde(rename = "type")]
    pub bed_type: BedType,
    /// 总床位数 (运行期不变)
    pub total: u32,
    /// 当前可用床位数
    pub available: u32,
    /// 每晚价格
    pub price: f64,
    /// 入住时间 (展示字符串)
    pub check_in_time: String,
    /// 附加说明 (展示字符串)
    pub additional_details: String,
}

impl BedCategory {
    /// 1-based 编号的槽位是否空闲
    ///
    /// 槽位 n 空闲当且仅当 `n <= available`
    pub fn is_slot_free(&self, slot_number: u32) -> bool {
        slot_number >= 1 && slot_number <= self.available
    }
}

/// 可用性更新载荷 (PUT /api/beds/{id}/availability)
///
/// u32 类型在解析层排除负数和非数字输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    pub available: u32,
}

/// 初始床位目录
///
/// 与原始仪表盘一致的固定种子数据。运行期不增删类别。
pub fn seed_catalog() -> Vec<BedCategory> {
    vec![
        BedCategory {
            id: 1,
            bed_type: BedType::General,
            total: 100,
            available: 30,
            price: 200.0,
            check_in_time: "2:00 PM".to_string(),
            additional_details: "Standard amenities, shared bathroom".to_string(),
        },
        BedCategory {
            id: 2,
            bed_type: BedType::Icu,
            total: 20,
            available: 5,
            price: 1000.0,
            check_in_time: "Immediate".to_string(),
            additional_details: "24/7 monitoring, specialized equipment".to_string(),
        },
        BedCategory {
            id: 3,
            bed_type: BedType::Emergency,
            total: 10,
            available: 2,
            price: 500.0,
            check_in_time: "Immediate".to_string(),
            additional_details: "Rapid response team, triage priority".to_string(),
        },
        BedCategory {
            id: 4,
            bed_type: BedType::Pediatric,
            total: 30,
            available: 10,
            price: 300.0,
            check_in_time: "1:00 PM".to_string(),
            additional_details: "Child-friendly environment, parent accommodation".to_string(),
        },
        BedCategory {
            id: 5,
            bed_type: BedType::Maternity,
            total: 25,
            available: 8,
            price: 400.0,
            check_in_time: "12:00 PM".to_string(),
            additional_details: "Labor and delivery support, newborn care".to_string(),
        },
    ]
}
