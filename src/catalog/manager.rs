//! CatalogManager - 床位目录状态管理
//!
//! 目录是本服务唯一的共享可变资源，由 CatalogManager 独占持有。
//! 所有变更都经过显式校验接口，任何时刻都满足
//! `0 <= available <= total`。
//!
//! # 查找键
//!
//! 所有查找按唯一 `id` 进行，不按展示标签 `bed_type` 匹配，
//! 避免两个类别共用标签时被同时更新。插入顺序保留，用于展示。

use parking_lot::RwLock;
use tracing::info;

use super::booking::{BookingState, PendingBooking};
use super::error::{CatalogError, CatalogResult};
use super::occupancy::CategoryOccupancy;
use crate::models::{BedCategory, BookingReceipt, seed_catalog};

/// 床位目录管理器
///
/// # 锁顺序
///
/// 需要同时持有两把锁时，先 `booking` 后 `beds`。
pub struct CatalogManager {
    /// 床位类别序列 (插入顺序即展示顺序)
    beds: RwLock<Vec<BedCategory>>,
    /// 预订确认状态机
    booking: RwLock<BookingState>,
}

impl std::fmt::Debug for CatalogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogManager")
            .field("categories", &self.beds.read().len())
            .field("booking", &*self.booking.read())
            .finish()
    }
}

impl CatalogManager {
    /// 创建管理器并播种固定目录
    pub fn new() -> Self {
        // 种子数据是静态常量，校验不会失败
        Self::with_catalog(seed_catalog()).expect("seed catalog must be valid")
    }

    /// 从给定目录创建管理器
    ///
    /// 校验 `id` 唯一且每个类别满足 `available <= total`
    pub fn with_catalog(catalog: Vec<BedCategory>) -> CatalogResult<Self> {
        for (i, category) in catalog.iter().enumerate() {
            if catalog[..i].iter().any(|c| c.id == category.id) {
                return Err(CatalogError::DuplicateId(category.id));
            }
            if category.available > category.total {
                return Err(CatalogError::InvalidSeed(category.id));
            }
        }
        info!(categories = catalog.len(), "Bed catalog seeded");
        Ok(Self {
            beds: RwLock::new(catalog),
            booking: RwLock::new(BookingState::Idle),
        })
    }

    /// 全部类别 (插入顺序)
    pub fn list(&self) -> Vec<BedCategory> {
        self.beds.read().clone()
    }

    /// 按 ID 查找单个类别
    pub fn get(&self, id: i64) -> CatalogResult<BedCategory> {
        self.beds
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CatalogError::CategoryNotFound(id))
    }

    /// 更新可用床位数
    ///
    /// 精确替换目标类别的 `available`，其余类别和字段不动。
    /// u32 载荷在解析层排除了负数；这里校验上限 `value <= total`。
    pub fn update_availability(&self, id: i64, value: u32) -> CatalogResult<BedCategory> {
        let mut beds = self.beds.write();
        let category = beds
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CatalogError::CategoryNotFound(id))?;

        if value > category.total {
            return Err(CatalogError::ExceedsCapacity {
                value,
                total: category.total,
            });
        }

        category.available = value;
        info!(
            category_id = id,
            bed_type = %category.bed_type,
            available = value,
            "Bed availability updated"
        );
        Ok(category.clone())
    }

    /// 归还床位 (出院流程)
    ///
    /// `available += 1`，上限为 `total`。`total` 运行期永不变。
    pub fn release_bed(&self, id: i64) -> CatalogResult<BedCategory> {
        let mut beds = self.beds.write();
        let category = beds
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CatalogError::CategoryNotFound(id))?;

        if category.available >= category.total {
            return Err(CatalogError::NoOccupiedBeds(id));
        }

        category.available += 1;
        info!(
            category_id = id,
            bed_type = %category.bed_type,
            available = category.available,
            "Bed released"
        );
        Ok(category.clone())
    }

    /// 占用网格
    ///
    /// `category_id` 为 None 时返回全部类别 ("All" 标签页)，
    /// 否则仅返回指定类别。纯读取，不变更任何状态。
    pub fn occupancy(&self, category_id: Option<i64>) -> CatalogResult<Vec<CategoryOccupancy>> {
        let beds = self.beds.read();
        match category_id {
            None => Ok(beds.iter().map(CategoryOccupancy::from_category).collect()),
            Some(id) => {
                let category = beds
                    .iter()
                    .find(|c| c.id == id)
                    .ok_or(CatalogError::CategoryNotFound(id))?;
                Ok(vec![CategoryOccupancy::from_category(category)])
            }
        }
    }

    /// 当前待确认的预订 (如果有)
    pub fn pending_booking(&self) -> Option<PendingBooking> {
        self.booking.read().pending().cloned()
    }

    /// 发起预订 (点击空闲槽位，打开确认对话框)
    ///
    /// 校验顺序：无重入 -> 类别存在 -> 槽位在范围内 -> 槽位空闲
    pub fn request_booking(&self, category_id: i64, slot_number: u32) -> CatalogResult<PendingBooking> {
        let mut booking = self.booking.write();
        if !booking.is_idle() {
            return Err(CatalogError::BookingInProgress);
        }

        let beds = self.beds.read();
        let category = beds
            .iter()
            .find(|c| c.id == category_id)
            .ok_or(CatalogError::CategoryNotFound(category_id))?;

        if slot_number < 1 || slot_number > category.total {
            return Err(CatalogError::SlotOutOfRange {
                slot_number,
                total: category.total,
            });
        }
        if !category.is_slot_free(slot_number) {
            return Err(CatalogError::SlotOccupied(slot_number));
        }

        let pending = PendingBooking {
            category_id,
            bed_type: category.bed_type,
            slot_number,
            requested_at: chrono::Utc::now().timestamp_millis(),
        };
        *booking = BookingState::Pending(pending.clone());

        info!(
            category_id,
            bed_type = %pending.bed_type,
            slot_number,
            "Booking requested, awaiting confirmation"
        );
        Ok(pending)
    }

    /// 确认预订
    ///
    /// 确认时重新检查 `available > 0`，即使对话框打开期间
    /// 可用数被编辑过也不会把计数减到下限以下。
    pub fn confirm_booking(&self) -> CatalogResult<BookingReceipt> {
        let mut booking = self.booking.write();
        let pending = booking.pending().cloned().ok_or(CatalogError::NoPendingBooking)?;

        let mut beds = self.beds.write();
        let category = beds
            .iter_mut()
            .find(|c| c.id == pending.category_id)
            .ok_or(CatalogError::CategoryNotFound(pending.category_id))?;

        if category.available == 0 {
            // 保留 Pending 状态，调用方可以取消
            return Err(CatalogError::NoAvailability(pending.category_id));
        }

        category.available -= 1;
        let receipt = BookingReceipt {
            category_id: category.id,
            bed_type: category.bed_type,
            slot_number: pending.slot_number,
            remaining: category.available,
            confirmed_at: chrono::Utc::now().timestamp_millis(),
        };
        *booking = BookingState::Idle;

        info!(
            category_id = receipt.category_id,
            bed_type = %receipt.bed_type,
            slot_number = receipt.slot_number,
            remaining = receipt.remaining,
            "Booking confirmed"
        );
        Ok(receipt)
    }

    /// 取消预订 (关闭对话框，不做任何变更)
    ///
    /// 幂等：没有待确认预订时返回 None
    pub fn cancel_booking(&self) -> Option<PendingBooking> {
        let cancelled = self.booking.write().take();
        if let Some(p) = &cancelled {
            info!(
                category_id = p.category_id,
                slot_number = p.slot_number,
                "Booking cancelled"
            );
        }
        cancelled
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}
