//! 床位目录管理
//!
//! # 职责
//!
//! - 持有唯一的共享可变资源：床位类别序列 (播种一次，按 `id` 查找，保持插入顺序)
//! - 显式更新接口：所有变更都经过校验，`0 <= available <= total` 全程成立
//! - 预订确认流程：显式两状态机 {Idle, Pending}，禁止重入、禁止穿透下限
//! - 占用网格：按类别生成 1-based 槽位视图 (纯读取)
//!
//! # 操作流
//!
//! ```text
//! request_booking(category_id, slot)
//!     ├─ 类别存在？槽位在范围内？槽位空闲？无其他待确认预订？
//!     └─ Idle -> Pending(category_id, slot)
//! confirm_booking()
//!     ├─ Pending 存在？available > 0？
//!     ├─ available -= 1
//!     └─ Pending -> Idle，返回回执
//! cancel_booking()
//!     └─ Pending -> Idle，无任何变更
//! ```

pub mod booking;
pub mod error;
pub mod manager;
pub mod occupancy;

pub use booking::{BookingState, PendingBooking};
pub use error::{CatalogError, CatalogResult};
pub use manager::CatalogManager;
pub use occupancy::{CategoryOccupancy, Slot, SlotStatus};

#[cfg(test)]
mod tests;
