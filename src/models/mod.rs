//! 数据模型
//!
//! - [`BedCategory`] - 床位类别实体
//! - [`BedType`] - 床位类型枚举
//! - 请求/响应载荷

pub mod bed_category;
pub mod booking;

pub use bed_category::{AvailabilityUpdate, BedCategory, BedType, seed_catalog};
pub use booking::{BookingReceipt, BookingRequest};
