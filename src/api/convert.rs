//! 领域错误到 API 错误的映射

use crate::catalog::CatalogError;
use crate::utils::AppError;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::CategoryNotFound(_) => AppError::not_found(err.to_string()),

            // 客户端给出的数值/槽位无效
            CatalogError::ExceedsCapacity { .. } | CatalogError::SlotOutOfRange { .. } => {
                AppError::validation(err.to_string())
            }

            // 与当前状态冲突
            CatalogError::SlotOccupied(_) | CatalogError::BookingInProgress => {
                AppError::conflict(err.to_string())
            }

            // 业务规则：下限/上限保护、空状态机
            CatalogError::NoPendingBooking
            | CatalogError::NoAvailability(_)
            | CatalogError::NoOccupiedBeds(_) => AppError::business_rule(err.to_string()),

            // 播种错误只在启动路径出现
            CatalogError::DuplicateId(_) | CatalogError::InvalidSeed(_) => {
                AppError::internal(err.to_string())
            }
        }
    }
}
