use thiserror::Error;

/// 目录操作错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Bed category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Availability {value} exceeds total capacity {total}")]
    ExceedsCapacity { value: u32, total: u32 },

    #[error("Slot {slot_number} is out of range (category has {total} beds)")]
    SlotOutOfRange { slot_number: u32, total: u32 },

    #[error("Slot {0} is already occupied")]
    SlotOccupied(u32),

    #[error("Another booking is already pending confirmation")]
    BookingInProgress,

    #[error("No booking is pending confirmation")]
    NoPendingBooking,

    #[error("No beds available in category {0}")]
    NoAvailability(i64),

    #[error("All beds in category {0} are already free")]
    NoOccupiedBeds(i64),

    #[error("Duplicate category id in seed data: {0}")]
    DuplicateId(i64),

    #[error("Seed data violates capacity invariant for category {0}")]
    InvalidSeed(i64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
