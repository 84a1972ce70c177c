use super::*;

#[test]
fn test_booking_happy_path() {
    let manager = create_test_manager();

    // ICU: available = 5，点击槽位 4 (空闲)
    let pending = manager.request_booking(2, 4).unwrap();
    assert_eq!(pending.category_id, 2);
    assert_eq!(pending.bed_type, BedType::Icu);
    assert_eq!(pending.slot_number, 4);
    assert_eq!(manager.pending_booking().as_ref(), Some(&pending));

    let receipt = manager.confirm_booking().unwrap();
    assert_eq!(receipt.slot_number, 4);
    assert_eq!(receipt.remaining, 4);

    let icu = manager.get(2).unwrap();
    assert_eq!(icu.available, 4);
    assert_eq!(icu.total, 20); // total 不变

    // 确认后状态机回到 Idle
    assert!(manager.pending_booking().is_none());
}

#[test]
fn test_occupied_slot_rejected_without_state_change() {
    let manager = create_test_manager();
    let before = manager.list();

    // ICU: available = 5，槽位 6 已占用
    let result = manager.request_booking(2, 6);
    assert_eq!(result, Err(CatalogError::SlotOccupied(6)));

    // 无对话框，无状态变更
    assert!(manager.pending_booking().is_none());
    assert_eq!(manager.list(), before);
}

#[test]
fn test_no_reentrant_booking() {
    let manager = create_test_manager();

    manager.request_booking(1, 1).unwrap();
    let result = manager.request_booking(2, 1);
    assert_eq!(result, Err(CatalogError::BookingInProgress));

    // 原有的待确认预订仍然有效
    assert_eq!(manager.pending_booking().unwrap().category_id, 1);
}

#[test]
fn test_cancel_clears_without_mutation() {
    let manager = create_test_manager();
    let before = manager.list();

    manager.request_booking(3, 1).unwrap();
    let cancelled = manager.cancel_booking().unwrap();
    assert_eq!(cancelled.category_id, 3);

    assert!(manager.pending_booking().is_none());
    assert_eq!(manager.list(), before);

    // 幂等：再次取消返回 None
    assert!(manager.cancel_booking().is_none());
}

#[test]
fn test_confirm_without_pending() {
    let manager = create_test_manager();

    let result = manager.confirm_booking();
    assert_eq!(result, Err(CatalogError::NoPendingBooking));
}

#[test]
fn test_confirm_rechecks_floor() {
    let manager = create_test_manager();

    // Emergency: available = 2，发起预订后把可用数编辑为 0
    manager.request_booking(3, 1).unwrap();
    manager.update_availability(3, 0).unwrap();

    // 对话框仍然打开，但确认时重新检查下限
    let result = manager.confirm_booking();
    assert_eq!(result, Err(CatalogError::NoAvailability(3)));
    assert_eq!(manager.get(3).unwrap().available, 0);

    // Pending 保留，用户可以取消
    assert!(manager.pending_booking().is_some());
    manager.cancel_booking().unwrap();
}

#[test]
fn test_booking_after_cancel_allowed() {
    let manager = create_test_manager();

    manager.request_booking(1, 1).unwrap();
    manager.cancel_booking();

    // 取消后状态机回到 Idle，可以发起新预订
    let pending = manager.request_booking(2, 2).unwrap();
    assert_eq!(pending.category_id, 2);
}

#[test]
fn test_release_after_booking_round_trip() {
    let manager = create_test_manager();

    manager.request_booking(5, 1).unwrap();
    manager.confirm_booking().unwrap();
    assert_eq!(manager.get(5).unwrap().available, 7);

    manager.release_bed(5).unwrap();
    assert_eq!(manager.get(5).unwrap().available, 8);
}
