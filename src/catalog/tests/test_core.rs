use super::*;

#[test]
fn test_seed_respects_capacity_invariant() {
    let manager = create_test_manager();

    let catalog = manager.list();
    assert_eq!(catalog.len(), 5);
    for category in &catalog {
        assert!(
            category.available <= category.total,
            "category {} seeded with available > total",
            category.id
        );
    }
}

#[test]
fn test_seed_preserves_insertion_order() {
    let manager = create_test_manager();

    let types: Vec<BedType> = manager.list().iter().map(|c| c.bed_type).collect();
    assert_eq!(
        types,
        vec![
            BedType::General,
            BedType::Icu,
            BedType::Emergency,
            BedType::Pediatric,
            BedType::Maternity,
        ]
    );
}

#[test]
fn test_get_by_id() {
    let manager = create_test_manager();

    let icu = manager.get(2).unwrap();
    assert_eq!(icu.bed_type, BedType::Icu);
    assert_eq!(icu.total, 20);
    assert_eq!(icu.available, 5);

    assert_eq!(manager.get(99), Err(CatalogError::CategoryNotFound(99)));
}

#[test]
fn test_update_availability_targets_single_category() {
    let manager = create_test_manager();
    let before = manager.list();

    // ICU 更新为 12
    let updated = manager.update_availability(2, 12).unwrap();
    assert_eq!(updated.available, 12);
    assert_eq!(updated.total, 20);

    // 其余类别逐字段不变
    let after = manager.list();
    for (b, a) in before.iter().zip(after.iter()) {
        if b.id == 2 {
            assert_eq!(a.available, 12);
            assert_eq!(a.total, b.total);
            assert_eq!(a.price, b.price);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_update_availability_unknown_category() {
    let manager = create_test_manager();

    let result = manager.update_availability(42, 5);
    assert_eq!(result, Err(CatalogError::CategoryNotFound(42)));
}

#[test]
fn test_release_bed_increments_until_full() {
    let manager = CatalogManager::with_catalog(tiny_catalog()).unwrap();

    let category = manager.release_bed(1).unwrap();
    assert_eq!(category.available, 3);

    // 已满员，不能越过上限
    let result = manager.release_bed(1);
    assert_eq!(result, Err(CatalogError::NoOccupiedBeds(1)));
    assert_eq!(manager.get(1).unwrap().available, 3);
}

#[test]
fn test_duplicate_seed_id_rejected() {
    let mut catalog = tiny_catalog();
    catalog[1].id = 1;

    let result = CatalogManager::with_catalog(catalog);
    assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
}

#[test]
fn test_invalid_seed_rejected() {
    let mut catalog = tiny_catalog();
    catalog[0].available = catalog[0].total + 1;

    let result = CatalogManager::with_catalog(catalog);
    assert!(matches!(result, Err(CatalogError::InvalidSeed(1))));
}

#[test]
fn test_seed_matches_dashboard_data() {
    let catalog = seed_catalog();

    let general = &catalog[0];
    assert_eq!(general.total, 100);
    assert_eq!(general.available, 30);
    assert_eq!(general.price, 200.0);
    assert_eq!(general.check_in_time, "2:00 PM");
}
