use super::*;
use crate::models::{BedCategory, BedType, seed_catalog};

mod test_core;
mod test_flows;

fn create_test_manager() -> CatalogManager {
    CatalogManager::new()
}

/// 构造一个两类别的小目录，便于边界测试
fn tiny_catalog() -> Vec<BedCategory> {
    vec![
        BedCategory {
            id: 1,
            bed_type: BedType::General,
            total: 3,
            available: 2,
            price: 100.0,
            check_in_time: "2:00 PM".to_string(),
            additional_details: "Test ward".to_string(),
        },
        BedCategory {
            id: 2,
            bed_type: BedType::Icu,
            total: 1,
            available: 0,
            price: 900.0,
            check_in_time: "Immediate".to_string(),
            additional_details: "Test ICU".to_string(),
        },
    ]
}
