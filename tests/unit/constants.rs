//! Mappers declared with `enum_constants!`.

use super::common::{entries, int, text, Color, Nothing, OrderState, Status};
use enum_mapper::{EnumMapper, UndefinedMapValue};

#[test]
fn test_status_scenario() {
    assert_eq!(
        entries::<Status>(),
        vec![(int(1), text("active")), (int(0), text("inactive"))]
    );
    assert_eq!(Status::from_db_to_human(1), Ok(&text("active")));
    assert_eq!(Status::from_human_to_db("inactive"), Ok(&int(0)));
    assert_eq!(
        Status::from_db_to_human(99),
        Err(UndefinedMapValue::new("Status", int(99)))
    );
    assert_eq!(Status::allowed_db_values(&[int(0)]), vec![&int(1)]);
}

#[test]
fn test_associated_constants_keep_their_types() {
    let active: i64 = Status::DB_ACTIVE;
    let label: &'static str = Status::HUMAN_ACTIVE;
    assert_eq!(active, 1);
    assert_eq!(label, "active");
    assert_eq!(OrderState::DB_CANCELLED, -1);
    assert_eq!(OrderState::SCHEMA_VERSION, 3);
}

#[test]
fn test_constant_table_lists_every_declaration() {
    let names: Vec<&str> = OrderState::CONSTANTS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "HUMAN_NEW");
    assert_eq!(names[8], "SCHEMA_VERSION");
}

#[test]
fn test_map_follows_storage_declaration_order() {
    assert_eq!(
        entries::<OrderState>(),
        vec![
            (text("N"), text("New order")),
            (text("P"), text("Paid")),
            (text("S"), text("Shipped")),
            (int(-1), text("Cancelled")),
        ]
    );
}

#[test]
fn test_unmarked_constants_stay_out_of_the_map() {
    assert_eq!(OrderState::map().len(), 4);
    assert!(OrderState::from_db_to_human(3).is_err());
}

#[test]
fn test_mixed_kinds_compare_exactly() {
    assert_eq!(OrderState::from_db_to_human(-1), Ok(&text("Cancelled")));
    assert!(OrderState::from_db_to_human("-1").is_err());
    assert!(Status::from_db_to_human("1").is_err());
}

#[test]
fn test_custom_markers() {
    assert_eq!(Color::from_db_to_human("g"), Ok(&text("Green")));
    assert_eq!(Color::from_human_to_db("Red"), Ok(&text("r")));
    assert_eq!(Color::CODE_RED, "r");
    assert_eq!(Color::mapper_name(), "Color");
}

#[test]
fn test_empty_table() {
    assert!(Nothing::map().is_empty());
    assert!(Nothing::allowed_db_values(&[]).is_empty());
    assert_eq!(Nothing::random_db_value(&[]), None);
    assert_eq!(Nothing::random_human_value(&[]), None);
    assert!(Nothing::from_db_to_human(0).is_err());
}

#[test]
fn test_mapping_is_cached_per_type() {
    let first = Status::mapping() as *const _;
    let second = Status::mapping() as *const _;
    assert_eq!(first, second);
    assert_ne!(Status::mapping().name(), OrderState::mapping().name());
}
