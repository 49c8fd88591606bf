//! Listing, exclusion and random selection through the trait surface.

use std::collections::HashSet;

use super::common::{int, text, OrderState, Priority, Status};
use enum_mapper::{Definition, EnumMapper, MapValue, Mapping, Markers};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_allowed_values_preserve_order() {
    assert_eq!(
        Priority::allowed_db_values(&[int(20)]),
        vec![&int(10), &int(30), &int(-1)]
    );
    assert_eq!(
        OrderState::allowed_human_values(&[text("Paid"), text("New order")]),
        vec![&text("Shipped"), &text("Cancelled")]
    );
}

#[test]
fn test_exclusions_use_exact_equality() {
    // "1" is not 1
    assert_eq!(Status::allowed_db_values(&[text("1")]).len(), 2);
    // Excluding a human value from the storage side changes nothing
    assert_eq!(Status::allowed_db_values(&[text("active")]).len(), 2);
}

#[test]
fn test_excluding_everything_leaves_nothing() {
    let all: Vec<MapValue> = Priority::allowed_db_values(&[]).into_iter().cloned().collect();
    assert!(Priority::allowed_db_values(&all).is_empty());
    assert_eq!(Priority::random_db_value(&all), None);
}

#[test]
fn test_random_db_value_is_allowed() {
    let except = [int(10), int(30)];
    let allowed = Priority::allowed_db_values(&except);
    for _ in 0..50 {
        let picked = Priority::random_db_value(&except).unwrap();
        assert!(allowed.contains(&picked));
    }
}

#[test]
fn test_random_selection_is_reproducible_with_a_seed() {
    let picks = |seed: u64| -> Vec<&'static MapValue> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .filter_map(|_| OrderState::random_human_value_with(&mut rng, &[]))
            .collect()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn test_random_selection_covers_candidates() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        if let Some(value) = Priority::random_human_value_with(&mut rng, &[text("Unset")]) {
            seen.insert(value.clone());
        }
    }
    let expected: HashSet<MapValue> = [text("Low"), text("Normal"), text("High")].into_iter().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_runtime_definition_matches_declared_one() {
    let mapping = Mapping::new(
        Definition::from_constants("Status", Status::CONSTANTS, &Markers::default()).unwrap(),
    );
    assert_eq!(mapping.map(), Status::map());
    assert_eq!(mapping.pairs(), Status::mapping().pairs());
}

#[test]
fn test_mapping_serializes_pairs() {
    let json = serde_json::to_value(Status::mapping()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Status",
            "pairs": [
                { "name": "ACTIVE", "db": 1, "human": "active" },
                { "name": "INACTIVE", "db": 0, "human": "inactive" }
            ]
        })
    );
}
