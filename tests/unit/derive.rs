//! Enums using `#[derive(EnumMapper)]`.

use super::common::{entries, int, text, Access, Priority};
use enum_mapper::{EnumMapper, MappedVariant, UndefinedMapValue};

#[test]
fn test_variants_in_declaration_order() {
    assert_eq!(
        Priority::variants(),
        &[Priority::Low, Priority::Normal, Priority::High, Priority::Unset]
    );
    assert_eq!(
        entries::<Priority>(),
        vec![
            (int(10), text("Low")),
            (int(20), text("Normal")),
            (int(30), text("High")),
            (int(-1), text("Unset")),
        ]
    );
}

#[test]
fn test_variant_values() {
    assert_eq!(Priority::High.db_value(), &int(30));
    assert_eq!(Priority::High.human_value(), &text("High"));
    assert_eq!(Access::Hidden.db_value(), &int(0));
    assert_eq!(Access::Hidden.human_value(), &int(0));
}

#[test]
fn test_variant_from_values() {
    assert_eq!(Priority::from_db(20), Ok(Priority::Normal));
    assert_eq!(Priority::from_human("Unset"), Ok(Priority::Unset));
    assert_eq!(Access::from_db("prv"), Ok(Access::Private));
    assert_eq!(
        Priority::from_db(40),
        Err(UndefinedMapValue::new("Priority", int(40)))
    );
}

#[test]
fn test_variant_and_mapping_agree() {
    for variant in Priority::variants() {
        assert_eq!(
            Priority::from_db_to_human(variant.db_value().clone()),
            Ok(variant.human_value())
        );
        assert_eq!(Priority::from_db(variant.db_value().clone()), Ok(*variant));
    }
}

#[test]
fn test_name_override_shows_in_errors() {
    assert_eq!(Access::mapper_name(), "Visibility");
    let err = Access::from_human_to_db("Secret").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"mapper "Visibility" does not contain a mapping for the value "Secret""#
    );
}

#[test]
fn test_pair_names_are_variant_names() {
    let names: Vec<&str> = Priority::mapping()
        .pairs()
        .iter()
        .map(|pair| pair.name.as_ref())
        .collect();
    assert_eq!(names, vec!["Low", "Normal", "High", "Unset"]);
}
