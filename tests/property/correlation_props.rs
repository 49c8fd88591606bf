//! Name correlation of constant tables: `DB_X` pairs with `HUMAN_X` no matter
//! where either is declared.

use super::common::{OrderState, Status};
use super::pairs_strategy;
use enum_mapper::{Definition, DefinitionError, EnumMapper, MapValue, Markers};
use proptest::prelude::*;

const DB_NAMES: [&str; 12] = [
    "DB_A", "DB_B", "DB_C", "DB_D", "DB_E", "DB_F", "DB_G", "DB_H", "DB_I", "DB_J", "DB_K", "DB_L",
];
const HUMAN_NAMES: [&str; 12] = [
    "HUMAN_A", "HUMAN_B", "HUMAN_C", "HUMAN_D", "HUMAN_E", "HUMAN_F", "HUMAN_G", "HUMAN_H",
    "HUMAN_I", "HUMAN_J", "HUMAN_K", "HUMAN_L",
];

/// A shuffled constant table, and the storage→human entries it must produce.
fn constant_table_strategy(
) -> impl Strategy<Value = (Vec<(&'static str, MapValue)>, Vec<(MapValue, MapValue)>)> {
    pairs_strategy().prop_flat_map(|pairs| {
        let mut constants = Vec::with_capacity(pairs.len() * 2);
        for (i, pair) in pairs.iter().enumerate() {
            constants.push((DB_NAMES[i], pair.db.clone()));
            constants.push((HUMAN_NAMES[i], pair.human.clone()));
        }
        let table = Just(constants).prop_shuffle();
        (table, Just(pairs))
    })
    .prop_map(|(constants, pairs)| {
        // Map order follows where the DB_ constants landed after shuffling
        let mut expected: Vec<(usize, MapValue, MapValue)> = pairs
            .into_iter()
            .enumerate()
            .map(|(i, pair)| {
                let position = constants
                    .iter()
                    .position(|(name, _)| *name == DB_NAMES[i])
                    .unwrap_or(usize::MAX);
                (position, pair.db, pair.human)
            })
            .collect();
        expected.sort_by_key(|(position, _, _)| *position);
        let expected: Vec<(MapValue, MapValue)> = expected
            .into_iter()
            .map(|(_, db, human)| (db, human))
            .collect();
        (constants, expected)
    })
}

proptest! {
    /// Property: correlation ignores declaration order and keeps storage order.
    #[test]
    fn prop_correlation_is_order_independent((constants, expected) in constant_table_strategy()) {
        let definition = Definition::from_constants("Shuffled", &constants, &Markers::default()).unwrap();
        let actual: Vec<(MapValue, MapValue)> = definition
            .pairs()
            .iter()
            .map(|pair| (pair.db.clone(), pair.human.clone()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: map size equals the number of storage constants.
    #[test]
    fn prop_map_size_counts_storage_constants((constants, _) in constant_table_strategy()) {
        let storage = constants.iter().filter(|(name, _)| name.starts_with("DB_")).count();
        let definition = Definition::from_constants("Shuffled", &constants, &Markers::default()).unwrap();
        prop_assert_eq!(definition.pairs().len(), storage);
    }

    /// Property: removing any human constant is a definition error naming its twin.
    #[test]
    fn prop_dangling_storage_constant_is_rejected(
        (constants, _) in constant_table_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let humans: Vec<usize> = constants
            .iter()
            .enumerate()
            .filter(|(_, (name, _))| name.starts_with("HUMAN_"))
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!humans.is_empty());

        let removed = humans[pick.index(humans.len())];
        let mut broken = constants.clone();
        let (human_name, _) = broken.remove(removed);

        let err = Definition::from_constants("Broken", &broken, &Markers::default()).unwrap_err();
        let expected_db = human_name.replacen("HUMAN_", "DB_", 1);
        prop_assert!(
            matches!(&err, DefinitionError::MissingHuman { constant, expected, .. }
                if *constant == expected_db && expected == human_name),
            "unexpected error: {}", err
        );
    }
}

#[test]
fn test_declared_fixtures_round_trip() {
    for (db, human) in Status::map() {
        assert_eq!(Status::from_human_to_db(human.clone()), Ok(db));
    }
    for (db, human) in OrderState::map() {
        assert_eq!(OrderState::from_db_to_human(db.clone()), Ok(human));
    }
}
