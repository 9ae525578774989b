//! Tests for rental-model types.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rental_model::{City, PriceRange, Selection, Variable, VariableKind};

#[test]
fn classification_sets_are_disjoint_and_cover_selector() {
    let mut seen = BTreeSet::new();
    let mut total = 0usize;
    for kind in VariableKind::ALL {
        for variable in kind.members() {
            total += 1;
            assert!(
                seen.insert(variable.column()),
                "{variable} appears in more than one set"
            );
        }
    }
    let selector: BTreeSet<&str> = Variable::all().map(Variable::column).collect();
    assert_eq!(seen, selector);
    assert_eq!(total, 22);
}

#[test]
fn set_sizes() {
    assert_eq!(VariableKind::Numeric.members().len(), 4);
    assert_eq!(VariableKind::Categorical.members().len(), 5);
    assert_eq!(VariableKind::Score.members().len(), 7);
    assert_eq!(VariableKind::Binary.members().len(), 5);
    assert_eq!(VariableKind::Price.members(), &[Variable::PriceMxn]);
}

#[test]
fn every_city_has_one_rate() {
    let rates: Vec<f64> = City::ALL.iter().map(|city| city.exchange_rate()).collect();
    assert_eq!(rates, vec![3.5, 18.0, 18.0, 1.0]);
}

#[test]
fn selection_serializes() {
    let selection = Selection::new(Variable::PriceMxn)
        .with_map_city(City::Berlin)
        .with_price_range(Some(PriceRange::new(10.0, 20.0)));
    let json = serde_json::to_string(&selection).expect("serialize selection");
    assert!(json.contains("\"price_mxn\""));
    let round: Selection = serde_json::from_str(&json).expect("deserialize selection");
    assert_eq!(round, selection);
}

#[test]
fn deserializing_checks_size_bounds() {
    let json = serde_json::to_string(&Selection::new(Variable::Beds))
        .expect("serialize selection")
        .replace("\"width\":10", "\"width\":30");
    let err = serde_json::from_str::<Selection>(&json).expect_err("width 30 is out of range");
    assert!(err.to_string().contains("width must be between 4 and 20, got 30"));
}

proptest! {
    #[test]
    fn variable_names_round_trip(index in 0usize..22) {
        let variable = Variable::all().nth(index).unwrap();
        prop_assert_eq!(variable.column().parse::<Variable>(), Ok(variable));
    }

    #[test]
    fn width_accepts_exactly_the_slider_range(width in 0u32..40) {
        let mut selection = Selection::new(Variable::Beds);
        let accepted = selection.set_width(width).is_ok();
        prop_assert_eq!(accepted, (4..=20).contains(&width));
    }
}
