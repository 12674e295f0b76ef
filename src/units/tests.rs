//! Whole-table consistency properties.
//!
//! The individual tables are easy to drift apart when adding units; these
//! tests pin the cross-table invariants the resolver and converter rely on.

use crate::engine::resolve_unit;
use crate::units::{PREFIXES, REGISTRY, SYNONYMS, TARGETS, is_prefixable, lookup, targets_for};
use crate::{Dimension, convert};

#[test]
fn every_synonym_points_at_a_registry_entry() {
    for (alias, canonical) in SYNONYMS.iter() {
        assert!(
            lookup(canonical).is_some(),
            "alias {alias:?} points at {canonical:?}, which is not registered"
        );
        assert_eq!(*alias, alias.to_lowercase(), "alias {alias:?} must be stored lowercase");
    }
}

#[test]
fn prefix_table_is_ordered_longest_first() {
    let lengths: Vec<usize> = PREFIXES.iter().map(|(symbol, _)| symbol.len()).collect();
    let mut sorted = lengths.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(lengths, sorted, "prefixes must be declared longest symbol first");

    for (symbol, multiplier) in PREFIXES {
        assert!(!symbol.is_empty() && symbol.len() <= 2, "prefix {symbol:?} length");
        // Powers of ten only.
        assert_eq!(*multiplier, 10f64.powi(multiplier.log10().round() as i32), "prefix {symbol:?}");
    }
}

#[test]
fn prefixable_bases_are_registered() {
    for base in ["g", "m", "s", "N", "pc", "yr", "Hz", "eV"] {
        assert!(is_prefixable(base));
        assert!(lookup(base).is_some(), "prefixable base {base:?} must be registered");
    }
    assert!(!is_prefixable("lb"));
    assert!(!is_prefixable("in"));
}

#[test]
fn si_base_units_have_unit_factor() {
    for (symbol, dimension) in [
        ("kg", Dimension::Mass),
        ("N", Dimension::Force),
        ("m", Dimension::Length),
        ("s", Dimension::Time),
        ("J", Dimension::Energy),
        ("rad", Dimension::Angle),
        ("Hz", Dimension::Freq),
    ] {
        let unit = lookup(symbol).unwrap();
        assert_eq!(unit.dimension, dimension);
        assert_eq!(unit.si_factor, 1.0, "{symbol} is the SI base of {dimension}");
    }
}

#[test]
fn every_target_resolves_to_its_lists_dimension() {
    for (dimension, targets) in TARGETS.iter() {
        for target in targets {
            let unit = resolve_unit(target)
                .unwrap_or_else(|| panic!("target {target:?} of {dimension} does not resolve"));
            assert_eq!(
                unit.dimension, *dimension,
                "target {target:?} resolves into the wrong dimension"
            );
            assert!(unit.si_factor > 0.0, "target {target:?} factor must be positive");
        }
    }
}

#[test]
fn every_registry_dimension_has_a_target_list() {
    for (symbol, unit) in REGISTRY.iter() {
        assert!(
            targets_for(unit.dimension).is_some(),
            "{symbol:?} belongs to {} which has no target list",
            unit.dimension
        );
    }
}

#[test]
fn registry_factors_are_finite_and_positive() {
    for (symbol, unit) in REGISTRY.iter() {
        assert!(
            unit.si_factor.is_finite() && unit.si_factor > 0.0,
            "{symbol:?} has factor {}",
            unit.si_factor
        );
    }
}

#[test]
fn conversion_round_trips_every_target_unit() {
    // Converting 1 of any target unit must read back as 1 of itself, within
    // double-precision error.
    for targets in TARGETS.values() {
        for target in targets {
            let report = convert(&format!("1{target}"))
                .unwrap_or_else(|err| panic!("1{target} failed: {err}"));
            let back = report
                .conversions
                .iter()
                .find(|c| c.symbol == *target)
                .unwrap_or_else(|| panic!("{target} missing from its own report"));
            assert!(
                (back.value - 1.0).abs() < 1e-9,
                "round trip through {target}: {}",
                back.value
            );
        }
    }
}

#[test]
fn resolver_round_trips_every_registry_unit() {
    for (symbol, unit) in REGISTRY.iter() {
        let resolved = resolve_unit(symbol)
            .unwrap_or_else(|| panic!("registered symbol {symbol:?} does not resolve"));
        assert_eq!(resolved.dimension, unit.dimension);
        assert_eq!(resolved.si_factor, unit.si_factor);
    }
}
