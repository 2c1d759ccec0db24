// Host-side tests for the canvas attribute overrides.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod overrides {
    include!("../src/overrides.rs");
}

use constellation_core::{ConnectionStrategy, ConstellationConfig};
use overrides::*;

#[test]
fn no_attributes_keeps_stock_config() {
    let cfg = apply_overrides(ConstellationConfig::default(), &Overrides::default());
    assert_eq!(cfg.dot_count, 30);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.connection_strategy, ConnectionStrategy::Pairwise);
}

#[test]
fn valid_attributes_are_applied() {
    let cfg = apply_overrides(
        ConstellationConfig::default(),
        &Overrides {
            dots: Some(" 120 "),
            seed: Some("42"),
            strategy: Some("grid"),
        },
    );
    assert_eq!(cfg.dot_count, 120);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.connection_strategy, ConnectionStrategy::Grid);
}

#[test]
fn unparsable_attributes_are_ignored() {
    let cfg = apply_overrides(
        ConstellationConfig::default(),
        &Overrides {
            dots: Some("lots"),
            seed: Some("-1"),
            strategy: Some("quadtree"),
        },
    );
    assert_eq!(cfg.dot_count, 30);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.connection_strategy, ConnectionStrategy::Pairwise);
}

#[test]
fn strategy_names() {
    assert_eq!(parse_strategy("pairwise"), Some(ConnectionStrategy::Pairwise));
    assert_eq!(parse_strategy("all"), Some(ConnectionStrategy::Pairwise));
    assert_eq!(parse_strategy(" grid"), Some(ConnectionStrategy::Grid));
    assert_eq!(parse_strategy("Grid"), None);
}
