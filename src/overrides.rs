// Canvas `data-*` attributes that tweak the stock configuration.
// Kept free of web-sys so host tests can include it directly.

use constellation_core::{ConnectionStrategy, ConstellationConfig};

pub const DOTS_ATTR: &str = "data-dots";
pub const SEED_ATTR: &str = "data-seed";
pub const STRATEGY_ATTR: &str = "data-links";

#[derive(Clone, Debug, Default)]
pub struct Overrides<'a> {
    pub dots: Option<&'a str>,
    pub seed: Option<&'a str>,
    pub strategy: Option<&'a str>,
}

#[inline]
pub fn parse_strategy(raw: &str) -> Option<ConnectionStrategy> {
    match raw.trim() {
        "pairwise" | "all" => Some(ConnectionStrategy::Pairwise),
        "grid" => Some(ConnectionStrategy::Grid),
        _ => None,
    }
}

/// Apply whichever overrides parse; unparsable values are logged and skipped.
pub fn apply_overrides(mut cfg: ConstellationConfig, o: &Overrides<'_>) -> ConstellationConfig {
    if let Some(raw) = o.dots {
        match raw.trim().parse::<usize>() {
            Ok(n) => cfg.dot_count = n,
            Err(_) => log::warn!("ignoring {}={:?}", DOTS_ATTR, raw),
        }
    }
    if let Some(raw) = o.seed {
        match raw.trim().parse::<u64>() {
            Ok(seed) => cfg.seed = Some(seed),
            Err(_) => log::warn!("ignoring {}={:?}", SEED_ATTR, raw),
        }
    }
    if let Some(raw) = o.strategy {
        match parse_strategy(raw) {
            Some(s) => cfg.connection_strategy = s,
            None => log::warn!("ignoring {}={:?}", STRATEGY_ATTR, raw),
        }
    }
    cfg
}
