//! Symbol resolution.
//!
//! A raw unit symbol can be three different things: a canonical registry
//! entry, an alias for one, or an SI prefix glued onto a prefixable base.
//! Resolution tries those readings in a fixed order and the first hit wins;
//! there is no scoring and no backtracking across tiers:
//!
//! ```text
//! raw symbol ── 1. exact registry match (case-sensitive)
//!            ── 2. synonym match (case-insensitive) → registry
//!            ── 3. prefix decomposition, longest prefix first:
//!                    strip prefix, resolve remainder (registry, then
//!                    synonym), accept iff the base is prefixable
//! ```
//!
//! The tier order is the sole disambiguation mechanism: `min` is registered
//! outright and is never read as milli-`in`, and within tier 3 the ordered
//! prefix table guarantees `das` reads as deca-second instead of stranding on
//! the shorter `d`. For symbols where several decompositions would be valid,
//! the first one in table order is taken; there is deliberately no search for
//! a "better" reading.

use log::trace;

use crate::UnitDef;
use crate::units;

/// Resolve `raw` to its dimension and SI factor, or `None` if no tier
/// matches. For prefixed symbols the returned factor already includes the
/// prefix multiplier.
pub(crate) fn resolve_unit(raw: &str) -> Option<UnitDef> {
    // Tier 1: canonical symbol, as typed.
    if let Some(unit) = units::lookup(raw) {
        trace!("resolved {raw:?} as canonical symbol");
        return Some(unit);
    }

    // Tier 2: case-insensitive alias.
    if let Some(canonical) = units::canonical_for(raw) {
        if let Some(unit) = units::lookup(canonical) {
            trace!("resolved {raw:?} via synonym {canonical:?}");
            return Some(unit);
        }
    }

    // Tier 3: prefix + base. PREFIXES is ordered longest-first; the first
    // prefix whose remainder is a registered, prefixable base wins.
    for &(prefix, multiplier) in units::PREFIXES {
        let Some(rest) = raw.strip_prefix(prefix) else {
            continue;
        };

        let base = if units::lookup(rest).is_some() {
            rest
        } else {
            match units::canonical_for(rest) {
                Some(canonical) => canonical,
                None => continue,
            }
        };

        if !units::is_prefixable(base) {
            continue;
        }
        if let Some(unit) = units::lookup(base) {
            trace!("resolved {raw:?} as prefix {prefix:?} + base {base:?}");
            return Some(UnitDef {
                dimension: unit.dimension,
                si_factor: unit.si_factor * multiplier,
            });
        }
    }

    None
}
