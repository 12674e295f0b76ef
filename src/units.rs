//! Unit tables.
//!
//! Everything the resolver knows about units lives here, as process-wide
//! immutable tables:
//!
//! - `registry.rs`: canonical symbol → (dimension, SI factor).
//! - `prefixes.rs`: SI magnitude prefixes and the set of bases they may
//!   attach to. The prefix table is an *ordered* slice; resolution takes the
//!   first match, so the order is part of the contract.
//! - `synonyms.rs`: case-insensitive aliases → canonical symbols. An alias
//!   always points at a registry entry, never at another alias.
//! - `targets.rs`: per-dimension ordered lists of the units printed in a
//!   conversion report.
//!
//! The tables are constructed once on first use and never mutated. Consistency
//! between them (every target resolvable, every synonym canonical, prefix
//! order longest-first) is enforced by the tests in `units/tests.rs`.

#[path = "units/prefixes.rs"]
mod prefixes;
#[path = "units/registry.rs"]
mod registry;
#[path = "units/synonyms.rs"]
mod synonyms;
#[path = "units/targets.rs"]
mod targets;

pub(crate) use prefixes::{PREFIXES, is_prefixable};
pub(crate) use registry::lookup;
pub(crate) use synonyms::canonical_for;
pub(crate) use targets::targets_for;

#[cfg(test)]
pub(crate) use registry::REGISTRY;
#[cfg(test)]
pub(crate) use synonyms::SYNONYMS;
#[cfg(test)]
pub(crate) use targets::TARGETS;

#[cfg(test)]
#[path = "units/tests.rs"]
mod tests;
