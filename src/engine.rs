//! Resolution and conversion engine.
//!
//! This module is the entry point for turning a raw quantity token into a
//! multi-unit conversion report. At a high level, one request is a pipeline:
//!
//! ```text
//! "1000ms" ── parse_quantity (parser.rs)
//!                 │  value = 1000.0, raw_unit = "ms"
//!                 v
//!          resolve_unit (resolve.rs)
//!                 │  exact symbol → synonym → prefix + base
//!                 │  (Time, 1e-3)
//!                 v
//!          convert_quantity (convert.rs)
//!                 │  value_si = value * si_factor
//!                 │  fan out over the dimension's target units
//!                 v
//!          format_sig4 (format.rs)
//!                 │  4 significant figures, signed two-digit exponent
//!                 v
//!          ordered (symbol, value) pairs → report
//! ```
//!
//! All lookups go against the immutable tables in `crate::units`; nothing in
//! here holds state between requests, so the engine is safe to call from
//! multiple threads.
//!
//! ## Responsibilities by module
//!
//! - `parser.rs`: splits `<number><letters>` tokens, normalizing micro-sign
//!   variants first.
//! - `resolve.rs`: the tiered symbol lookup. Tier order is the only
//!   disambiguation mechanism and must not be reordered.
//! - `convert.rs`: SI normalization and the per-target fan-out.
//! - `format.rs`: fixed-width scientific notation for report values.

#[path = "engine/convert.rs"]
mod convert;
#[path = "engine/format.rs"]
mod format;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;

pub(crate) use convert::convert_quantity;
pub use format::format_sig4;
pub(crate) use parser::parse_quantity;
#[allow(unused_imports)]
pub(crate) use resolve::resolve_unit;
