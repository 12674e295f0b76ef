//! SI normalization and target fan-out.

use log::debug;

use crate::error::ConvertError;
use crate::{Dimension, ParsedQuantity};

use super::resolve::resolve_unit;
use crate::units;

/// Internal conversion result, wrapped into the public report by `api`.
#[derive(Debug, Clone)]
pub(crate) struct Converted {
    pub dimension: Dimension,
    /// Input value normalized to the dimension's SI base unit.
    pub value_si: f64,
    /// `(target symbol, value in target)` pairs, in target-table order.
    pub outputs: Vec<(&'static str, f64)>,
}

/// Convert a parsed quantity into every target unit of its dimension.
///
/// The unit symbol is resolved, the value normalized to SI, and the
/// dimension's target list walked in order. Targets that no longer resolve,
/// or that resolve into a different dimension, are skipped so that one stale
/// table entry cannot poison the whole report. A dimension without a target
/// list at all means the built-in tables are inconsistent and surfaces as
/// [`ConvertError::MissingTargets`].
pub(crate) fn convert_quantity(parsed: &ParsedQuantity) -> Result<Converted, ConvertError> {
    let source = resolve_unit(&parsed.raw_unit)
        .ok_or_else(|| ConvertError::UnknownUnit { symbol: parsed.raw_unit.clone() })?;

    let value_si = parsed.value * source.si_factor;

    let targets = units::targets_for(source.dimension)
        .ok_or(ConvertError::MissingTargets { dimension: source.dimension })?;

    let mut outputs = Vec::with_capacity(targets.len());
    for &target in targets {
        let Some(unit) = resolve_unit(target) else {
            debug!("skipping target {target:?}: does not resolve");
            continue;
        };
        if unit.dimension != source.dimension {
            debug!(
                "skipping target {target:?}: dimension {} != {}",
                unit.dimension, source.dimension
            );
            continue;
        }
        outputs.push((target, value_si / unit.si_factor));
    }

    Ok(Converted { dimension: source.dimension, value_si, outputs })
}
