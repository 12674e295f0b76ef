use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::Dimension;

/// Output units per dimension, in report order.
///
/// Entries may be prefixed symbols (`kpc`, `Myr`, `GeV`); each one must
/// resolve back to its list's dimension. A drifted entry is skipped at
/// conversion time rather than failing the report, but the table tests treat
/// any drift as a bug.
pub(crate) static TARGETS: Lazy<HashMap<Dimension, Vec<&'static str>>> = Lazy::new(|| {
    use Dimension::*;

    HashMap::from([
        (Mass, vec!["kg", "g", "mg", "lb", "oz", "Msun", "Mjup", "Mearth"]),
        (Force, vec!["N", "kN", "lbf", "kgf"]),
        (Length, vec!["m", "km", "AU", "ly", "pc", "kpc", "Mpc", "in", "ft", "yd", "mi"]),
        (Time, vec!["s", "ms", "min", "h", "day", "yr", "kyr", "Myr", "Gyr"]),
        (Energy, vec!["J", "erg", "eV", "keV", "MeV", "GeV", "TeV"]),
        (Angle, vec!["rad", "deg", "arcmin", "arcsec", "mas", "uas"]),
        (Freq, vec!["Hz", "kHz", "MHz", "GHz"]),
    ])
});

/// Ordered output units for `dimension`, if the table has an entry for it.
pub(crate) fn targets_for(dimension: Dimension) -> Option<&'static [&'static str]> {
    TARGETS.get(&dimension).map(|v| v.as_slice())
}
