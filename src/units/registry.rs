use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Dimension, UnitDef};

fn def(dimension: Dimension, si_factor: f64) -> UnitDef {
    UnitDef { dimension, si_factor }
}

/// Canonical unit symbols and their SI conversion factors.
///
/// Keys are matched case-sensitively; `Msun` and `msun` are different lookups
/// (the latter is served by the synonym table). Multi-letter symbols that
/// could also read as prefix + base (`min`, `mas`) are registered outright and
/// therefore win over any decomposition.
pub(crate) static REGISTRY: Lazy<HashMap<&'static str, UnitDef>> = Lazy::new(|| {
    use Dimension::*;

    HashMap::from([
        // Mass
        ("kg", def(Mass, 1.0)),
        ("g", def(Mass, 1e-3)),
        ("lb", def(Mass, 0.45359237)),
        ("oz", def(Mass, 0.028349523125)),
        // Astronomy mass
        ("Msun", def(Mass, 1.98847e30)),
        ("Mjup", def(Mass, 1.89813e27)),
        ("Mearth", def(Mass, 5.9722e24)),
        // Force
        ("N", def(Force, 1.0)),
        ("lbf", def(Force, 4.4482216152605)),
        ("kgf", def(Force, 9.80665)),
        // Length
        ("m", def(Length, 1.0)),
        ("cm", def(Length, 0.01)),
        ("mm", def(Length, 0.001)),
        ("km", def(Length, 1000.0)),
        ("in", def(Length, 0.0254)),
        ("ft", def(Length, 0.3048)),
        ("yd", def(Length, 0.9144)),
        ("mi", def(Length, 1609.344)),
        // Astronomy length. AU and eV below are exact by definition; ly uses
        // the Julian year. kpc and Mpc resolve via prefixes.
        ("AU", def(Length, 149_597_870_700.0)),
        ("ly", def(Length, 9.4607304725808e15)),
        ("pc", def(Length, 3.085677581491367e16)),
        // Time
        ("s", def(Time, 1.0)),
        ("min", def(Time, 60.0)),
        ("h", def(Time, 3600.0)),
        ("day", def(Time, 86400.0)),
        ("yr", def(Time, 31557600.0)),
        // Energy
        ("J", def(Energy, 1.0)),
        ("erg", def(Energy, 1e-7)),
        ("eV", def(Energy, 1.602176634e-19)),
        // Angle
        ("rad", def(Angle, 1.0)),
        ("deg", def(Angle, std::f64::consts::PI / 180.0)),
        ("arcmin", def(Angle, std::f64::consts::PI / (180.0 * 60.0))),
        ("arcsec", def(Angle, std::f64::consts::PI / (180.0 * 3600.0))),
        ("mas", def(Angle, std::f64::consts::PI / (180.0 * 3600.0 * 1e3))),
        ("uas", def(Angle, std::f64::consts::PI / (180.0 * 3600.0 * 1e6))),
        // Frequency. kHz, MHz, GHz resolve via prefixes.
        ("Hz", def(Freq, 1.0)),
    ])
});

/// Case-sensitive registry lookup.
pub(crate) fn lookup(symbol: &str) -> Option<UnitDef> {
    REGISTRY.get(symbol).copied()
}
