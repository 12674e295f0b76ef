use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Aliases for canonical unit symbols, keyed by lowercase alias.
///
/// Lookups are case-insensitive on the alias side only; the value is always a
/// canonical registry symbol, never another alias. Spelled-out prefixed names
/// (`kiloparsec`, `megaparsec`) map to the bare base; the prefixed symbol
/// forms (`kpc`, `Mpc`) are handled by prefix decomposition instead.
pub(crate) static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Mass
        ("lbs", "lb"),
        ("pound", "lb"),
        ("pounds", "lb"),
        ("ounce", "oz"),
        ("ounces", "oz"),
        ("msun", "Msun"),
        ("msol", "Msun"),
        ("solarmass", "Msun"),
        ("mjup", "Mjup"),
        ("jupitermass", "Mjup"),
        ("mearth", "Mearth"),
        ("earthmass", "Mearth"),
        // Force
        ("newton", "N"),
        ("newtons", "N"),
        // Length
        ("meter", "m"),
        ("meters", "m"),
        ("metre", "m"),
        ("metres", "m"),
        ("centimeter", "cm"),
        ("centimeters", "cm"),
        ("millimeter", "mm"),
        ("millimeters", "mm"),
        ("kilometer", "km"),
        ("kilometers", "km"),
        ("inch", "in"),
        ("inches", "in"),
        ("foot", "ft"),
        ("feet", "ft"),
        ("yard", "yd"),
        ("yards", "yd"),
        ("mile", "mi"),
        ("miles", "mi"),
        ("au", "AU"),
        ("astronomicalunit", "AU"),
        ("lightyear", "ly"),
        ("lightyears", "ly"),
        ("parsec", "pc"),
        ("parsecs", "pc"),
        ("kiloparsec", "pc"),
        ("megaparsec", "pc"),
        // Time
        ("sec", "s"),
        ("second", "s"),
        ("seconds", "s"),
        ("minute", "min"),
        ("minutes", "min"),
        ("hr", "h"),
        ("hour", "h"),
        ("hours", "h"),
        ("d", "day"),
        ("day", "day"),
        ("days", "day"),
        ("yr", "yr"),
        ("year", "yr"),
        ("years", "yr"),
        ("julianyear", "yr"),
        // Energy
        ("joule", "J"),
        ("joules", "J"),
        ("electronvolt", "eV"),
        ("electronvolts", "eV"),
        ("ergs", "erg"),
        // Angle
        ("radian", "rad"),
        ("radians", "rad"),
        ("degree", "deg"),
        ("degrees", "deg"),
        ("arcminute", "arcmin"),
        ("arcminutes", "arcmin"),
        ("arcsecond", "arcsec"),
        ("arcseconds", "arcsec"),
        // Frequency
        ("hertz", "Hz"),
    ])
});

/// Case-insensitive alias lookup; returns the canonical symbol.
pub(crate) fn canonical_for(alias: &str) -> Option<&'static str> {
    SYNONYMS.get(alias.to_lowercase().as_str()).copied()
}
