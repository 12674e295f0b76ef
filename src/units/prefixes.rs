/// SI magnitude prefixes, in resolution order: longest symbol first, then
/// declaration order within a length class. The resolver accepts the first
/// prefix whose remainder is a registered prefixable base, so this order is
/// load-bearing: `da` must be tried before `d` would misread `das` as
/// deci-something.
pub(crate) const PREFIXES: &[(&str, f64)] = &[
    ("da", 1e1),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("m", 1e-3),
    ("c", 1e-2),
    ("d", 1e-1),
    ("u", 1e-6),
    ("n", 1e-9),
];

/// Canonical symbols that may combine with a prefix.
const PREFIXABLE_BASES: &[&str] = &["g", "m", "s", "N", "pc", "yr", "Hz", "eV"];

pub(crate) fn is_prefixable(symbol: &str) -> bool {
    PREFIXABLE_BASES.contains(&symbol)
}
