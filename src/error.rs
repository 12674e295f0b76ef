use crate::Dimension;
use thiserror::Error;

/// Failure modes of a conversion request.
///
/// `Parse` and `UnknownUnit` are expected, user-recoverable conditions: the
/// caller prints the message and carries on. `MissingTargets` means the
/// built-in tables disagree with each other and is a defect, not user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The token did not match the `<number><unit-letters>` grammar.
    #[error("could not parse quantity: {token:?}")]
    Parse { token: String },

    /// No resolution tier produced a unit for the symbol.
    #[error("unknown or unsupported unit: {symbol:?}")]
    UnknownUnit { symbol: String },

    /// A resolved dimension has no registered output units.
    #[error("no target units registered for dimension {dimension}")]
    MissingTargets { dimension: Dimension },
}
