use thiserror::Error;

use crate::polynomials::Exponent;

/// Errors reported by the checked entry points of [`Polynomial`](crate::Polynomial).
///
/// The unchecked mutators (`set_coefficient` and friends) never produce these; they skip
/// invalid exponents silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Exponents must be non-negative.
    #[error("invalid exponent {0}: exponents must be non-negative")]
    InvalidExponent(Exponent),

    /// A token in the text input was not an integer.
    #[error("malformed term: expected an integer, found {token:?}")]
    MalformedTerm {
        /// The offending token, as read.
        token: String,
    },

    /// The text input ended before the `-1 -1` terminator.
    #[error("input ended before the terminating `-1 -1` pair")]
    MissingSentinel,

    /// A polynomial needs at least the constant slot.
    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,
}
