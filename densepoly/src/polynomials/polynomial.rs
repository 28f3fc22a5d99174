use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PolynomialError;

/// Coefficient of a single term.
pub type Coefficient = i64;
/// Exponent of a single term. Signed so that callers can hand in negative values, which every
/// mutator rejects.
pub type Exponent = i64;

/// A polynomial in one variable with integer coefficients, stored densely.
///
/// `coefficients[i]` is the coefficient of `x^i`. The buffer always holds at least the constant
/// slot, and its last index is the highest exponent. High-order zero terms are never trimmed, so
/// two polynomials that agree as functions can still compare unequal when one carries extra zero
/// padding.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coefficient>", into = "Vec<Coefficient>")]
pub struct Polynomial {
    coefficients: Vec<Coefficient>,
}

impl Polynomial {
    /// The zero polynomial, `0*x^0`.
    #[inline]
    pub fn new() -> Self {
        Self::constant(0)
    }

    /// A degree-0 polynomial holding `coefficient`.
    #[inline]
    pub fn constant(coefficient: Coefficient) -> Self {
        Self {
            coefficients: vec![coefficient],
        }
    }

    /// A single term `coefficient * x^exponent`, zero-filled below it.
    ///
    /// # Errors
    /// - [`PolynomialError::InvalidExponent`] if `exponent` is negative.
    pub fn monomial(coefficient: Coefficient, exponent: Exponent) -> Result<Self, PolynomialError> {
        let idx = checked_index(exponent)?;
        let mut coefficients = vec![0; idx + 1];
        coefficients[idx] = coefficient;
        Ok(Self { coefficients })
    }

    /// Build a polynomial from coefficients listed lowest exponent first. Trailing zeros are kept.
    ///
    /// # Errors
    /// - [`PolynomialError::EmptyCoefficients`] if `coefficients` is empty.
    pub fn from_coefficients(coefficients: Vec<Coefficient>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coefficients })
    }

    /// Largest exponent the buffer holds. The coefficient stored there may be zero.
    #[inline]
    pub fn highest_exponent(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The raw buffer, lowest exponent first.
    #[inline]
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// True when every stored coefficient is zero, whatever the padding.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Non-zero terms as `(exponent, coefficient)`, highest exponent first.
    pub fn terms(&self) -> impl Iterator<Item = (usize, Coefficient)> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0)
            .map(|(e, &c)| (e, c))
    }

    /// Coefficient of `x^exponent`. Anything outside the stored range, negative exponents
    /// included, reads as zero.
    pub fn get_coefficient(&self, exponent: Exponent) -> Coefficient {
        match usize::try_from(exponent) {
            Ok(idx) => self.coefficients.get(idx).copied().unwrap_or(0),
            Err(_) => 0,
        }
    }

    /// Overwrite the coefficient of `x^exponent`, growing the buffer if needed.
    /// A negative exponent leaves the polynomial untouched.
    pub fn set_coefficient(&mut self, coefficient: Coefficient, exponent: Exponent) {
        match checked_index(exponent) {
            Ok(idx) => self.set_at(coefficient, idx),
            Err(_) => debug!(exponent, "skipping set_coefficient on invalid exponent"),
        }
    }

    /// Like [`Polynomial::set_coefficient`], but reports a negative exponent instead of
    /// skipping it.
    pub fn try_set_coefficient(
        &mut self,
        coefficient: Coefficient,
        exponent: Exponent,
    ) -> Result<(), PolynomialError> {
        let idx = checked_index(exponent)?;
        self.set_at(coefficient, idx);
        Ok(())
    }

    /// Add `delta` to the coefficient of `x^exponent`. Beyond the stored range the old value
    /// is zero, so this grows the buffer and stores `delta`.
    pub fn add_to_coefficient(&mut self, delta: Coefficient, exponent: Exponent) {
        match checked_index(exponent) {
            Ok(idx) => self.add_at(delta, idx),
            Err(_) => debug!(exponent, "skipping add_to_coefficient on invalid exponent"),
        }
    }

    /// Subtract `delta` from the coefficient of `x^exponent`.
    #[inline]
    pub fn subtract_from_coefficient(&mut self, delta: Coefficient, exponent: Exponent) {
        self.add_to_coefficient(-delta, exponent)
    }

    /// Make `idx` addressable. New slots are zero, existing entries keep their index, and the
    /// buffer never shrinks.
    pub(crate) fn ensure_exponent(&mut self, idx: usize) {
        let highest = self.highest_exponent();
        if idx > highest {
            trace!(from = highest, to = idx, "growing coefficient buffer");
            self.coefficients.resize(idx + 1, 0);
        }
    }

    #[inline]
    pub(crate) fn set_at(&mut self, coefficient: Coefficient, idx: usize) {
        self.ensure_exponent(idx);
        self.coefficients[idx] = coefficient;
    }

    #[inline]
    pub(crate) fn add_at(&mut self, delta: Coefficient, idx: usize) {
        if idx > self.highest_exponent() {
            self.set_at(delta, idx);
        } else {
            self.coefficients[idx] += delta;
        }
    }

    #[inline]
    pub(crate) fn sub_at(&mut self, delta: Coefficient, idx: usize) {
        self.add_at(-delta, idx)
    }
}

fn checked_index(exponent: Exponent) -> Result<usize, PolynomialError> {
    usize::try_from(exponent).map_err(|_| PolynomialError::InvalidExponent(exponent))
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Polynomial {
    fn clone(&self) -> Self {
        Self {
            coefficients: self.coefficients.clone(),
        }
    }

    /// Assignment: a value-equal source is a no-op, anything else replaces the buffer with one
    /// sized to `source` and copies it term by term.
    fn clone_from(&mut self, source: &Self) {
        if self == source {
            return;
        }
        self.coefficients = vec![0; source.coefficients.len()];
        for (idx, &c) in source.coefficients.iter().enumerate().rev() {
            self.set_at(c, idx);
        }
    }
}

impl From<Coefficient> for Polynomial {
    fn from(coefficient: Coefficient) -> Self {
        Self::constant(coefficient)
    }
}

impl TryFrom<Vec<Coefficient>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<Coefficient>) -> Result<Self, Self::Error> {
        Self::from_coefficients(coefficients)
    }
}

impl From<Polynomial> for Vec<Coefficient> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

impl Index<usize> for Polynomial {
    type Output = Coefficient;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coefficients[index]
    }
}
