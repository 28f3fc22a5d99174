#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! densepoly
//!
//! Integer polynomials in one variable, stored densely by exponent, with term-wise
//! arithmetic, value equality and a plain-text term format.
//!
//! ```
//! use densepoly::Polynomial;
//!
//! let a = Polynomial::monomial(5, 7).unwrap();
//! let b = Polynomial::monomial(3, 2).unwrap();
//! assert_eq!((&a + &b).to_string(), " +5x^7 +3x^2");
//! assert_eq!((&a * &b).to_string(), " +15x^9");
//! ```

/// error types
pub mod error;
/// the polynomial type and its arithmetic
pub(crate) mod polynomials;

pub use error::PolynomialError;
pub use polynomials::{Coefficient, Exponent, Polynomial};

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;
