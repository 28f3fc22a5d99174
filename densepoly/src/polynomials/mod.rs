pub(crate) mod io;
pub(crate) mod polynomial;
pub(crate) mod polynomial_arithmetic;
pub use polynomial::{Coefficient, Exponent, Polynomial};
