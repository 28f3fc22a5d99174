//! Generators for polynomials, shared by the unit tests and the benches.

use proptest::prelude::*;
use rand::Rng;

use crate::polynomials::{Coefficient, Polynomial};

/// Coefficients small enough that products of a few polynomials stay far from `i64` overflow.
pub fn small_coefficient() -> impl Strategy<Value = Coefficient> {
    -1000i64..1000i64
}

/// Polynomials of highest exponent `0..=max_degree`. The top coefficient may be zero.
pub fn arb_polynomial(max_degree: usize) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(small_coefficient(), 1..=max_degree + 1)
        .prop_filter_map("needs at least one coefficient", |c| {
            Polynomial::from_coefficients(c).ok()
        })
}

/// Polynomials whose top coefficient is non-zero, so printing them loses no information.
pub fn arb_trimmed_polynomial(max_degree: usize) -> impl Strategy<Value = Polynomial> {
    arb_polynomial(max_degree).prop_filter("top coefficient must be non-zero", |p| {
        p[p.highest_exponent()] != 0
    })
}

/// A polynomial of exactly `degree` with uniformly drawn coefficients and a non-zero top term.
pub fn random_polynomial<R: Rng>(rng: &mut R, degree: usize) -> Polynomial {
    let mut poly = Polynomial::new();
    for idx in 0..degree {
        poly.set_at(rng.gen_range(-1000..1000), idx);
    }
    let mut top = 0;
    while top == 0 {
        top = rng.gen_range(-1000..1000);
    }
    poly.set_at(top, degree);
    poly
}
