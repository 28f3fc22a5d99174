use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::polynomial::{Coefficient, Polynomial};

/// Add every term of `src` into `dst`, highest exponent first. `dst` grows to cover `src`.
pub(crate) fn add_into(dst: &mut Polynomial, src: &Polynomial) {
    for idx in (0..=src.highest_exponent()).rev() {
        dst.add_at(src[idx], idx);
    }
}

/// Subtract every term of `src` from `dst`, highest exponent first.
pub(crate) fn sub_into(dst: &mut Polynomial, src: &Polynomial) {
    for idx in (0..=src.highest_exponent()).rev() {
        dst.sub_at(src[idx], idx);
    }
}

/// Full convolution of `lhs` and `rhs`.
///
/// The first pair visited is the two top exponents, so the product always spans
/// `lhs.highest_exponent() + rhs.highest_exponent()`, even when that top term is zero.
pub(crate) fn multiply(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    let mut product = Polynomial::new();
    for i in (0..=lhs.highest_exponent()).rev() {
        for j in (0..=rhs.highest_exponent()).rev() {
            product.add_at(lhs[i] * rhs[j], i + j);
        }
    }
    product
}

/// Scale every term of `lhs` by `k`. Terms are overwritten into a fresh result rather than
/// accumulated.
pub(crate) fn scale(lhs: &Polynomial, k: Coefficient) -> Polynomial {
    let mut product = Polynomial::new();
    for idx in (0..=lhs.highest_exponent()).rev() {
        product.set_at(lhs[idx] * k, idx);
    }
    product
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut sum = self.clone();
        add_into(&mut sum, rhs);
        sum
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let mut difference = self.clone();
        sub_into(&mut difference, rhs);
        difference
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        multiply(self, rhs)
    }
}

impl Add<Coefficient> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Coefficient) -> Polynomial {
        let mut sum = self.clone();
        sum.add_at(rhs, 0);
        sum
    }
}

impl Sub<Coefficient> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Coefficient) -> Polynomial {
        let mut difference = self.clone();
        difference.sub_at(rhs, 0);
        difference
    }
}

impl Mul<Coefficient> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Coefficient) -> Polynomial {
        scale(self, rhs)
    }
}

// owned operands go through the borrowed impls above
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                (&self).$method(rhs)
            }
        }

        impl $imp<Polynomial> for &Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$method(&rhs)
            }
        }

        impl $imp<Coefficient> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Coefficient) -> Polynomial {
                (&self).$method(rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        add_into(self, rhs);
    }
}

impl AddAssign<Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        add_into(self, &rhs);
    }
}

impl AddAssign<Coefficient> for Polynomial {
    fn add_assign(&mut self, rhs: Coefficient) {
        self.add_at(rhs, 0);
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        sub_into(self, rhs);
    }
}

impl SubAssign<Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        sub_into(self, &rhs);
    }
}

impl SubAssign<Coefficient> for Polynomial {
    fn sub_assign(&mut self, rhs: Coefficient) {
        self.sub_at(rhs, 0);
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        let product = multiply(self, rhs);
        self.clone_from(&product);
    }
}

impl MulAssign<Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl MulAssign<Coefficient> for Polynomial {
    fn mul_assign(&mut self, rhs: Coefficient) {
        let product = scale(self, rhs);
        self.clone_from(&product);
    }
}
