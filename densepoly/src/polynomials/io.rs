use std::{
    fmt::{self, Display, Formatter},
    io::BufRead,
    str::FromStr,
};

use anyhow::{Context, Result};
use tracing::debug;

use super::polynomial::{Coefficient, Polynomial};
use crate::error::PolynomialError;

/// Coefficient and exponent of the pair that ends text input.
const SENTINEL: (Coefficient, Coefficient) = (-1, -1);

/// Prints the non-zero terms from the highest exponent down, each preceded by a space and an
/// explicit sign, e.g. ` +5x^7 -5x^2 +3x -1`. Prints nothing when every coefficient is zero.
impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (exponent, coefficient) in self.terms() {
            if coefficient > 0 {
                write!(f, " +{}", coefficient)?;
            } else {
                write!(f, " {}", coefficient)?;
            }
            match exponent {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", exponent)?,
            }
        }
        Ok(())
    }
}

impl Polynomial {
    /// Read whitespace separated `coefficient exponent` pairs from `reader` until the `-1 -1`
    /// pair, overwriting each term via [`Polynomial::set_coefficient`]. Pairs with a negative
    /// exponent are skipped like any other invalid exponent.
    ///
    /// Tokens are consumed one at a time, so whatever follows the terminator stays in `reader`.
    ///
    /// # Returns
    /// - the number of pairs read, terminator excluded
    ///
    /// # Errors
    /// - [`PolynomialError::MalformedTerm`] for a token that is not an integer
    /// - [`PolynomialError::MissingSentinel`] if input ends before `-1 -1`
    /// - any I/O error from `reader`
    ///
    /// Pairs read before the failure stay applied.
    pub fn read_terms<R: BufRead>(&mut self, mut reader: R) -> Result<usize> {
        let mut pairs = 0;
        loop {
            let coefficient = read_integer(&mut reader)
                .with_context(|| format!("reading coefficient of term {}", pairs + 1))?;
            let exponent = read_integer(&mut reader)
                .with_context(|| format!("reading exponent of term {}", pairs + 1))?;
            if (coefficient, exponent) == SENTINEL {
                break;
            }
            self.set_coefficient(coefficient, exponent);
            pairs += 1;
        }
        debug!(pairs, highest_exponent = self.highest_exponent(), "read polynomial terms");
        Ok(pairs)
    }
}

/// Parses the text input format into a fresh zero polynomial.
impl FromStr for Polynomial {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut poly = Polynomial::new();
        poly.read_terms(s.as_bytes())?;
        Ok(poly)
    }
}

fn read_integer<R: BufRead>(reader: &mut R) -> Result<Coefficient> {
    let token = next_token(reader)?.ok_or(PolynomialError::MissingSentinel)?;
    let value = token
        .parse::<Coefficient>()
        .map_err(|_| PolynomialError::MalformedTerm { token })?;
    Ok(value)
}

/// Skip leading whitespace and return the next run of non-whitespace bytes, or `None` at end of
/// input. The whitespace that ends the token is left in the reader.
fn next_token<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if complete {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}
