// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polynomials with complex coefficients.  The coefficient at index
//! `i` belongs to the `x^i` term, so the constant comes first.

use crate::complex::ComplexNumber;
use std::fmt;

/// The letter used for the variable when a polynomial is printed.
const VARIABLE: &str = "x";

/// An ordered list of coefficients, lowest power first.  An empty
/// polynomial is allowed; it has no degree and evaluates to zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<ComplexNumber>,
}

impl Polynomial {
    /// The empty polynomial.
    pub fn new() -> Self {
        Polynomial {
            coefficients: Vec::new(),
        }
    }

    /// Takes ownership of a coefficient list, constant term first.
    pub fn from_coefficients(coefficients: Vec<ComplexNumber>) -> Self {
        Polynomial { coefficients }
    }

    /// Convenience for polynomials with purely real coefficients.
    pub fn from_real(coefficients: &[f64]) -> Self {
        Polynomial {
            coefficients: coefficients
                .iter()
                .map(|&c| ComplexNumber::from_real(c))
                .collect(),
        }
    }

    /// x³ + 1, whose roots are the three cube roots of -1.
    pub fn default_cubic() -> Self {
        Polynomial::from_real(&[1.0, 0.0, 0.0, 1.0])
    }

    /// Appends the coefficient for the next-higher power.
    pub fn push(&mut self, coefficient: ComplexNumber) {
        self.coefficients.push(coefficient);
    }

    /// The coefficients, constant term first.
    pub fn coefficients(&self) -> &[ComplexNumber] {
        &self.coefficients
    }

    /// Number of terms, including zero terms.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// True when there are no terms at all.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The highest power with a slot in the coefficient list, or `None`
    /// for the empty polynomial.  Zero leading coefficients still count.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Sum of `coefficient[i] * x^i`.  Each power is built up from `x`
    /// by repeated multiplication rather than Horner's scheme; rendered
    /// images depend on the rounding this produces.
    pub fn evaluate(&self, x: ComplexNumber) -> ComplexNumber {
        self.coefficients
            .iter()
            .enumerate()
            .fold(ComplexNumber::ZERO, |sum, (power, &coefficient)| {
                sum + coefficient * power_of(x, power)
            })
    }

    /// Evaluates at a point on the real axis.
    pub fn evaluate_real(&self, x: f64) -> ComplexNumber {
        self.evaluate(ComplexNumber::from_real(x))
    }

    /// The first derivative.  The constant term disappears and every
    /// other coefficient is scaled by its power and shifted down one.
    pub fn derive(&self) -> Polynomial {
        Polynomial {
            coefficients: self
                .coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, &c)| c * ComplexNumber::from_real(power as f64))
                .collect(),
        }
    }
}

fn power_of(x: ComplexNumber, power: usize) -> ComplexNumber {
    if power == 0 {
        return ComplexNumber::ONE;
    }
    let mut result = x;
    for _ in 1..power {
        result = result * x;
    }
    result
}

/// Each term is its coefficient followed by the variable letter once
/// per power, so `1 + x²` prints as `(1 + 0i) + (0 + 0i)x + (1 + 0i)xx`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            if power > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}{}", coefficient, VARIABLE.repeat(power))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }

    #[test]
    fn evaluate_at_zero_is_constant_term() {
        let p = Polynomial::from_real(&[1.0, 0.0, 1.0]);
        assert_eq!(p.evaluate(ComplexNumber::ZERO), c(1.0, 0.0));
    }

    #[test]
    fn evaluate_at_one_sums_coefficients() {
        let p = Polynomial::from_coefficients(vec![c(1.0, 2.0), c(-3.0, 0.5), c(0.25, -1.0)]);
        assert_eq!(p.evaluate(ComplexNumber::ONE), c(-1.75, 1.5));
        assert_eq!(Polynomial::from_real(&[1.0, 0.0, 1.0]).evaluate_real(1.0), c(2.0, 0.0));
    }

    #[test]
    fn evaluate_at_two() {
        let p = Polynomial::from_real(&[1.0, 0.0, 1.0]);
        assert_eq!(p.evaluate_real(2.0), c(5.0, 0.0));
    }

    #[test]
    fn evaluate_complex_point() {
        // (i)^3 + 1 = 1 - i
        let p = Polynomial::default_cubic();
        assert_eq!(p.evaluate(c(0.0, 1.0)), c(1.0, -1.0));
    }

    #[test]
    fn empty_polynomial_evaluates_to_zero() {
        let p = Polynomial::new();
        assert!(p.is_empty());
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate(c(3.0, -2.0)), ComplexNumber::ZERO);
    }

    #[test]
    fn derive_cubic() {
        let d = Polynomial::default_cubic().derive();
        assert_eq!(d, Polynomial::from_real(&[0.0, 0.0, 3.0]));
        assert_eq!(d.degree(), Some(2));
    }

    #[test]
    fn derive_scales_each_coefficient_by_its_power() {
        let p = Polynomial::from_coefficients(vec![c(9.0, 9.0), c(1.0, -1.0), c(0.5, 2.0), c(-1.0, 0.0), c(0.0, 0.25)]);
        let d = p.derive();
        assert_eq!(d.degree(), Some(3));
        for (i, coefficient) in d.coefficients().iter().enumerate() {
            let expected = p.coefficients()[i + 1] * ComplexNumber::from_real((i + 1) as f64);
            assert_eq!(*coefficient, expected);
        }
    }

    #[test]
    fn derive_of_constant_or_empty_is_empty() {
        assert!(Polynomial::from_real(&[7.0]).derive().is_empty());
        assert!(Polynomial::new().derive().is_empty());
    }

    #[test]
    fn push_appends_next_power() {
        let mut p = Polynomial::new();
        p.push(ComplexNumber::ONE);
        p.push(ComplexNumber::ZERO);
        p.push(ComplexNumber::ZERO);
        p.push(ComplexNumber::ONE);
        assert_eq!(p, Polynomial::default_cubic());
    }

    #[test]
    fn display_repeats_variable() {
        let p = Polynomial::from_real(&[1.0, 0.0, 1.0]);
        assert_eq!(p.to_string(), "(1 + 0i) + (0 + 0i)x + (1 + 0i)xx");
    }

    #[test]
    fn display_cubic_and_derivative() {
        let p = Polynomial::default_cubic();
        assert_eq!(
            p.to_string(),
            "(1 + 0i) + (0 + 0i)x + (0 + 0i)xx + (1 + 0i)xxx"
        );
        assert_eq!(p.derive().to_string(), "(0 + 0i) + (0 + 0i)x + (3 + 0i)xx");
        assert_eq!(Polynomial::new().to_string(), "");
    }
}
