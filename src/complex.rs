// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small complex number value type.  Equality and the text form
//! differ from `num::Complex`, so the two components are wrapped here
//! and converted at the edges.

use num::{Complex, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The smallest positive (subnormal) f64.  Two components are equal
/// when they differ by less than this, which in practice means they
/// are bit-for-bit the same number.
pub const TOLERANCE: f64 = 4.940_656_458_412_465_4e-324;

/// A point on the complex plane.  Every operation returns a fresh
/// value; nothing is ever modified in place.
#[derive(Copy, Clone, Debug, Default)]
pub struct ComplexNumber {
    /// The real component, plotted on the x axis.
    pub re: f64,
    /// The imaginary component, plotted on the y axis.
    pub im: f64,
}

impl ComplexNumber {
    /// 0 + 0i
    pub const ZERO: ComplexNumber = ComplexNumber { re: 0.0, im: 0.0 };

    /// 1 + 0i
    pub const ONE: ComplexNumber = ComplexNumber { re: 1.0, im: 0.0 };

    /// Constructor.
    pub const fn new(re: f64, im: f64) -> Self {
        ComplexNumber { re, im }
    }

    /// A number on the real axis.
    pub const fn from_real(re: f64) -> Self {
        ComplexNumber { re, im: 0.0 }
    }

    /// Component-wise difference.
    pub fn subtract(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re - other.re, self.im - other.im)
    }

    /// The usual (ac - bd) + (ad + bc)i product.
    pub fn multiply(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Multiplies by the conjugate of the divisor and then scales by the
    /// divisor's squared magnitude.  Dividing by zero is not an error:
    /// the result is whatever infinities and NaNs IEEE arithmetic
    /// produces, and they propagate from there.
    pub fn divide(self, other: ComplexNumber) -> ComplexNumber {
        let numerator = self.multiply(other.conjugate());
        let denominator = other.norm_sqr();
        ComplexNumber::new(numerator.re / denominator, numerator.im / denominator)
    }

    /// Reflection across the real axis.
    pub fn conjugate(self) -> ComplexNumber {
        ComplexNumber::new(self.re, -self.im)
    }

    /// re² + im²
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Distance from the origin.
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// `atan(im / re)`.  This is the single-quadrant arctangent, so
    /// points in the left half-plane report the same angle as their
    /// reflection through the origin.  Existing output depends on these
    /// values; do not replace it with `atan2`.
    pub fn angle(self) -> f64 {
        (self.im / self.re).atan()
    }

    /// Component-wise comparison with a caller-chosen tolerance, for
    /// when exact equality is too strict (e.g. checking that a round
    /// trip through multiplication and division lands back home).
    pub fn approx_eq(self, other: ComplexNumber, tolerance: f64) -> bool {
        (self.re - other.re).abs() < tolerance && (self.im - other.im).abs() < tolerance
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &ComplexNumber) -> bool {
        self.approx_eq(*other, TOLERANCE)
    }
}

/// Component-wise sum.  The other three operators delegate to the
/// named methods.
impl Add for ComplexNumber {
    type Output = ComplexNumber;
    fn add(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;
    fn sub(self, other: ComplexNumber) -> ComplexNumber {
        self.subtract(other)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;
    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        self.multiply(other)
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;
    fn div(self, other: ComplexNumber) -> ComplexNumber {
        self.divide(other)
    }
}

impl Neg for ComplexNumber {
    type Output = ComplexNumber;
    fn neg(self) -> ComplexNumber {
        ComplexNumber::new(-self.re, -self.im)
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        ComplexNumber::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == ComplexNumber::ZERO
    }
}

impl One for ComplexNumber {
    fn one() -> Self {
        ComplexNumber::ONE
    }
}

impl From<Complex<f64>> for ComplexNumber {
    fn from(c: Complex<f64>) -> Self {
        ComplexNumber::new(c.re, c.im)
    }
}

impl From<ComplexNumber> for Complex<f64> {
    fn from(c: ComplexNumber) -> Self {
        Complex::new(c.re, c.im)
    }
}

/// Renders as `(re + imi)`, with a negative imaginary part written
/// as-is: `(1 + -1i)`.
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} + {}i)", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const CLOSE: f64 = 1e-9;

    #[test]
    fn add_basic() {
        let a = ComplexNumber::new(10.0, 20.0);
        let b = ComplexNumber::new(1.0, 2.0);
        assert_eq!(a + b, ComplexNumber::new(11.0, 22.0));
    }

    #[test]
    fn adding_zero_is_identity() {
        let a = ComplexNumber::new(1.0, -1.0);
        assert_eq!(a + ComplexNumber::ZERO, a);
    }

    #[test]
    fn multiply_i_by_i() {
        let i = ComplexNumber::new(0.0, 1.0);
        assert_eq!(i * i, ComplexNumber::new(-1.0, 0.0));
    }

    #[test]
    fn divide_by_conjugate_scaling() {
        let a = ComplexNumber::new(1.0, 1.0);
        let b = ComplexNumber::new(0.0, 2.0);
        assert_eq!(a / b, ComplexNumber::new(0.5, -0.5));
    }

    #[test]
    fn operations_leave_operands_alone() {
        let a = ComplexNumber::new(3.0, -4.0);
        let b = ComplexNumber::new(-1.5, 0.25);
        let _ = a.add(b).subtract(b).multiply(b).divide(b);
        assert_eq!(a, ComplexNumber::new(3.0, -4.0));
        assert_eq!(b, ComplexNumber::new(-1.5, 0.25));
    }

    #[test]
    fn named_methods_agree_with_operators() {
        let a = ComplexNumber::new(2.0, -3.0);
        let b = ComplexNumber::new(0.5, 4.0);
        assert_eq!(a.add(b), a + b);
        assert_eq!(a.add(b), ComplexNumber::new(2.5, 1.0));
        assert_eq!(a.subtract(b), a - b);
        assert_eq!(a.multiply(b), a * b);
        assert_eq!(a.divide(b), a / b);
    }

    #[test]
    fn sum_then_difference_round_trips() {
        let samples = [
            (ComplexNumber::new(1.0, 2.0), ComplexNumber::new(-3.5, 0.125)),
            (ComplexNumber::new(-0.3, 7.1), ComplexNumber::new(2.2, -9.9)),
            (ComplexNumber::new(1e6, -1e-6), ComplexNumber::new(0.0, 1.0)),
        ];
        for &(a, b) in samples.iter() {
            assert!(((a + b) - b).approx_eq(a, CLOSE), "{} {}", a, b);
            assert!(((a * b) / b).approx_eq(a, CLOSE), "{} {}", a, b);
        }
    }

    #[test]
    fn division_by_zero_propagates_non_finite_values() {
        let q = ComplexNumber::new(1.0, 1.0) / ComplexNumber::ZERO;
        assert!(!q.re.is_finite());
        assert!(!q.im.is_finite());
        let z = ComplexNumber::ZERO / ComplexNumber::ZERO;
        assert!(z.re.is_nan() && z.im.is_nan());
    }

    #[test]
    fn equality_is_reflexive_and_exact() {
        let a = ComplexNumber::new(0.1, -0.2);
        assert_eq!(a, a);
        assert_ne!(a, ComplexNumber::new(0.1 + 1e-12, -0.2));
        assert_ne!(a, ComplexNumber::new(0.1, -0.2 - 1e-12));
    }

    #[test]
    fn nan_is_never_equal() {
        let n = ComplexNumber::new(std::f64::NAN, 0.0);
        assert_ne!(n, n);
    }

    #[test]
    fn magnitude_of_three_four() {
        assert_eq!(ComplexNumber::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn angle_is_single_quadrant() {
        assert!((ComplexNumber::new(1.0, 1.0).angle() - FRAC_PI_4).abs() < CLOSE);
        // atan2 would give -3π/4 here.
        assert!((ComplexNumber::new(-1.0, -1.0).angle() - FRAC_PI_4).abs() < CLOSE);
    }

    #[test]
    fn display_formats() {
        assert_eq!(ComplexNumber::new(10.0, 20.0).to_string(), "(10 + 20i)");
        assert_eq!(ComplexNumber::new(1.0, -1.0).to_string(), "(1 + -1i)");
        assert_eq!(ComplexNumber::ZERO.to_string(), "(0 + 0i)");
        assert_eq!(ComplexNumber::new(0.5, 3.0).to_string(), "(0.5 + 3i)");
    }

    #[test]
    fn converts_to_and_from_num_complex() {
        let c = Complex::new(2.5, -1.0);
        let ours: ComplexNumber = c.into();
        assert_eq!(ours, ComplexNumber::new(2.5, -1.0));
        let back: Complex<f64> = ours.into();
        assert_eq!(back, c);
    }
}
