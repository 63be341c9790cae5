// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton–Raphson iteration toward a root of a fixed polynomial.
//!
//! Starting from a point `z`, each step replaces `z` with
//! `z - p(z) / p'(z)`.  A step "qualifies" when it moves the point by a
//! small amount (squared length of the step below the threshold).  The
//! iteration stops once a fixed number of steps have qualified; those
//! steps need not be consecutive, and a large step in between does not
//! reset the count.  The number of steps taken overall is what the
//! palette uses to shade a pixel.

use crate::complex::ComplexNumber;
use crate::polynomial::Polynomial;

/// How many qualifying steps end the iteration.
pub const MAX_QUALIFYING_STEPS: usize = 30;

/// A step qualifies when the squared magnitude of its delta is below this.
pub const CONVERGENCE_THRESHOLD: f64 = 0.5;

/// Hard ceiling on the total number of steps.  Only reached when the
/// derivative vanishes somewhere along the trajectory and NaN takes
/// over, at which point no step can ever qualify again.
pub const MAX_TOTAL_STEPS: usize = 10_000;

/// Where the iteration ended up and how long it took to get there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Convergence {
    /// The final iterate.
    pub value: ComplexNumber,
    /// Every step taken, qualifying or not.
    pub steps: usize,
}

/// A polynomial, its derivative, and the stopping rules.  Holds no
/// per-point state; `iterate` may be called for any number of points.
#[derive(Clone, Debug)]
pub struct NewtonIterator {
    polynomial: Polynomial,
    derivative: Polynomial,
    max_qualifying_steps: usize,
    threshold: f64,
    max_total_steps: usize,
}

impl NewtonIterator {
    /// Builds an iterator for `polynomial` with the standard stopping
    /// rules.  The derivative is computed once, here.
    pub fn new(polynomial: Polynomial) -> Self {
        let derivative = polynomial.derive();
        NewtonIterator {
            polynomial,
            derivative,
            max_qualifying_steps: MAX_QUALIFYING_STEPS,
            threshold: CONVERGENCE_THRESHOLD,
            max_total_steps: MAX_TOTAL_STEPS,
        }
    }

    /// Sets how many qualifying steps end the iteration.
    pub fn with_max_qualifying_steps(mut self, steps: usize) -> Self {
        self.max_qualifying_steps = steps;
        self
    }

    /// Sets the squared step size below which a step qualifies.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the hard ceiling on total steps.  A ceiling below the
    /// qualifying-step count is treated as equal to it.
    pub fn with_max_total_steps(mut self, steps: usize) -> Self {
        self.max_total_steps = steps;
        self
    }

    /// The polynomial whose roots are sought.
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Its first derivative.
    pub fn derivative(&self) -> &Polynomial {
        &self.derivative
    }

    /// Runs the iteration from `start`.
    pub fn iterate(&self, start: ComplexNumber) -> Convergence {
        let mut z = start;
        let mut steps = 0;
        let mut qualifying = 0;
        let ceiling = self.max_total_steps.max(self.max_qualifying_steps);

        while qualifying < self.max_qualifying_steps {
            if steps >= ceiling {
                trace!("gave up on {} after {} steps", start, steps);
                break;
            }
            let delta = self.polynomial.evaluate(z) / self.derivative.evaluate(z);
            z = z - delta;
            if delta.norm_sqr() < self.threshold {
                qualifying += 1;
            }
            steps += 1;
        }

        Convergence { value: z, steps }
    }
}
