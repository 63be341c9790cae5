// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a render can be refused before it starts.  Once a renderer
//! has been constructed nothing in the engine fails; NaN and infinity
//! simply flow through the arithmetic.

use failure::Fail;

/// Configuration problems detected when building a plane or renderer.
#[derive(Debug, Fail, PartialEq)]
pub enum NewtonError {
    /// The integral plane has no pixels in it.
    #[fail(display = "Image dimensions must be positive, got {}x{}", _0, _1)]
    EmptyImage(usize, usize),

    /// The left-lower corner is not to the left of the right-upper corner.
    #[fail(display = "The left lower corner is not to the left of the right upper corner")]
    InvertedReal,

    /// The left-lower corner is not below the right-upper corner.
    #[fail(display = "The left lower corner is not lower than the right upper corner")]
    InvertedImaginary,

    /// One of the plane bounds is NaN or infinite.
    #[fail(display = "Plane bounds must be finite numbers")]
    NonFiniteBounds,

    /// There is nothing to iterate.
    #[fail(display = "The polynomial has no coefficients")]
    EmptyPolynomial,
}
