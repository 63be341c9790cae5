// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps pixels of the output image onto starting points for Newton's
//! method.  Pixel `(0, 0)` sits on the left-lower corner of the sampled
//! region; each further row steps along the imaginary axis and each
//! further column steps along the real axis.  A starting point that
//! lands on either axis is pushed off it by `AXIS_NUDGE`.
use crate::complex::{ComplexNumber, TOLERANCE};
use crate::errors::NewtonError;

/// Coordinates closer to zero than the smallest positive f64 are
/// replaced by this, so that no sample lands exactly on an axis.  For
/// x³ + 1 the derivative vanishes at the origin.
pub const AXIS_NUDGE: f64 = 0.0001;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub ComplexNumber, pub ComplexNumber);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels of the first onto
/// points of the second.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Width and height of the image in pixels.
    pub integral_plane: IntegralPlane,
    /// The left-lower and right-upper corners of the region rendered.
    pub complex_plane: ComplexPlane,
    // How far one pixel moves along each axis.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the pixel dimensions of the image and the
    /// two corners of the region of the complex plane it covers.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: ComplexNumber,
        rightupper: ComplexNumber,
    ) -> Result<PlaneMapper, NewtonError> {
        if width == 0 || height == 0 {
            return Err(NewtonError::EmptyImage(width, height));
        }

        let corners = [leftlower.re, leftlower.im, rightupper.re, rightupper.im];
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(NewtonError::NonFiniteBounds);
        }

        if leftlower.re >= rightupper.re {
            return Err(NewtonError::InvertedReal);
        }

        if leftlower.im >= rightupper.im {
            return Err(NewtonError::InvertedImaginary);
        }

        let steps = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            steps,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// How many pixels the image holds.  Never zero.
    pub fn pixel_count(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Distance along the real and imaginary axes between neighbouring
    /// pixels.
    pub fn steps(&self) -> (f64, f64) {
        self.steps
    }

    /// Given the row and column of a pixel, return the point on the
    /// complex plane where sampling starts.  The row moves along the
    /// imaginary axis, the column along the real axis.  A coordinate
    /// that comes out as zero is nudged to `AXIS_NUDGE`.
    pub fn pixel_to_point(&self, row: usize, column: usize) -> ComplexNumber {
        let origin = self.complex_plane.0;
        let y = origin.im + (row as f64) * self.steps.1;
        let x = origin.re + (column as f64) * self.steps.0;
        ComplexNumber::new(nudge(x), nudge(y))
    }
}

fn nudge(coordinate: f64) -> f64 {
    if coordinate.abs() < TOLERANCE {
        AXIS_NUDGE
    } else {
        coordinate
    }
}
