// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks every pixel of the image, runs Newton's method from the
//! matching point on the complex plane, and colors the pixel by the
//! root it settled on and how long that took.
//!
//! Pixels are visited strictly in row-major order over `(row, column)`
//! and the registry of roots is threaded through the walk, so the
//! same configuration always yields the same root indices.

use image::{Rgb, RgbImage};
use itertools::iproduct;

use crate::complex::ComplexNumber;
use crate::errors::NewtonError;
use crate::newton::NewtonIterator;
use crate::palette::pixel_color;
use crate::planes::PlaneMapper;
use crate::polynomial::Polynomial;
use crate::roots::RootRegistry;

/// Everything known about one pixel once it has been rendered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Index of the root in the render's registry.
    pub root: usize,
    /// Total Newton steps taken.
    pub steps: usize,
    /// The resulting color.
    pub color: Rgb<u8>,
}

/// The finished output grid and the roots discovered along the way.
///
/// The sample computed for row `i` and column `j` of the image is stored
/// at column `i`, row `j` of the grid: the grid is the transpose of the
/// walk.  For a square image the dimensions are unchanged; otherwise the
/// grid is `height` columns wide and `width` rows tall.
#[derive(Clone, Debug)]
pub struct Render {
    columns: usize,
    rows: usize,
    samples: Vec<Sample>,
    roots: RootRegistry,
}

impl Render {
    /// Number of columns in the grid.
    pub fn width(&self) -> usize {
        self.columns
    }

    /// Number of rows in the grid.
    pub fn height(&self) -> usize {
        self.rows
    }

    /// The sample at the given grid position, if it is inside the grid.
    pub fn sample(&self, column: usize, row: usize) -> Option<&Sample> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.samples.get(row * self.columns + column)
    }

    /// All samples, row by row of the grid.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The registry as it stood when the last pixel was done.
    pub fn roots(&self) -> &RootRegistry {
        &self.roots
    }

    /// Copies the colors into an image ready for encoding.
    pub fn to_image(&self) -> RgbImage {
        let columns = self.columns;
        let samples = &self.samples;
        RgbImage::from_fn(self.columns as u32, self.rows as u32, |x, y| {
            samples[y as usize * columns + x as usize].color
        })
    }
}

/// A configured Newton fractal: the region to sample, the image size,
/// and the polynomial whose roots color the picture.
pub struct NewtonRenderer {
    plane: PlaneMapper,
    iterator: NewtonIterator,
}

impl NewtonRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane where the calculation
    /// will take place, and a polynomial with at least one term.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: ComplexNumber,
        rightupper: ComplexNumber,
        polynomial: Polynomial,
    ) -> Result<Self, NewtonError> {
        if polynomial.is_empty() {
            return Err(NewtonError::EmptyPolynomial);
        }
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        Ok(NewtonRenderer {
            plane,
            iterator: NewtonIterator::new(polynomial),
        })
    }

    /// Replaces the iteration rules, keeping the region and image size.
    pub fn with_iterator(self, iterator: NewtonIterator) -> Self {
        NewtonRenderer {
            plane: self.plane,
            iterator,
        }
    }

    /// The pixel-to-plane mapping.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration rules in use.
    pub fn iterator(&self) -> &NewtonIterator {
        &self.iterator
    }

    /// The polynomial and its derivative, as text, for diagnostics.
    pub fn describe(&self) -> (String, String) {
        (
            self.iterator.polynomial().to_string(),
            self.iterator.derivative().to_string(),
        )
    }

    /// Renders a single pixel, recording any new root in `roots`.
    pub fn render_pixel(&self, row: usize, column: usize, roots: &mut RootRegistry) -> Sample {
        let point = self.plane.pixel_to_point(row, column);
        let convergence = self.iterator.iterate(point);
        let root = roots.find_or_add(convergence.value);
        Sample {
            root,
            steps: convergence.steps,
            color: pixel_color(root, convergence.steps),
        }
    }

    /// The main function: renders every pixel in order and returns the
    /// transposed grid along with the roots found.
    pub fn render(&self) -> Render {
        let (width, height) = (self.plane.width(), self.plane.height());
        debug!(
            "rendering {}x{} from {} to {}",
            width, height, self.plane.complex_plane.0, self.plane.complex_plane.1
        );

        // Grid columns follow the walk's rows and vice versa.
        let (columns, rows) = (height, width);
        let mut roots = RootRegistry::new();
        let mut samples = vec![
            Sample {
                root: 0,
                steps: 0,
                color: Rgb([0, 0, 0]),
            };
            self.plane.pixel_count()
        ];

        for (i, j) in iproduct!(0..height, 0..width) {
            let sample = self.render_pixel(i, j, &mut roots);
            let (column, row) = (i, j);
            samples[row * columns + column] = sample;
        }

        debug!("discovered {} roots", roots.len());
        Render {
            columns,
            rows,
            samples,
            roots,
        }
    }
}
