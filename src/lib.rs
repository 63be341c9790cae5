#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton fractal renderer
//!
//! Newton's method finds a root of a polynomial by starting from a
//! guess and repeatedly sliding down the tangent line toward zero.
//! Which root it finds depends on where it starts, and the regions of
//! the complex plane that lead to each root have fractal boundaries.
//! Coloring every point of a rectangle by the root it reaches, and
//! shading it by how many steps that took, gives a Newton fractal.
//!
//! The engine is split into small pieces: complex arithmetic,
//! polynomials, the iteration itself, a registry that hands out
//! identities to roots as they are discovered, a palette, and a
//! renderer that walks the pixels and ties them all together.

extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod complex;
pub mod errors;
pub mod newton;
pub mod palette;
pub mod planes;
pub mod polynomial;
pub mod renderer;
pub mod roots;

pub use complex::ComplexNumber;
pub use errors::NewtonError;
pub use newton::{Convergence, NewtonIterator};
pub use polynomial::Polynomial;
pub use renderer::{NewtonRenderer, Render, Sample};
pub use roots::RootRegistry;
