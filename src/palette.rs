// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a root index and a step count into a pixel.  Each root gets a
//! base color from a fixed palette; slow convergence darkens it.

use image::Rgb;
use num::clamp;

/// How much each step taken darkens every channel.
pub const DARKENING_FACTOR: usize = 2;

/// Red, Blue, Green, Yellow, Orange, Fuchsia, Gold, Cyan, Magenta.
/// Fuchsia and Magenta are the same color under their web names; a
/// sixth and ninth root are therefore indistinguishable.
pub const PALETTE: [[u8; 3]; 9] = [
    [255, 0, 0],
    [0, 0, 255],
    [0, 128, 0],
    [255, 255, 0],
    [255, 165, 0],
    [255, 0, 255],
    [255, 215, 0],
    [0, 255, 255],
    [255, 0, 255],
];

/// The base color for `root_index` (cycling through the palette) with
/// `steps * DARKENING_FACTOR` taken off each channel, floored at zero.
pub fn pixel_color(root_index: usize, steps: usize) -> Rgb<u8> {
    let base = PALETTE[root_index % PALETTE.len()];
    let darken = steps.saturating_mul(DARKENING_FACTOR);
    let channel = |c: u8| clamp(usize::from(c).saturating_sub(darken), 0, 255) as u8;
    Rgb([channel(base[0]), channel(base[1]), channel(base[2])])
}
