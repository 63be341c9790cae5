// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Keeps track of which roots a render has run into so far.  A root's
//! identity is its position in the order of discovery, which in turn
//! depends on the order in which pixels were visited.

use crate::complex::ComplexNumber;
use std::slice::Iter;

/// Two values whose squared distance is at most this are the same root.
pub const ROOT_MATCH_THRESHOLD: f64 = 0.01;

/// Grows, never shrinks.  One registry per render.
#[derive(Clone, Debug, Default)]
pub struct RootRegistry {
    roots: Vec<ComplexNumber>,
}

impl RootRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        RootRegistry { roots: Vec::new() }
    }

    /// Returns the index of the first known root within the match
    /// threshold of `value`, scanning in discovery order.  If there is
    /// none, `value` becomes a new root and gets the next index.
    ///
    /// NaN is never within any distance of anything, so every NaN that
    /// reaches this function is recorded as a root of its own.
    pub fn find_or_add(&mut self, value: ComplexNumber) -> usize {
        if let Some(index) = self
            .roots
            .iter()
            .position(|&root| (value - root).norm_sqr() <= ROOT_MATCH_THRESHOLD)
        {
            return index;
        }
        self.roots.push(value);
        self.roots.len() - 1
    }

    /// The root with the given identity, if one has been discovered.
    pub fn get(&self, index: usize) -> Option<&ComplexNumber> {
        self.roots.get(index)
    }

    /// All roots, in discovery order.
    pub fn roots(&self) -> &[ComplexNumber] {
        &self.roots
    }

    /// Iterates in discovery order.
    pub fn iter(&self) -> Iter<ComplexNumber> {
        self.roots.iter()
    }

    /// Number of distinct roots so far.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True before the first root is recorded.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a RootRegistry {
    type Item = &'a ComplexNumber;
    type IntoIter = Iter<'a, ComplexNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
