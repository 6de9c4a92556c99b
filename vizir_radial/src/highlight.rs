// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlighted slices.

use smallvec::SmallVec;

/// One highlighted slice: a flattened entry index plus the dataset it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Highlight {
    /// Global entry index into the geometry arrays.
    pub index: usize,
    /// Index of the dataset the highlight targets.
    pub data_set_index: usize,
}

impl Highlight {
    /// Creates a highlight.
    pub fn new(index: usize, data_set_index: usize) -> Self {
        Self {
            index,
            data_set_index,
        }
    }
}

/// The host-owned set of highlights; usually zero or one entry.
pub type HighlightSet = SmallVec<[Highlight; 4]>;

/// Whether any highlight targets entry `index`, in any dataset.
pub fn needs_highlight(highlights: &[Highlight], index: usize) -> bool {
    highlights.iter().any(|h| h.index == index)
}
