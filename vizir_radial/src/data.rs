// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart data: datasets in order, flattened for angle accumulation.

extern crate alloc;

use alloc::vec::Vec;

use crate::{PieDataSet, PieEntry};

/// All datasets of one chart.
///
/// Geometry treats the datasets as one flattened sequence of entries: the global index of
/// an entry is its position in [`PieData::entries`].
#[derive(Clone, Debug, Default)]
pub struct PieData {
    /// Datasets in draw order.
    pub data_sets: Vec<PieDataSet>,
}

impl PieData {
    /// Creates chart data from datasets.
    pub fn new(data_sets: Vec<PieDataSet>) -> Self {
        Self { data_sets }
    }

    /// Creates chart data holding a single dataset.
    pub fn single(data_set: PieDataSet) -> Self {
        Self::new(alloc::vec![data_set])
    }

    /// Number of datasets.
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    /// Dataset at `index`, if any.
    pub fn data_set(&self, index: usize) -> Option<&PieDataSet> {
        self.data_sets.get(index)
    }

    /// Mutable dataset at `index`, if any.
    pub fn data_set_mut(&mut self, index: usize) -> Option<&mut PieDataSet> {
        self.data_sets.get_mut(index)
    }

    /// Total number of entries across datasets.
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(PieDataSet::entry_count).sum()
    }

    /// Sum of all entry values across datasets.
    pub fn y_value_sum(&self) -> f64 {
        self.entries().map(|e| e.value).sum()
    }

    /// All entries in flattened order.
    pub fn entries(&self) -> impl Iterator<Item = &PieEntry> + '_ {
        self.data_sets.iter().flat_map(|set| set.entries.iter())
    }

    /// Global index of the first entry of dataset `data_set_index`.
    pub fn first_index_of(&self, data_set_index: usize) -> usize {
        self.data_sets
            .iter()
            .take(data_set_index)
            .map(PieDataSet::entry_count)
            .sum()
    }

    /// Maps a global entry index to `(data_set_index, index_within_data_set)`.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let mut base = 0;
        for (i, set) in self.data_sets.iter().enumerate() {
            let n = set.entry_count();
            if index < base + n {
                return Some((i, index - base));
            }
            base += n;
        }
        None
    }
}
