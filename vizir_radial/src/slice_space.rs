// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective gap between slices.

use crate::{PieDataSet, Viewport};

/// Returns the linear slice gap to use for `data_set`.
///
/// With automatic disabling off, this is the configured `slice_space`. With it on, the gap
/// is dropped (returns `0`) when the gap, relative to the smaller viewport side, exceeds twice
/// the smallest value's share of `y_value_sum`. Callers convert the result to an angle and
/// skip spacing entirely when only one slice is visible.
pub fn slice_space(data_set: &PieDataSet, viewport: &Viewport, y_value_sum: f64) -> f64 {
    if !data_set.automatically_disable_slice_spacing {
        return data_set.slice_space;
    }

    let space_size_ratio = data_set.slice_space / viewport.min_side();
    let min_value_ratio = data_set.y_min() / y_value_sum * 2.0;

    if space_size_ratio > min_value_ratio {
        log::trace!(
            "slice spacing disabled: ratio {space_size_ratio} exceeds smallest share {min_value_ratio}"
        );
        0.0
    } else {
        data_set.slice_space
    }
}

/// Converts a linear gap at `radius` into degrees of arc.
///
/// A zero gap is zero degrees at any radius, including a degenerate zero radius.
pub fn space_angle(space: f64, radius: f64) -> f64 {
    if space == 0.0 {
        return 0.0;
    }
    space / (crate::DEG_TO_RAD * radius)
}
