// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice geometry: per-entry draw angles, draw radii, and cumulative angles.
//!
//! The arrays are recomputed in full whenever data or `range`/`max_angle` change, and are
//! read by every draw pass and by hit-testing. All angles are in degrees.

extern crate alloc;

use alloc::vec::Vec;

use crate::{ChartConfig, PieData, PieEntry};

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// A source of slice geometry, injected into [`crate::PieRadarChart`].
pub trait GeometryModel {
    /// Rebuilds all arrays from `data` (or clears them when there is no data).
    fn recompute(&mut self, data: Option<&PieData>, config: &ChartConfig);

    /// Angular width of each slice, in degrees.
    fn draw_angles(&self) -> &[f64];

    /// Radius of each slice, in value units.
    fn draw_radii(&self) -> &[f64];

    /// Running sum of `draw_angles`: the angle at which each slice ends.
    fn absolute_angles(&self) -> &[f64];

    /// First slice whose end angle lies beyond `angle`, after removing `rotation`.
    ///
    /// Returns `None` past the last slice.
    fn index_for_angle(&self, angle: f64, rotation: f64) -> Option<usize> {
        let a = normalized_angle(angle - rotation);
        self.absolute_angles().iter().position(|&end| end > a)
    }
}

/// How a slice's angular width is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    /// Every entry of a dataset with `n` entries gets `max_angle / n`, regardless of value.
    ///
    /// This is the radar-style layout: angle encodes position, radius encodes value.
    #[default]
    PerDataSetCount,
    /// Each entry gets `|value| / range * max_angle`.
    ValueProportional,
}

/// The default [`GeometryModel`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceGeometry {
    /// Angle derivation used by `recompute`.
    pub mode: AngleMode,
    draw_angles: Vec<f64>,
    draw_radii: Vec<f64>,
    absolute_angles: Vec<f64>,
}

impl SliceGeometry {
    /// Creates empty geometry using `mode`.
    pub fn new(mode: AngleMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    fn slice_angle(&self, entry: &PieEntry, siblings: usize, config: &ChartConfig) -> f64 {
        let range = config.range;
        match self.mode {
            AngleMode::PerDataSetCount => (range / siblings as f64) / range * config.max_angle(),
            AngleMode::ValueProportional => entry.value.abs() / range * config.max_angle(),
        }
    }
}

impl GeometryModel for SliceGeometry {
    fn recompute(&mut self, data: Option<&PieData>, config: &ChartConfig) {
        self.draw_angles.clear();
        self.draw_radii.clear();
        self.absolute_angles.clear();

        let Some(data) = data else {
            log::trace!("slice geometry cleared: no data");
            return;
        };

        let n = data.entry_count();
        self.draw_angles.reserve(n);
        self.draw_radii.reserve(n);
        self.absolute_angles.reserve(n);

        let mut total = 0.0;
        for set in &data.data_sets {
            let siblings = set.entry_count();
            for entry in &set.entries {
                let angle = self.slice_angle(entry, siblings, config);
                total += angle;
                self.draw_angles.push(angle);
                self.draw_radii.push(entry.value);
                self.absolute_angles.push(total);
            }
        }

        log::debug!(
            "slice geometry recomputed: {n} entries, {total} of {} degrees",
            config.max_angle()
        );
    }

    fn draw_angles(&self) -> &[f64] {
        &self.draw_angles
    }

    fn draw_radii(&self) -> &[f64] {
        &self.draw_radii
    }

    fn absolute_angles(&self) -> &[f64] {
        &self.absolute_angles
    }
}

/// Maps any angle into `[0, 360)`.
///
/// Tiny negative angles whose wrap rounds up to 360 land on the largest angle below 360, so
/// they stay on the last slice.
pub fn normalized_angle(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a >= 0.0 {
        return a;
    }
    let wrapped = a + 360.0;
    if wrapped >= 360.0 {
        360.0_f64.next_down()
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::PieDataSet;

    fn recompute(values: &[f64], config: &ChartConfig, mode: AngleMode) -> SliceGeometry {
        let data = PieData::single(PieDataSet::from_values(values.iter().copied()));
        let mut g = SliceGeometry::new(mode);
        g.recompute(Some(&data), config);
        g
    }

    #[test]
    fn four_entries_get_quarter_turns() {
        let g = recompute(
            &[1.0, 2.0, 3.0, 4.0],
            &ChartConfig::default(),
            AngleMode::PerDataSetCount,
        );
        assert_eq!(g.draw_angles(), &[90.0, 90.0, 90.0, 90.0]);
        assert_eq!(g.absolute_angles(), &[90.0, 180.0, 270.0, 360.0]);
        assert_eq!(g.draw_radii(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn angle_ignores_entry_value_in_count_mode() {
        // Widely different values still share the sweep evenly.
        let g = recompute(
            &[0.5, 1000.0, 7.0],
            &ChartConfig::default(),
            AngleMode::PerDataSetCount,
        );
        for a in g.draw_angles() {
            assert!((a - 120.0).abs() < 1e-9, "angle {a}");
        }
    }

    #[test]
    fn angles_sum_to_max_angle_for_any_count() {
        let config = ChartConfig::default().with_max_angle(270.0).with_range(37.0);
        for n in 1..=40 {
            let values: Vec<f64> = (0..n).map(f64::from).collect();
            let g = recompute(&values, &config, AngleMode::PerDataSetCount);
            let sum: f64 = g.draw_angles().iter().sum();
            assert!((sum - 270.0).abs() < 1e-9, "n={n} sum={sum}");
            let last = *g.absolute_angles().last().unwrap();
            assert!((last - sum).abs() < 1e-9, "n={n} last={last}");
            assert!(
                g.absolute_angles().windows(2).all(|w| w[0] <= w[1]),
                "n={n} not monotonic"
            );
        }
    }

    #[test]
    fn each_data_set_divides_by_its_own_count() {
        let data = PieData::new(vec![
            PieDataSet::from_values([1.0, 1.0]),
            PieDataSet::from_values([1.0, 1.0, 1.0, 1.0]),
        ]);
        let mut g = SliceGeometry::default();
        g.recompute(Some(&data), &ChartConfig::default());
        assert_eq!(g.draw_angles(), &[180.0, 180.0, 90.0, 90.0, 90.0, 90.0]);
        assert_eq!(g.absolute_angles().last(), Some(&720.0));
    }

    #[test]
    fn value_mode_is_proportional_to_value() {
        let g = recompute(
            &[25.0, -50.0],
            &ChartConfig::default(),
            AngleMode::ValueProportional,
        );
        assert_eq!(g.draw_angles(), &[90.0, 180.0]);
        assert_eq!(g.absolute_angles(), &[90.0, 270.0]);
    }

    #[test]
    fn empty_and_missing_data_give_empty_arrays() {
        let g = recompute(&[], &ChartConfig::default(), AngleMode::PerDataSetCount);
        assert!(g.draw_angles().is_empty());
        assert!(g.draw_radii().is_empty());
        assert!(g.absolute_angles().is_empty());

        let mut g = recompute(&[1.0], &ChartConfig::default(), AngleMode::PerDataSetCount);
        g.recompute(None, &ChartConfig::default());
        assert!(g.absolute_angles().is_empty());
    }

    #[test]
    fn recompute_is_deterministic() {
        let config = ChartConfig::default().with_max_angle(200.0);
        let data = PieData::single(PieDataSet::from_values([3.0, 1.0, 4.0, 1.0, 5.0]));
        let mut g = SliceGeometry::default();
        g.recompute(Some(&data), &config);
        let first = g.clone();
        g.recompute(Some(&data), &config);
        assert_eq!(g, first);
    }

    #[test]
    fn index_for_angle_follows_absolute_angles() {
        let g = recompute(
            &[1.0, 2.0, 3.0, 4.0],
            &ChartConfig::default(),
            AngleMode::PerDataSetCount,
        );
        assert_eq!(g.index_for_angle(0.0, 0.0), Some(0));
        assert_eq!(g.index_for_angle(89.9, 0.0), Some(0));
        assert_eq!(g.index_for_angle(90.0, 0.0), Some(1));
        assert_eq!(g.index_for_angle(359.0, 0.0), Some(3));
        // Rotation is removed before the lookup.
        assert_eq!(g.index_for_angle(280.0, 270.0), Some(0));
        assert_eq!(g.index_for_angle(10.0, 270.0), Some(1));
    }

    #[test]
    fn index_for_angle_past_sweep_is_none() {
        let config = ChartConfig::default().with_max_angle(180.0);
        let g = recompute(&[1.0, 2.0], &config, AngleMode::PerDataSetCount);
        assert_eq!(g.index_for_angle(200.0, 0.0), None);
        assert_eq!(SliceGeometry::default().index_for_angle(0.0, 0.0), None);
    }

    #[test]
    fn normalized_angle_wraps_negative_and_large() {
        assert_eq!(normalized_angle(-90.0), 270.0);
        assert_eq!(normalized_angle(450.0), 90.0);
        assert_eq!(normalized_angle(360.0), 0.0);
    }

    #[test]
    fn normalized_angle_stays_below_full_turn() {
        let a = normalized_angle(-1e-14);
        assert!((0.0..360.0).contains(&a), "angle {a}");
        assert!(a > 359.0, "angle {a}");

        // Just before the chart start is the last slice, not past the sweep.
        let g = recompute(
            &[1.0, 2.0, 3.0, 4.0],
            &ChartConfig::default(),
            AngleMode::PerDataSetCount,
        );
        assert_eq!(g.index_for_angle(-1e-14, 0.0), Some(3));
    }
}
