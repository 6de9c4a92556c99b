// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inner apex radius for spaced slices.
//!
//! When a gap is cut out of both sides of a slice, the slice's straight edges no longer meet
//! at the center. The apex moves outward along the mid angle so that both edges stay parallel
//! to the original slice edges, which keeps the gap the same width along its whole length.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::DEG_TO_RAD;

/// Radius at which a spaced slice's edges meet.
///
/// `angle` is the slice's full (unspaced) angle; `start_angle` and `sweep_angle` describe the
/// spaced outer arc, whose first point is `arc_start`. All angles are in degrees.
///
/// The chord between the arc's end points is the base of an isosceles triangle whose apex
/// angle equals `angle`. Its height, plus the arc's bulge over the chord, is subtracted from
/// `radius`. Callers only apply spacing for `angle <= 180`, which keeps the half-angle
/// tangent finite.
pub fn minimum_radius_for_spaced_slice(
    center: Point,
    radius: f64,
    angle: f64,
    arc_start: Point,
    start_angle: f64,
    sweep_angle: f64,
) -> f64 {
    let angle_middle = start_angle + sweep_angle / 2.0;

    let end = polar(center, radius, start_angle + sweep_angle);
    let middle = polar(center, radius, angle_middle);

    let base = arc_start.distance(end);
    let triangle_height = base / 2.0 * ((180.0 - angle) / 2.0 * DEG_TO_RAD).tan();

    let chord_middle = arc_start.midpoint(end);
    let bulge = middle.distance(chord_middle);

    radius - triangle_height - bulge
}

/// Point at `radius` from `center` along `angle_deg`.
pub(crate) fn polar(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg * DEG_TO_RAD;
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}
