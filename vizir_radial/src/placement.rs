// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value and entry label placement.
//!
//! Text is placed either inside a slice (centered on the label radius) or outside it, at the
//! end of a two-segment leader line: a radial segment followed by a horizontal one. The
//! horizontal segment points left on the left half of the chart (mid angle in `[90, 270]`) and
//! right otherwise, so outside text never runs back over the chart.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Vec2};
use vizir_radial_text::TextAlign;

use crate::{DEG_TO_RAD, PieDataSet, ValuePosition, normalized_angle};

/// Gap between the end of a leader line and its text.
const LEADER_TEXT_GAP: f64 = 5.0;

/// Which texts are drawn where, for one dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextModes {
    /// Value text at the end of a leader line.
    pub value_outside: bool,
    /// Entry label at the end of a leader line.
    pub label_outside: bool,
    /// Value text inside the slice.
    pub value_inside: bool,
    /// Entry label inside the slice.
    pub label_inside: bool,
}

impl TextModes {
    /// Resolves the modes from the draw toggles and the dataset's positions.
    pub fn resolve(
        draw_values: bool,
        draw_entry_labels: bool,
        x_value_position: ValuePosition,
        y_value_position: ValuePosition,
    ) -> Self {
        Self {
            value_outside: draw_values && y_value_position == ValuePosition::OutsideSlice,
            label_outside: draw_entry_labels && x_value_position == ValuePosition::OutsideSlice,
            value_inside: draw_values && y_value_position == ValuePosition::InsideSlice,
            label_inside: draw_entry_labels && x_value_position == ValuePosition::InsideSlice,
        }
    }

    /// Whether a leader line is needed.
    pub fn any_outside(&self) -> bool {
        self.value_outside || self.label_outside
    }

    /// Whether any text sits inside the slice.
    pub fn any_inside(&self) -> bool {
        self.value_inside || self.label_inside
    }
}

/// Leader line shape options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderOptions {
    /// Start of the radial segment, as a fraction of the chart radius.
    pub part1_offset_percentage: f64,
    /// Radial segment length, as a fraction of the label radius.
    pub part1_length: f64,
    /// Horizontal segment length, as a fraction of the label radius.
    pub part2_length: f64,
    /// Scale the horizontal segment by `|sin(angle)|`.
    pub variable_length: bool,
}

impl LeaderOptions {
    /// Reads the leader options of `data_set`.
    pub fn from_data_set(data_set: &PieDataSet) -> Self {
        Self {
            part1_offset_percentage: data_set.value_line_part1_offset_percentage,
            part1_length: data_set.value_line_part1_length,
            part2_length: data_set.value_line_part2_length,
            variable_length: data_set.value_line_variable_length,
        }
    }
}

/// The frame one slice's text is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceFrame {
    /// Chart center.
    pub center: Point,
    /// Chart radius.
    pub radius: f64,
    /// Radius of inside text.
    pub label_radius: f64,
    /// Mid angle of the slice in degrees, rotation and phase applied.
    pub angle: f64,
    /// Value text line height.
    pub line_height: f64,
}

impl SliceFrame {
    /// Label radius used for a chart radius: 70% of it.
    pub fn label_radius_for(radius: f64) -> f64 {
        radius - radius / 10.0 * 3.0
    }

    fn direction(&self) -> Vec2 {
        let theta = self.angle * DEG_TO_RAD;
        Vec2::new(theta.cos(), theta.sin())
    }

    fn at(&self, r: f64) -> Point {
        self.center + self.direction() * r
    }

    /// Whether the slice's mid angle points into the left half of the chart.
    pub fn faces_left(&self) -> bool {
        let a = normalized_angle(self.angle);
        (90.0..=270.0).contains(&a)
    }
}

/// Where one text run goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    /// Anchor point.
    pub pos: Point,
    /// Horizontal alignment at `pos`.
    pub align: TextAlign,
}

/// Text layout for one slice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlicePlacement {
    /// Leader line points: radial start, elbow, and horizontal end.
    pub leader: Option<[Point; 3]>,
    /// Value text placement, if drawn.
    pub value: Option<TextPlacement>,
    /// Entry label placement, if drawn.
    pub label: Option<TextPlacement>,
}

/// Lays out the value and label texts of one slice.
///
/// `has_label` is false when the entry carries no label; the label slot then stays empty.
pub fn place_slice(
    frame: &SliceFrame,
    modes: TextModes,
    leader: &LeaderOptions,
    has_label: bool,
) -> SlicePlacement {
    let mut out = SlicePlacement::default();
    let lh = frame.line_height;
    let draw_label_outside = modes.label_outside && has_label;
    let draw_label_inside = modes.label_inside && has_label;

    if modes.any_outside() {
        let pt0 = frame.at(frame.radius * leader.part1_offset_percentage);
        let pt1 = frame.at(frame.label_radius * (1.0 + leader.part1_length));
        let part2 = if leader.variable_length {
            frame.label_radius * leader.part2_length * (frame.angle * DEG_TO_RAD).sin().abs()
        } else {
            frame.label_radius * leader.part2_length
        };

        let (pt2, align, label_point) = if frame.faces_left() {
            let pt2 = Point::new(pt1.x - part2, pt1.y);
            let label_point = Point::new(pt2.x - LEADER_TEXT_GAP, pt2.y - lh);
            (pt2, TextAlign::Right, label_point)
        } else {
            let pt2 = Point::new(pt1.x + part2, pt1.y);
            let label_point = Point::new(pt2.x + LEADER_TEXT_GAP, pt2.y - lh);
            (pt2, TextAlign::Left, label_point)
        };
        out.leader = Some([pt0, pt1, pt2]);

        let half_down = Point::new(label_point.x, label_point.y + lh / 2.0);
        if modes.value_outside && modes.label_outside {
            out.value = Some(TextPlacement {
                pos: label_point,
                align,
            });
            if draw_label_outside {
                out.label = Some(TextPlacement {
                    pos: half_down,
                    align,
                });
            }
        } else if modes.label_outside {
            if draw_label_outside {
                out.label = Some(TextPlacement {
                    pos: half_down,
                    align,
                });
            }
        } else {
            out.value = Some(TextPlacement {
                pos: half_down,
                align,
            });
        }
    }

    if modes.any_inside() {
        let p = frame.at(frame.label_radius);
        let top = Point::new(p.x, p.y - lh);
        let align = TextAlign::Center;

        if modes.value_inside && modes.label_inside {
            out.value = Some(TextPlacement { pos: top, align });
            if draw_label_inside {
                out.label = Some(TextPlacement {
                    pos: Point::new(top.x, top.y + lh),
                    align,
                });
            }
        } else if modes.label_inside {
            if draw_label_inside {
                out.label = Some(TextPlacement {
                    pos: Point::new(top.x, top.y + lh / 2.0),
                    align,
                });
            }
        } else {
            out.value = Some(TextPlacement {
                pos: Point::new(top.x, top.y + lh / 2.0),
                align,
            });
        }
    }

    out
}

/// Icon center for a slice: on the label radius extended by `offset.y`, shifted down by
/// `offset.x`.
pub fn icon_position(frame: &SliceFrame, offset: Vec2) -> Point {
    let p = frame.at(frame.label_radius + offset.y);
    Point::new(p.x, p.y + offset.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(angle: f64) -> SliceFrame {
        SliceFrame {
            center: Point::new(100.0, 100.0),
            radius: 100.0,
            label_radius: SliceFrame::label_radius_for(100.0),
            angle,
            line_height: 10.0,
        }
    }

    fn fixed_leader() -> LeaderOptions {
        LeaderOptions {
            part1_offset_percentage: 0.75,
            part1_length: 0.3,
            part2_length: 0.4,
            variable_length: false,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn label_radius_is_seventy_percent() {
        assert!((SliceFrame::label_radius_for(200.0) - 140.0).abs() < 1e-12);
    }

    #[test]
    fn modes_follow_positions_and_toggles() {
        let m = TextModes::resolve(
            true,
            true,
            ValuePosition::OutsideSlice,
            ValuePosition::InsideSlice,
        );
        assert!(m.label_outside && m.value_inside);
        assert!(!m.value_outside && !m.label_inside);

        let m = TextModes::resolve(
            false,
            true,
            ValuePosition::InsideSlice,
            ValuePosition::OutsideSlice,
        );
        assert!(!m.any_outside());
        assert!(m.label_inside);
    }

    #[test]
    fn inside_value_and_label_stack_around_label_radius() {
        let modes = TextModes::resolve(
            true,
            true,
            ValuePosition::InsideSlice,
            ValuePosition::InsideSlice,
        );
        let p = place_slice(&frame(0.0), modes, &fixed_leader(), true);
        assert!(p.leader.is_none());
        let value = p.value.unwrap();
        let label = p.label.unwrap();
        assert_eq!(value.align, TextAlign::Center);
        assert!(close(value.pos, Point::new(170.0, 90.0)), "{value:?}");
        assert!(close(label.pos, Point::new(170.0, 100.0)), "{label:?}");
    }

    #[test]
    fn inside_single_text_is_centered_half_a_line_up() {
        let modes = TextModes::resolve(
            true,
            false,
            ValuePosition::InsideSlice,
            ValuePosition::InsideSlice,
        );
        let p = place_slice(&frame(0.0), modes, &fixed_leader(), true);
        assert!(p.label.is_none());
        assert!(close(p.value.unwrap().pos, Point::new(170.0, 95.0)));
    }

    #[test]
    fn outside_on_right_half_points_right() {
        let modes = TextModes::resolve(
            true,
            true,
            ValuePosition::OutsideSlice,
            ValuePosition::OutsideSlice,
        );
        let p = place_slice(&frame(0.0), modes, &fixed_leader(), true);
        let [pt0, pt1, pt2] = p.leader.unwrap();
        assert!(close(pt0, Point::new(175.0, 100.0)), "{pt0:?}");
        assert!(close(pt1, Point::new(191.0, 100.0)), "{pt1:?}");
        assert!(close(pt2, Point::new(219.0, 100.0)), "{pt2:?}");
        let value = p.value.unwrap();
        assert_eq!(value.align, TextAlign::Left);
        assert!(close(value.pos, Point::new(224.0, 90.0)), "{value:?}");
        assert!(close(p.label.unwrap().pos, Point::new(224.0, 95.0)));
    }

    #[test]
    fn outside_on_left_half_points_left() {
        let modes = TextModes::resolve(
            true,
            false,
            ValuePosition::OutsideSlice,
            ValuePosition::OutsideSlice,
        );
        let p = place_slice(&frame(180.0), modes, &fixed_leader(), true);
        let [_, pt1, pt2] = p.leader.unwrap();
        assert!(pt2.x < pt1.x);
        let value = p.value.unwrap();
        assert_eq!(value.align, TextAlign::Right);
        assert!(close(value.pos, Point::new(pt2.x - 5.0, pt2.y - 5.0)), "{value:?}");
    }

    #[test]
    fn side_flips_at_quadrant_boundaries_and_wraps() {
        assert!(frame(90.0).faces_left());
        assert!(frame(270.0).faces_left());
        assert!(!frame(89.0).faces_left());
        assert!(!frame(271.0).faces_left());
        assert!(frame(450.0).faces_left());
        assert!(frame(-180.0).faces_left());
    }

    #[test]
    fn variable_leader_shrinks_near_horizontal() {
        let modes = TextModes::resolve(
            true,
            false,
            ValuePosition::InsideSlice,
            ValuePosition::OutsideSlice,
        );
        let leader = LeaderOptions {
            variable_length: true,
            ..fixed_leader()
        };
        let p = place_slice(&frame(0.0), modes, &leader, false);
        let [_, pt1, pt2] = p.leader.unwrap();
        assert!((pt2.x - pt1.x).abs() < 1e-9);
    }

    #[test]
    fn mixed_modes_place_label_outside_and_value_inside() {
        let modes = TextModes::resolve(
            true,
            true,
            ValuePosition::OutsideSlice,
            ValuePosition::InsideSlice,
        );
        let p = place_slice(&frame(0.0), modes, &fixed_leader(), true);
        assert!(p.leader.is_some());
        assert_eq!(p.label.unwrap().align, TextAlign::Left);
        assert_eq!(p.value.unwrap().align, TextAlign::Center);
    }

    #[test]
    fn missing_label_leaves_label_slot_empty() {
        let modes = TextModes::resolve(
            false,
            true,
            ValuePosition::OutsideSlice,
            ValuePosition::OutsideSlice,
        );
        let p = place_slice(&frame(30.0), modes, &fixed_leader(), false);
        assert!(p.leader.is_some());
        assert!(p.label.is_none() && p.value.is_none());
    }

    #[test]
    fn icon_uses_offset_y_radially_and_offset_x_vertically() {
        let p = icon_position(&frame(0.0), Vec2::new(3.0, 10.0));
        assert!(close(p, Point::new(180.0, 103.0)), "{p:?}");
    }
}
