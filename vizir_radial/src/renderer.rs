// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw passes for a [`PieRadarChart`].
//!
//! A renderer borrows the chart for one pass and emits into a [`Surface`]. Each pass reads
//! the chart's geometry arrays; a chart without data draws nothing. Slices are addressed by
//! their flattened index across all datasets, the same index the geometry arrays use.

use kurbo::{Arc, BezPath, Ellipse, Point, Shape};
use peniko::{Brush, Fill};
use vizir_radial_text::{TextMeasurer, TextStyle};

use crate::spaced_radius::polar;
use crate::{
    AnimationPhase, Highlight, LeaderOptions, PieData, PieDataSet, PieRadarChart, SliceFrame,
    StrokeStyle, Surface, TextModes, icon_position, minimum_radius_for_spaced_slice, place_slice,
    slice_space, space_angle,
};

/// Flattening tolerance for arcs and web rings.
const TOLERANCE: f64 = 0.1;

/// Alpha of background slices.
const BACKGROUND_ALPHA: f32 = 0.1;

/// Borrowing draw-pass driver.
#[derive(Debug)]
pub struct PieRadarRenderer<'a> {
    chart: &'a PieRadarChart,
    phase: AnimationPhase,
}

/// The outer arc of one slice, spacing already removed.
#[derive(Clone, Copy, Debug)]
struct SliceArc {
    center: Point,
    /// Radius the start point and spaced apex are computed at.
    radius: f64,
    start: f64,
    sweep: f64,
}

impl SliceArc {
    fn new(
        center: Point,
        radius: f64,
        slice_angle: f64,
        gap: f64,
        base: f64,
        phase_y: f64,
    ) -> Self {
        Self {
            center,
            radius,
            start: base + gap / 2.0 * phase_y,
            sweep: ((slice_angle - gap) * phase_y).max(0.0),
        }
    }

    fn arc_start(&self) -> Point {
        polar(self.center, self.radius, self.start)
    }

    /// Where the slice's straight edges meet: the spaced apex or the center.
    fn apex(&self, slice_angle: f64, spaced: bool, phase_y: f64) -> Point {
        if !spaced {
            return self.center;
        }
        let inner = minimum_radius_for_spaced_slice(
            self.center,
            self.radius,
            slice_angle * phase_y,
            self.arc_start(),
            self.start,
            self.sweep,
        );
        polar(self.center, inner, self.start + self.sweep / 2.0)
    }

    /// Closed wedge: from the arc start, along the arc at `arc_radius`, then to `apex`.
    fn wedge(&self, arc_radius: f64, apex: Point) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.arc_start());
        if arc_radius != self.radius {
            path.line_to(polar(self.center, arc_radius, self.start));
        }
        let arc = Arc::new(
            self.center,
            (arc_radius, arc_radius),
            self.start.to_radians(),
            self.sweep.to_radians(),
            0.0,
        );
        path.extend(arc.append_iter(TOLERANCE));
        path.line_to(apex);
        path.close_path();
        path
    }
}

impl<'a> PieRadarRenderer<'a> {
    /// Creates a renderer for one pass at `phase`.
    pub fn new(chart: &'a PieRadarChart, phase: AnimationPhase) -> Self {
        Self { chart, phase }
    }

    fn data(&self) -> Option<&'a PieData> {
        let data = self.chart.data();
        if data.is_none() {
            log::trace!("draw pass skipped: no data");
        }
        data
    }

    /// Start angle of the slice at flattened `index`, before rotation.
    fn start_angle(&self, index: usize) -> f64 {
        match index.checked_sub(1) {
            Some(prev) => {
                self.chart
                    .absolute_angles()
                    .get(prev)
                    .copied()
                    .unwrap_or_default()
                    * self.phase.phase_x
            }
            None => 0.0,
        }
    }

    /// Strokes the concentric web rings inside the circle box.
    pub fn draw_web(&self, surface: &mut dyn Surface) {
        if self.data().is_none() {
            return;
        }
        let config = self.chart.config();
        let amount = config.web_line_amount;
        if amount == 0 {
            return;
        }
        let rect = self.chart.circle_box();
        let min_size = rect.width() / amount as f64;

        let mut path = BezPath::new();
        for j in 0..amount {
            let inset = min_size * (j + 1) as f64;
            let ring = Ellipse::from_rect(rect.inset(-inset / 2.0));
            path.extend(ring.path_elements(TOLERANCE));
        }
        let stroke = StrokeStyle::solid(
            config.web_color.multiply_alpha(config.web_alpha),
            config.web_line_width,
        );
        surface.stroke_path(&path, &stroke);
    }

    /// Draws every visible, non-highlighted slice of every visible dataset.
    pub fn draw_data(&self, surface: &mut dyn Surface) {
        let Some(data) = self.data() else {
            return;
        };
        let mut base = 0;
        for (set_index, set) in data.data_sets.iter().enumerate() {
            if set.visible && set.entry_count() > 0 {
                self.draw_data_set(surface, data, set_index, set, base);
            }
            base += set.entry_count();
        }
    }

    fn draw_data_set(
        &self,
        surface: &mut dyn Surface,
        data: &PieData,
        set_index: usize,
        set: &PieDataSet,
        base: usize,
    ) {
        let chart = self.chart;
        let config = chart.config();
        let AnimationPhase { phase_x, phase_y } = self.phase;
        let center = chart.center_circle_box();
        let radius = chart.radius();
        let rotation = config.rotation_angle;

        let visible = set.visible_entry_count();
        let space = if visible <= 1 {
            0.0
        } else {
            slice_space(set, chart.viewport(), data.y_value_sum())
        };
        let gap = if visible == 1 {
            0.0
        } else {
            space_angle(space, radius)
        };
        log::trace!("drawing data set {set_index}: {visible} visible, gap {gap} degrees");

        let web_stroke = StrokeStyle::solid(config.web_color, config.web_line_width);
        let mut angle = self.start_angle(base);

        for (j, entry) in set.entries.iter().enumerate() {
            let index = base + j;
            let (Some(&slice_angle), Some(&slice_radius)) = (
                chart.draw_angles().get(index),
                chart.draw_radii().get(index),
            ) else {
                break;
            };

            if entry.is_visible() && !chart.needs_highlight(index) {
                let spaced = space > 0.0 && slice_angle <= 180.0;
                let start = rotation + angle * phase_y;

                if config.web_slice_space > 0.0 && slice_angle <= 180.0 {
                    let mut line = BezPath::new();
                    line.move_to(polar(center, radius, start));
                    line.line_to(center);
                    line.close_path();
                    surface.stroke_path(&line, &web_stroke);
                }

                let arc = SliceArc::new(center, radius, slice_angle, gap, start, phase_y);
                let apex = arc.apex(slice_angle, spaced, phase_y);

                if config.draw_background_slices {
                    let brush = Brush::Solid(set.color(j).with_alpha(BACKGROUND_ALPHA));
                    surface.fill_path(&arc.wedge(config.range, apex), &brush, Fill::EvenOdd);
                }

                let brush = Brush::Solid(set.color(j));
                surface.fill_path(&arc.wedge(slice_radius, apex), &brush, Fill::EvenOdd);
            }

            angle += slice_angle * phase_x;
        }
    }

    /// Draws highlighted slices pushed out by their dataset's selection shift.
    ///
    /// Highlights naming an index outside the geometry, a missing dataset, or a dataset with
    /// highlighting disabled are skipped.
    pub fn draw_highlighted(&self, surface: &mut dyn Surface, highlights: &[Highlight]) {
        let Some(data) = self.data() else {
            return;
        };
        let chart = self.chart;
        let phase_y = self.phase.phase_y;
        let center = chart.center_circle_box();
        let radius = chart.radius();
        let rotation = chart.config().rotation_angle;

        for h in highlights {
            let index = h.index;
            let Some(&slice_angle) = chart.draw_angles().get(index) else {
                log::trace!("highlight {index} skipped: out of range");
                continue;
            };
            let Some(set) = data.data_set(h.data_set_index) else {
                log::trace!("highlight {index} skipped: no data set {}", h.data_set_index);
                continue;
            };
            if !set.highlight_enabled {
                continue;
            }

            let visible = set.visible_entry_count();
            let space = if visible <= 1 { 0.0 } else { set.slice_space };
            let spaced = space > 0.0 && slice_angle <= 180.0;
            let shifted_radius = radius + set.selection_shift;
            let (gap, shifted_gap) = if visible == 1 {
                (0.0, 0.0)
            } else {
                (space_angle(space, radius), space_angle(space, shifted_radius))
            };

            let base = rotation + self.start_angle(index) * phase_y;
            let outer = SliceArc::new(center, radius, slice_angle, gap, base, phase_y);
            let shifted = SliceArc::new(
                center,
                shifted_radius,
                slice_angle,
                shifted_gap,
                base,
                phase_y,
            );
            let apex = outer.apex(slice_angle, spaced, phase_y);

            let local = index
                .checked_sub(data.first_index_of(h.data_set_index))
                .unwrap_or(index);
            let brush = Brush::Solid(set.color(local));
            surface.fill_path(&shifted.wedge(shifted_radius, apex), &brush, Fill::EvenOdd);
        }
    }

    /// Draws values, entry labels, leader lines, and icons.
    pub fn draw_values(&self, surface: &mut dyn Surface, measurer: &dyn TextMeasurer) {
        let Some(data) = self.data() else {
            return;
        };
        let chart = self.chart;
        let config = chart.config();
        let phase_y = self.phase.phase_y;
        let center = chart.center_circle_box();
        let radius = chart.radius();
        let label_radius = SliceFrame::label_radius_for(radius);
        let rotation = config.rotation_angle;
        let y_value_sum = data.y_value_sum();

        let mut index = 0;
        for (set_index, set) in data.data_sets.iter().enumerate() {
            let count = set.entry_count();
            if !set.visible || (!set.draw_values && !config.draw_entry_labels && !set.draw_icons)
            {
                index += count;
                continue;
            }

            let modes = TextModes::resolve(
                set.draw_values,
                config.draw_entry_labels,
                set.x_value_position,
                set.y_value_position,
            );
            let leader = LeaderOptions::from_data_set(set);
            let line_height = measurer.line_height(&set.value_font);
            let label_font: &TextStyle = set
                .entry_label_font
                .as_ref()
                .or(config.entry_label_font.as_ref())
                .unwrap_or(&set.value_font);
            let leader_stroke = set
                .value_line_color
                .map(|color| StrokeStyle::solid(color, set.value_line_width));
            let space = slice_space(set, chart.viewport(), y_value_sum);
            let middle_gap = space_angle(space, label_radius);

            for (j, entry) in set.entries.iter().enumerate() {
                let Some(&slice_angle) = chart.draw_angles().get(index) else {
                    break;
                };
                let angle = self.start_angle(index) + (slice_angle - middle_gap / 2.0) / 2.0;
                let frame = SliceFrame {
                    center,
                    radius,
                    label_radius,
                    angle: rotation + angle * phase_y,
                    line_height,
                };

                let value = if config.use_percent_values {
                    entry.value / config.range * 100.0
                } else {
                    entry.value
                };
                let text = set.value_formatter.format(value, entry, set_index);
                let placement = place_slice(&frame, modes, &leader, entry.label.is_some());

                if let (Some([p0, p1, p2]), Some(stroke)) = (placement.leader, &leader_stroke) {
                    let mut line = BezPath::new();
                    line.move_to(p0);
                    line.line_to(p1);
                    line.line_to(p2);
                    surface.stroke_path(&line, stroke);
                }

                let value_color = set.value_text_color(j);
                if let Some(p) = placement.value {
                    let brush = Brush::Solid(value_color);
                    surface.draw_text(&text, p.pos, p.align, &set.value_font, &brush);
                }
                if let (Some(p), Some(label)) = (placement.label, entry.label.as_deref()) {
                    let color = set
                        .entry_label_color
                        .or(config.entry_label_color)
                        .unwrap_or(value_color);
                    surface.draw_text(label, p.pos, p.align, label_font, &Brush::Solid(color));
                }

                if set.draw_icons
                    && let Some(icon) = &entry.icon
                {
                    surface.draw_icon(icon, icon_position(&frame, set.icons_offset));
                }

                index += 1;
            }
            // Entries past the geometry arrays are skipped; keep the index aligned.
            index = index.max(data.first_index_of(set_index) + count);
        }
    }
}
