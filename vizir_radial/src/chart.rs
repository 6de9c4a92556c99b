// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radial chart: data, configuration, injected geometry, layout, and highlights.
//!
//! The chart owns everything a draw pass reads. Renderers borrow it for the duration of one
//! pass (see [`PieRadarRenderer`]), so they can never outlive it or hold on to its state.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{Point, Rect};
use vizir_radial_text::TextMeasurer;

use crate::spaced_radius::polar;
use crate::{
    AnimationPhase, ChartConfig, ChartError, GeometryModel, Highlight, HighlightSet, PieData,
    PieRadarRenderer, SliceGeometry, Surface, Viewport, needs_highlight,
};

/// Axis capabilities a host may ask any chart for.
///
/// Radial charts answer every query with [`ChartError::Unsupported`]; a caller reaching for
/// an angular axis on one has a logic error.
pub trait ChartCapabilities {
    /// The angular axis value range.
    fn angular_axis_range(&self) -> Result<(f64, f64), ChartError>;

    /// The angular axis labels.
    fn angular_axis_labels(&self) -> Result<&[String], ChartError>;
}

/// A pie/radar chart.
pub struct PieRadarChart {
    data: Option<PieData>,
    config: ChartConfig,
    geometry: Box<dyn GeometryModel>,
    viewport: Viewport,
    circle_box: Rect,
    highlights: HighlightSet,
}

impl core::fmt::Debug for PieRadarChart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PieRadarChart")
            .field("data", &self.data)
            .field("config", &self.config)
            .field("draw_angles", &self.geometry.draw_angles())
            .field("draw_radii", &self.geometry.draw_radii())
            .field("absolute_angles", &self.geometry.absolute_angles())
            .field("viewport", &self.viewport)
            .field("circle_box", &self.circle_box)
            .field("highlights", &self.highlights)
            .finish_non_exhaustive()
    }
}

impl Default for PieRadarChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl PieRadarChart {
    /// Creates an empty chart using the default [`SliceGeometry`].
    pub fn new(config: ChartConfig) -> Self {
        Self::with_geometry(config, Box::new(SliceGeometry::default()))
    }

    /// Creates an empty chart using a custom geometry model.
    pub fn with_geometry(config: ChartConfig, geometry: Box<dyn GeometryModel>) -> Self {
        Self {
            data: None,
            config,
            geometry,
            viewport: Viewport::default(),
            circle_box: Rect::ZERO,
            highlights: HighlightSet::new(),
        }
    }

    /// Replaces the chart data, then recomputes geometry and layout.
    pub fn set_data(&mut self, data: Option<PieData>) {
        self.data = data;
        self.notify_data_changed();
    }

    /// Sets the data and returns the chart.
    pub fn with_data(mut self, data: PieData) -> Self {
        self.set_data(Some(data));
        self
    }

    /// The chart data, if any.
    pub fn data(&self) -> Option<&PieData> {
        self.data.as_ref()
    }

    /// Mutable access to the data; call [`Self::notify_data_changed`] afterwards.
    pub fn data_mut(&mut self) -> Option<&mut PieData> {
        self.data.as_mut()
    }

    /// Recomputes geometry and layout after the data or configuration changed.
    pub fn notify_data_changed(&mut self) {
        self.recompute_geometry();
        self.calculate_offsets();
    }

    /// The configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the configuration and recomputes geometry.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
        self.recompute_geometry();
    }

    /// Sets the chart rotation; geometry is unaffected.
    pub fn set_rotation_angle(&mut self, rotation_angle: f64) {
        self.config.rotation_angle = rotation_angle;
    }

    /// Sets the viewport and lays out the circle box.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calculate_offsets();
    }

    /// Sets the viewport and returns the chart.
    pub fn with_viewport(mut self, content: Rect) -> Self {
        self.set_viewport(Viewport::new(content));
        self
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Rebuilds the geometry arrays from the current data and configuration.
    pub fn recompute_geometry(&mut self) {
        self.geometry.recompute(self.data.as_ref(), &self.config);
    }

    /// Lays out the circle box inside the viewport.
    ///
    /// The circle fills the smaller viewport side, centered, and is inset on every side by
    /// the first dataset's selection shift so highlighted slices stay in bounds. Without data
    /// the previous layout is kept.
    pub fn calculate_offsets(&mut self) {
        let Some(data) = &self.data else {
            return;
        };
        let diameter = self.viewport.min_side();
        let shift = data.data_set(0).map_or(0.0, |s| s.selection_shift);
        // A viewport smaller than the shift leaves an empty circle, not a flipped one.
        let side = (diameter - shift * 2.0).max(0.0);

        self.circle_box = Rect::from_center_size(self.viewport.content.center(), (side, side));
        log::debug!("circle box laid out at {:?}", self.circle_box);
    }

    /// The injected geometry model.
    pub fn geometry(&self) -> &dyn GeometryModel {
        self.geometry.as_ref()
    }

    /// Angular width of each slice, in degrees.
    pub fn draw_angles(&self) -> &[f64] {
        self.geometry.draw_angles()
    }

    /// Radius of each slice.
    pub fn draw_radii(&self) -> &[f64] {
        self.geometry.draw_radii()
    }

    /// End angle of each slice.
    pub fn absolute_angles(&self) -> &[f64] {
        self.geometry.absolute_angles()
    }

    /// Bounding box of the chart circle.
    pub fn circle_box(&self) -> Rect {
        self.circle_box
    }

    /// Center of the chart circle.
    pub fn center_circle_box(&self) -> Point {
        self.circle_box.center()
    }

    /// Radius of the chart circle.
    pub fn radius(&self) -> f64 {
        self.circle_box.width() / 2.0
    }

    /// Slice index under `angle` (degrees, in surface orientation), or `None`.
    pub fn index_for_angle(&self, angle: f64) -> Option<usize> {
        self.geometry.index_for_angle(angle, self.config.rotation_angle)
    }

    /// Maps a flattened entry index to its dataset index.
    pub fn data_set_index_for_index(&self, index: usize) -> Option<usize> {
        self.data.as_ref()?.locate(index).map(|(set, _)| set)
    }

    /// Replaces the highlight set.
    pub fn highlight_values(&mut self, highlights: impl IntoIterator<Item = Highlight>) {
        self.highlights = highlights.into_iter().collect();
    }

    /// Removes all highlights.
    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    /// Current highlights.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Whether entry `index` is highlighted (in any dataset).
    pub fn needs_highlight(&self, index: usize) -> bool {
        needs_highlight(&self.highlights, index)
    }

    /// Anchor for a marker on the highlighted slice: its mid angle, inside the chart.
    pub fn marker_position(&self, highlight: &Highlight, phase: AnimationPhase) -> Option<Point> {
        let draw = *self.draw_angles().get(highlight.index)?;
        let end = *self.absolute_angles().get(highlight.index)?;
        let radius = self.radius();
        let r = radius - radius / 10.0 * 3.6;
        let angle = (self.config.rotation_angle + end - draw / 2.0) * phase.phase_y;
        Some(polar(self.center_circle_box(), r, angle))
    }

    /// Runs a full draw pass: web, data slices, highlights, then values.
    ///
    /// Without data nothing is drawn.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        phase: AnimationPhase,
        measurer: &dyn TextMeasurer,
    ) {
        if self.data.is_none() {
            log::trace!("draw skipped: no data");
            return;
        }
        let renderer = PieRadarRenderer::new(self, phase);
        if self.config.draw_web {
            renderer.draw_web(surface);
        }
        renderer.draw_data(surface);
        if !self.highlights.is_empty() {
            renderer.draw_highlighted(surface, &self.highlights);
        }
        renderer.draw_values(surface, measurer);
    }
}

impl ChartCapabilities for PieRadarChart {
    fn angular_axis_range(&self) -> Result<(f64, f64), ChartError> {
        Err(ChartError::Unsupported("angular axis range"))
    }

    fn angular_axis_labels(&self) -> Result<&[String], ChartError> {
        Err(ChartError::Unsupported("angular axis labels"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AngleMode, PieDataSet};

    fn chart() -> PieRadarChart {
        PieRadarChart::default()
            .with_data(PieData::single(
                PieDataSet::from_values([1.0, 2.0, 3.0, 4.0]).with_selection_shift(10.0),
            ))
            .with_viewport(Rect::new(0.0, 0.0, 300.0, 200.0))
    }

    #[test]
    fn circle_box_fits_smaller_side_inset_by_shift() {
        let c = chart();
        assert_eq!(c.circle_box(), Rect::new(60.0, 10.0, 240.0, 190.0));
        assert_eq!(c.center_circle_box(), Point::new(150.0, 100.0));
        assert_eq!(c.radius(), 90.0);
    }

    #[test]
    fn shift_larger_than_viewport_gives_empty_circle() {
        // Data bound before any viewport: zero content and the default shift of 18.
        let c = PieRadarChart::default()
            .with_data(PieData::single(PieDataSet::from_values([1.0, 2.0])));
        assert_eq!(c.radius(), 0.0);
        assert_eq!(c.circle_box(), Rect::ZERO);

        let c = c.with_viewport(Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_eq!(c.radius(), 0.0);
        assert_eq!(c.center_circle_box(), Point::new(15.0, 15.0));
    }

    #[test]
    fn layout_is_kept_without_data() {
        let mut c = PieRadarChart::default();
        c.set_viewport(Viewport::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(c.circle_box(), Rect::ZERO);
    }

    #[test]
    fn set_data_recomputes_geometry() {
        let mut c = chart();
        assert_eq!(c.absolute_angles(), &[90.0, 180.0, 270.0, 360.0]);
        c.set_data(None);
        assert!(c.draw_angles().is_empty());
    }

    #[test]
    fn config_change_recomputes_geometry() {
        let mut c = chart();
        c.set_config(ChartConfig::default().with_max_angle(180.0));
        assert_eq!(c.draw_angles(), &[45.0, 45.0, 45.0, 45.0]);
    }

    #[test]
    fn index_for_angle_removes_rotation() {
        let mut c = chart();
        c.set_rotation_angle(90.0);
        assert_eq!(c.index_for_angle(100.0), Some(0));
        assert_eq!(c.index_for_angle(80.0), Some(3));
        c.set_config(ChartConfig::default().with_max_angle(180.0).with_rotation(0.0));
        assert_eq!(c.index_for_angle(270.0), None);
    }

    #[test]
    fn injected_geometry_is_used() {
        let c = PieRadarChart::with_geometry(
            ChartConfig::default(),
            Box::new(SliceGeometry::new(AngleMode::ValueProportional)),
        )
        .with_data(PieData::single(PieDataSet::from_values([10.0, 40.0])));
        assert_eq!(c.draw_angles(), &[36.0, 144.0]);
    }

    #[test]
    fn highlight_bookkeeping() {
        let mut c = chart();
        c.highlight_values([Highlight::new(1, 0)]);
        assert!(c.needs_highlight(1));
        assert!(!c.needs_highlight(0));
        c.clear_highlights();
        assert!(c.highlights().is_empty());
    }

    #[test]
    fn marker_sits_on_slice_mid_angle() {
        let mut c = chart().with_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));
        c.set_rotation_angle(0.0);
        // Slice 0 spans [0, 90]; radius 90 => marker radius 90 - 32.4.
        let p = c
            .marker_position(&Highlight::new(0, 0), AnimationPhase::DONE)
            .unwrap();
        let r = 90.0 - 32.4;
        let expected = Point::new(
            100.0 + r * core::f64::consts::FRAC_1_SQRT_2,
            100.0 + r * core::f64::consts::FRAC_1_SQRT_2,
        );
        assert!((p - expected).hypot() < 1e-9, "{p:?} vs {expected:?}");
        assert!(
            c.marker_position(&Highlight::new(9, 0), AnimationPhase::DONE)
                .is_none()
        );
    }

    #[test]
    fn data_set_lookup_for_flattened_index() {
        let c = PieRadarChart::default().with_data(PieData::new(alloc::vec![
            PieDataSet::from_values([1.0]),
            PieDataSet::from_values([1.0, 2.0]),
        ]));
        assert_eq!(c.data_set_index_for_index(0), Some(0));
        assert_eq!(c.data_set_index_for_index(2), Some(1));
        assert_eq!(c.data_set_index_for_index(3), None);
        assert_eq!(PieRadarChart::default().data_set_index_for_index(0), None);
    }

    #[test]
    fn angular_axis_is_unsupported() {
        let c = chart();
        assert_eq!(
            c.angular_axis_range(),
            Err(ChartError::Unsupported("angular axis range"))
        );
        assert!(c.angular_axis_labels().is_err());
    }
}
