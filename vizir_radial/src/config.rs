// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level configuration, animation phases, and the viewport.

use kurbo::Rect;
use peniko::Color;
use vizir_radial_text::TextStyle;

use crate::ChartError;

/// Smallest accepted `max_angle`, in degrees.
pub const MIN_MAX_ANGLE: f64 = 90.0;
/// Largest accepted `max_angle`, in degrees.
pub const MAX_MAX_ANGLE: f64 = 360.0;

/// Chart-level settings read on every recompute and draw pass.
///
/// `range` must be finite and positive. Geometry does not guard it: a non-positive range
/// yields non-finite angles. Call [`ChartConfig::validate`] before recomputing when the
/// value comes from untrusted input.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Normalizing denominator for angles and percent values; also the background slice radius.
    pub range: f64,
    max_angle: f64,
    /// Chart rotation in degrees.
    pub rotation_angle: f64,
    /// Number of concentric web rings.
    pub web_line_amount: usize,
    /// Web stroke width.
    pub web_line_width: f64,
    /// Web stroke color.
    pub web_color: Color,
    /// Opacity applied to the web rings, in `[0, 1]`.
    pub web_alpha: f32,
    /// Width of the radial web lines drawn at each slice start; `0` disables them.
    pub web_slice_space: f64,
    /// Whether the web rings are drawn.
    pub draw_web: bool,
    /// Whether translucent full-range slices are drawn behind the data slices.
    pub draw_background_slices: bool,
    /// Whether entry labels are drawn.
    pub draw_entry_labels: bool,
    /// Draw values as `value / range * 100`.
    pub use_percent_values: bool,
    /// Chart-wide fallback for entry label colors.
    pub entry_label_color: Option<Color>,
    /// Chart-wide entry label font, used when a dataset sets none.
    ///
    /// Defaults to [`TextStyle::entry_label`]; with `None` labels use the value font.
    pub entry_label_font: Option<TextStyle>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            range: 100.0,
            max_angle: MAX_MAX_ANGLE,
            rotation_angle: 270.0,
            web_line_amount: 5,
            web_line_width: 1.5,
            web_color: Color::from_rgb8(122, 122, 122),
            web_alpha: 150.0 / 255.0,
            web_slice_space: 5.0,
            draw_web: true,
            draw_background_slices: true,
            draw_entry_labels: true,
            use_percent_values: false,
            entry_label_color: None,
            entry_label_font: Some(TextStyle::entry_label()),
        }
    }
}

impl ChartConfig {
    /// The max angle swept by the whole chart (360 is a full circle, 180 a half).
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Sets the max angle, clamped to `[90, 360]`.
    pub fn set_max_angle(&mut self, max_angle: f64) {
        self.max_angle = max_angle.clamp(MIN_MAX_ANGLE, MAX_MAX_ANGLE);
    }

    /// Sets the max angle, clamped to `[90, 360]`.
    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.set_max_angle(max_angle);
        self
    }

    /// Sets the range.
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn with_rotation(mut self, rotation_angle: f64) -> Self {
        self.rotation_angle = rotation_angle;
        self
    }

    /// Sets the number of web rings.
    pub fn with_web_line_amount(mut self, amount: usize) -> Self {
        self.web_line_amount = amount;
        self
    }

    /// Sets the radial web line width; `0` disables radial web lines.
    pub fn with_web_slice_space(mut self, space: f64) -> Self {
        self.web_slice_space = space;
        self
    }

    /// Enables or disables the web rings.
    pub fn with_draw_web(mut self, enabled: bool) -> Self {
        self.draw_web = enabled;
        self
    }

    /// Enables or disables background slices.
    pub fn with_background_slices(mut self, enabled: bool) -> Self {
        self.draw_background_slices = enabled;
        self
    }

    /// Enables or disables entry labels.
    pub fn with_entry_labels(mut self, enabled: bool) -> Self {
        self.draw_entry_labels = enabled;
        self
    }

    /// Enables or disables percent values.
    pub fn with_percent_values(mut self, enabled: bool) -> Self {
        self.use_percent_values = enabled;
        self
    }

    /// Checks the preconditions geometry relies on.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(ChartError::InvalidRange(self.range));
        }
        Ok(())
    }
}

/// Animation progress supplied by the host's animation driver for one draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationPhase {
    /// Angular reveal progress in `[0, 1]`.
    pub phase_x: f64,
    /// Radial reveal progress in `[0, 1]`.
    pub phase_y: f64,
}

impl AnimationPhase {
    /// Fully revealed.
    pub const DONE: Self = Self {
        phase_x: 1.0,
        phase_y: 1.0,
    };

    /// Creates a phase pair.
    pub fn new(phase_x: f64, phase_y: f64) -> Self {
        Self { phase_x, phase_y }
    }

    /// Checks both phases lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ChartError> {
        let ok = |p: f64| (0.0..=1.0).contains(&p);
        if ok(self.phase_x) && ok(self.phase_y) {
            Ok(())
        } else {
            Err(ChartError::InvalidPhase {
                phase_x: self.phase_x,
                phase_y: self.phase_y,
            })
        }
    }
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self::DONE
    }
}

/// The host's content area, in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Content rectangle the chart lays out in.
    pub content: Rect,
}

impl Viewport {
    /// Creates a viewport over `content`.
    pub fn new(content: Rect) -> Self {
        Self { content }
    }

    /// Content width.
    pub fn content_width(&self) -> f64 {
        self.content.width()
    }

    /// Content height.
    pub fn content_height(&self) -> f64 {
        self.content.height()
    }

    /// The smaller content side.
    pub fn min_side(&self) -> f64 {
        self.content_width().min(self.content_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_angle_is_clamped() {
        let mut c = ChartConfig::default();
        c.set_max_angle(500.0);
        assert_eq!(c.max_angle(), 360.0);
        c.set_max_angle(10.0);
        assert_eq!(c.max_angle(), 90.0);
        c.set_max_angle(180.0);
        assert_eq!(c.max_angle(), 180.0);
        assert_eq!(ChartConfig::default().with_max_angle(-45.0).max_angle(), 90.0);
    }

    #[test]
    fn validate_rejects_non_positive_range() {
        assert!(ChartConfig::default().validate().is_ok());
        assert_eq!(
            ChartConfig::default().with_range(0.0).validate(),
            Err(ChartError::InvalidRange(0.0))
        );
        assert!(ChartConfig::default().with_range(f64::NAN).validate().is_err());
        assert!(ChartConfig::default().with_range(-1.0).validate().is_err());
    }

    #[test]
    fn phase_validation() {
        assert!(AnimationPhase::DONE.validate().is_ok());
        assert!(AnimationPhase::new(0.0, 0.5).validate().is_ok());
        assert!(AnimationPhase::new(1.5, 0.5).validate().is_err());
    }

    #[test]
    fn entry_labels_default_to_their_own_font() {
        let c = ChartConfig::default();
        assert_eq!(c.entry_label_font, Some(TextStyle::entry_label()));
        assert_ne!(c.entry_label_font, Some(TextStyle::value()));
    }

    #[test]
    fn viewport_min_side() {
        let v = Viewport::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!(v.min_side(), 200.0);
    }
}
