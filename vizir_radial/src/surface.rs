// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface the renderer emits into.
//!
//! The renderer decides geometry and text; a [`Surface`] decides how to rasterize it. Every
//! call carries its own paint, so surfaces need no save/restore state. [`Recorder`] keeps the
//! calls as a list of [`DrawCommand`]s, which is what tests and retained-mode hosts use.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::color::palette::css;
use peniko::{Brush, Fill};
use vizir_radial_text::{TextAlign, TextStyle};

use crate::Icon;

/// A paint + width pair for stroked paths (web rings, web lines, leader lines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in surface units.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A 2D drawing target.
pub trait Surface {
    /// Fills `path` with `brush` using `fill` as the winding rule.
    fn fill_path(&mut self, path: &BezPath, brush: &Brush, fill: Fill);

    /// Strokes `path`.
    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle);

    /// Draws one line of text whose top is at `pos.y`, anchored horizontally by `align`.
    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        align: TextAlign,
        style: &TextStyle,
        brush: &Brush,
    );

    /// Draws `icon` centered on `center`.
    fn draw_icon(&mut self, icon: &Icon, center: Point);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A filled path.
    Fill {
        /// Path outline.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
        /// Winding rule.
        fill: Fill,
    },
    /// A stroked path.
    Stroke {
        /// Path outline.
        path: BezPath,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// A text run.
    Text {
        /// Text content (unshaped).
        text: String,
        /// Anchor position.
        pos: Point,
        /// Horizontal alignment.
        align: TextAlign,
        /// Font.
        style: TextStyle,
        /// Text paint.
        brush: Brush,
    },
    /// An icon.
    Icon {
        /// Icon reference.
        icon: Icon,
        /// Icon center.
        center: Point,
    },
}

/// A [`Surface`] that records every call.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Commands in emission order.
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded fills.
    pub fn fills(&self) -> impl Iterator<Item = (&BezPath, &Brush, Fill)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { path, brush, fill } => Some((path, brush, *fill)),
            _ => None,
        })
    }

    /// Recorded strokes.
    pub fn strokes(&self) -> impl Iterator<Item = (&BezPath, &StrokeStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    /// Recorded text runs as `(text, pos, align)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, TextAlign)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                text, pos, align, ..
            } => Some((text.as_str(), *pos, *align)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn fill_path(&mut self, path: &BezPath, brush: &Brush, fill: Fill) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            brush: brush.clone(),
            fill,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        align: TextAlign,
        style: &TextStyle,
        brush: &Brush,
    ) {
        self.commands.push(DrawCommand::Text {
            text: String::from(text),
            pos,
            align,
            style: style.clone(),
            brush: brush.clone(),
        });
    }

    fn draw_icon(&mut self, icon: &Icon, center: Point) {
        self.commands.push(DrawCommand::Icon {
            icon: icon.clone(),
            center,
        });
    }
}
