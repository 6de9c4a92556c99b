// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling and measurement for radial chart labels.
//!
//! Slice values and entry labels are placed by the chart core, but shaping and
//! rasterization happen on the drawing surface. The only thing placement needs
//! from typography is a line height, so this crate keeps:
//! - [`TextStyle`], the font description carried alongside each text draw,
//! - [`TextAlign`], the horizontal anchor a surface honors when drawing text, and
//! - [`TextMeasurer`], a tiny measurement interface with a heuristic default.
//!
//! It is `no_std` and allocation-light (owned family names use `Arc<str>`).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures single lines of text for label placement.
///
/// Implementations can be heuristic, backed by a shaping engine, or backed by
/// a platform canvas. Placement only ever asks for line heights and widths.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the line height used to stack a value above its label.
    ///
    /// The default measures a reference glyph.
    fn line_height(&self, style: &TextStyle) -> f64 {
        self.measure("M", style).line_height()
    }
}

/// Font description for a run of label or value text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface units (typically points or pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Default style for slice values (small, so values fit inside thin slices).
    #[must_use]
    pub fn value() -> Self {
        Self::new(7.0)
    }

    /// Default style for entry labels.
    #[must_use]
    pub fn entry_label() -> Self {
        Self::new(13.0).with_family(FontFamily::Named(Arc::from("Helvetica Neue")))
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Horizontal anchor of a text draw relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The position is the left edge of the text.
    #[default]
    Left,
    /// The position is the horizontal center of the text.
    Center,
    /// The position is the right edge of the text.
    Right,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Heuristic measurer: ~0.6em per glyph, 0.8em ascent, 0.2em descent.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
