// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Datasets: ordered entries plus the per-dataset slice and text style.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Vec2;
use peniko::Color;
use peniko::color::palette::css;
use vizir_radial_text::TextStyle;

use crate::{DefaultValueFormatter, PieChartEntry, PieEntry, ValueFormatter};

/// Where a value or entry label is drawn relative to its slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValuePosition {
    /// Centered inside the slice, on the label radius.
    #[default]
    InsideSlice,
    /// Outside the slice, at the end of a leader line.
    OutsideSlice,
}

/// An ordered sequence of entries sharing one visual style.
#[derive(Clone)]
pub struct PieDataSet {
    /// Entries in declaration order; this order fixes angular position.
    pub entries: Vec<PieEntry>,
    /// Display name of the dataset.
    pub label: Option<alloc::string::String>,
    /// Slice fill palette, cycled by entry index.
    pub colors: Vec<Color>,
    /// Value text palette, cycled by entry index.
    pub value_colors: Vec<Color>,
    /// Linear gap between adjacent slices, in surface units.
    pub slice_space: f64,
    /// Drop the gap when the smallest slice would be thinner than it.
    pub automatically_disable_slice_spacing: bool,
    /// Radius added to highlighted slices.
    pub selection_shift: f64,
    /// Whether highlights on this dataset are drawn.
    pub highlight_enabled: bool,
    /// Whether the dataset is drawn at all.
    pub visible: bool,
    /// Whether value text is drawn.
    pub draw_values: bool,
    /// Whether entry icons are drawn.
    pub draw_icons: bool,
    /// Icon offset: `y` extends the icon radius, `x` shifts the icon vertically.
    pub icons_offset: Vec2,
    /// Placement of entry labels.
    pub x_value_position: ValuePosition,
    /// Placement of value text.
    pub y_value_position: ValuePosition,
    /// Font for value text.
    pub value_font: TextStyle,
    /// Font for entry labels; falls back to the chart's, then to `value_font`.
    pub entry_label_font: Option<TextStyle>,
    /// Color for entry labels; falls back to the chart's, then to the value color.
    pub entry_label_color: Option<Color>,
    /// Leader line color; no leader line is stroked when `None`.
    pub value_line_color: Option<Color>,
    /// Leader line width.
    pub value_line_width: f64,
    /// Where the leader line starts, as a fraction of the chart radius.
    pub value_line_part1_offset_percentage: f64,
    /// Length of the radial leader segment, as a fraction of the label radius.
    pub value_line_part1_length: f64,
    /// Length of the horizontal leader segment, as a fraction of the label radius.
    pub value_line_part2_length: f64,
    /// Scale the horizontal segment by `|sin(angle)|`.
    pub value_line_variable_length: bool,
    /// Formats value text.
    pub value_formatter: Arc<dyn ValueFormatter>,
}

impl core::fmt::Debug for PieDataSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PieDataSet")
            .field("entries", &self.entries)
            .field("label", &self.label)
            .field("colors", &self.colors)
            .field("value_colors", &self.value_colors)
            .field("slice_space", &self.slice_space)
            .field(
                "automatically_disable_slice_spacing",
                &self.automatically_disable_slice_spacing,
            )
            .field("selection_shift", &self.selection_shift)
            .field("highlight_enabled", &self.highlight_enabled)
            .field("visible", &self.visible)
            .field("draw_values", &self.draw_values)
            .field("draw_icons", &self.draw_icons)
            .field("icons_offset", &self.icons_offset)
            .field("x_value_position", &self.x_value_position)
            .field("y_value_position", &self.y_value_position)
            .field("value_font", &self.value_font)
            .field("entry_label_font", &self.entry_label_font)
            .field("entry_label_color", &self.entry_label_color)
            .field("value_line_color", &self.value_line_color)
            .field("value_line_width", &self.value_line_width)
            .field(
                "value_line_part1_offset_percentage",
                &self.value_line_part1_offset_percentage,
            )
            .field("value_line_part1_length", &self.value_line_part1_length)
            .field("value_line_part2_length", &self.value_line_part2_length)
            .field("value_line_variable_length", &self.value_line_variable_length)
            .field("value_formatter", &"..")
            .finish()
    }
}

impl PieDataSet {
    /// Creates a dataset from owned entries with default styling.
    pub fn new(entries: Vec<PieEntry>) -> Self {
        Self {
            entries,
            label: None,
            colors: vec![Color::from_rgb8(140, 234, 255)],
            value_colors: vec![css::BLACK],
            slice_space: 0.0,
            automatically_disable_slice_spacing: false,
            selection_shift: 18.0,
            highlight_enabled: true,
            visible: true,
            draw_values: true,
            draw_icons: true,
            icons_offset: Vec2::ZERO,
            x_value_position: ValuePosition::InsideSlice,
            y_value_position: ValuePosition::InsideSlice,
            value_font: TextStyle::value(),
            entry_label_font: None,
            entry_label_color: None,
            value_line_color: Some(css::BLACK),
            value_line_width: 1.0,
            value_line_part1_offset_percentage: 0.75,
            value_line_part1_length: 0.3,
            value_line_part2_length: 0.4,
            value_line_variable_length: true,
            value_formatter: Arc::new(DefaultValueFormatter::default()),
        }
    }

    /// Binds host entries, resolving each into a [`PieEntry`] once.
    pub fn bind<'a, E, I>(entries: I) -> Self
    where
        E: PieChartEntry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self::new(entries.into_iter().map(PieEntry::bind).collect())
    }

    /// Creates a dataset of unlabeled entries.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(PieEntry::new).collect())
    }

    /// Sets the dataset label.
    pub fn with_label(mut self, label: impl Into<alloc::string::String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the slice palette. An empty palette is ignored.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    /// Sets the slice palette, forcing every color's alpha to `alpha`.
    pub fn with_colors_alpha(self, colors: impl IntoIterator<Item = Color>, alpha: f32) -> Self {
        self.with_colors(colors.into_iter().map(|c| c.with_alpha(alpha)))
    }

    /// Sets the value text palette. An empty palette is ignored.
    pub fn with_value_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        if !colors.is_empty() {
            self.value_colors = colors;
        }
        self
    }

    /// Sets the slice gap.
    pub fn with_slice_space(mut self, slice_space: f64) -> Self {
        self.slice_space = slice_space;
        self
    }

    /// Enables or disables automatic slice gap removal.
    pub fn with_automatic_slice_spacing(mut self, enabled: bool) -> Self {
        self.automatically_disable_slice_spacing = enabled;
        self
    }

    /// Sets the highlight radius offset.
    pub fn with_selection_shift(mut self, shift: f64) -> Self {
        self.selection_shift = shift;
        self
    }

    /// Sets the label and value placements.
    pub fn with_value_positions(mut self, x: ValuePosition, y: ValuePosition) -> Self {
        self.x_value_position = x;
        self.y_value_position = y;
        self
    }

    /// Enables or disables value text.
    pub fn with_draw_values(mut self, enabled: bool) -> Self {
        self.draw_values = enabled;
        self
    }

    /// Enables or disables icons.
    pub fn with_draw_icons(mut self, enabled: bool) -> Self {
        self.draw_icons = enabled;
        self
    }

    /// Sets the leader line color (or removes leader lines with `None`) and width.
    pub fn with_value_line(mut self, color: Option<Color>, width: f64) -> Self {
        self.value_line_color = color;
        self.value_line_width = width;
        self
    }

    /// Sets the value formatter.
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.value_formatter = Arc::new(formatter);
        self
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<&PieEntry> {
        self.entries.get(index)
    }

    /// Slice color for `index`, cycling through the palette.
    pub fn color(&self, index: usize) -> Color {
        cycle(&self.colors, index).unwrap_or(css::BLACK)
    }

    /// Value text color for `index`, cycling through the palette.
    pub fn value_text_color(&self, index: usize) -> Color {
        cycle(&self.value_colors, index).unwrap_or(css::BLACK)
    }

    /// Smallest entry value, or `0` for an empty dataset.
    pub fn y_min(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.value)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Largest entry value, or `0` for an empty dataset.
    pub fn y_max(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.value)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Number of entries with `|value| > f64::EPSILON`.
    pub fn visible_entry_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_visible()).count()
    }
}

fn cycle(colors: &[Color], index: usize) -> Option<Color> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[index % colors.len()])
    }
}
