// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and rendering core for radial (pie/radar) charts.
//!
//! This crate turns a set of datasets into slice geometry and draws it onto a [`Surface`]:
//! - **Geometry** assigns each entry an angle, a radius, and a cumulative end angle.
//! - **Spacing** cuts gaps between slices and moves each slice's apex so the gap stays
//!   parallel-sided.
//! - **Draw passes** emit the web, the slices, highlighted slices, and values with leader
//!   lines, in that order.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in surface coordinates
//! (y down). [`ChartConfig::rotation_angle`] is added to every angle; the default of 270
//! starts the first slice at 12 o'clock.
//!
//! Interaction, animation timing, legends, and platform canvases are out of scope: hosts
//! supply an [`AnimationPhase`] per pass and implement [`Surface`] for their backend.
//!
//! ```
//! use kurbo::Rect;
//! use vizir_radial::{AnimationPhase, PieData, PieDataSet, PieRadarChart, Recorder};
//! use vizir_radial_text::HeuristicTextMeasurer;
//!
//! let chart = PieRadarChart::default()
//!     .with_data(PieData::single(PieDataSet::from_values([1.0, 2.0, 3.0, 4.0])))
//!     .with_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(chart.absolute_angles(), &[90.0, 180.0, 270.0, 360.0]);
//!
//! let mut surface = Recorder::new();
//! chart.draw(&mut surface, AnimationPhase::DONE, &HeuristicTextMeasurer);
//! assert!(!surface.is_empty());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod chart;
mod config;
mod data;
mod data_set;
mod entry;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod highlight;
mod placement;
mod renderer;
mod slice_space;
mod spaced_radius;
mod surface;

pub use chart::{ChartCapabilities, PieRadarChart};
pub use config::{AnimationPhase, ChartConfig, MAX_MAX_ANGLE, MIN_MAX_ANGLE, Viewport};
pub use data::PieData;
pub use data_set::{PieDataSet, ValuePosition};
pub use entry::{ChartEntry, Icon, PieChartEntry, PieEntry};
pub use error::ChartError;
pub use format::{DefaultValueFormatter, ValueFormatter};
pub use geometry::{AngleMode, DEG_TO_RAD, GeometryModel, SliceGeometry, normalized_angle};
pub use highlight::{Highlight, HighlightSet, needs_highlight};
pub use placement::{
    LeaderOptions, SliceFrame, SlicePlacement, TextModes, TextPlacement, icon_position,
    place_slice,
};
pub use renderer::PieRadarRenderer;
pub use slice_space::{slice_space, space_angle};
pub use spaced_radius::minimum_radius_for_spaced_slice;
pub use surface::{DrawCommand, Recorder, StrokeStyle, Surface};
