// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for configuration checks and capability queries.

/// Errors surfaced by the radial chart API.
///
/// Geometry recompute and draw passes never fail; these are returned only by explicit
/// validation helpers and by capability queries a radial chart cannot answer.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// `range` must be finite and strictly positive.
    #[error("chart range must be finite and positive, got {0}")]
    InvalidRange(f64),
    /// Animation phases must lie in `[0, 1]`.
    #[error("animation phases must be within [0, 1], got x={phase_x} y={phase_y}")]
    InvalidPhase {
        /// The offending angular phase.
        phase_x: f64,
        /// The offending radial phase.
        phase_y: f64,
    },
    /// The requested capability does not exist on radial charts.
    #[error("{0} is not supported by radial charts")]
    Unsupported(&'static str),
}
