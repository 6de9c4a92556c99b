// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart entries.
//!
//! Hosts may keep their own entry types. Anything implementing [`PieChartEntry`] can be bound
//! into a [`crate::PieDataSet`]; binding resolves each entry into a [`PieEntry`] once, so draw
//! passes never have to inspect entry types again.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::Size;

/// Opaque icon reference drawn next to a slice.
///
/// The chart only positions icons; resolving `name` to pixels is the surface's job.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Host-defined icon key.
    pub name: Arc<str>,
    /// Drawn size in surface units.
    pub size: Size,
}

impl Icon {
    /// Creates an icon reference.
    pub fn new(name: impl Into<Arc<str>>, size: impl Into<Size>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }
}

/// The data every chart entry exposes.
pub trait ChartEntry {
    /// The numeric value of the entry.
    fn value(&self) -> f64;

    /// Optional icon drawn at the slice.
    fn icon(&self) -> Option<&Icon> {
        None
    }
}

/// A chart entry that can carry a slice label.
pub trait PieChartEntry: ChartEntry {
    /// Optional slice label.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// One bound data point of a radial chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieEntry {
    /// Slice value; also used as the slice's draw radius.
    pub value: f64,
    /// Optional label text.
    pub label: Option<String>,
    /// Optional icon.
    pub icon: Option<Icon>,
}

impl PieEntry {
    /// Creates an unlabeled entry.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            icon: None,
        }
    }

    /// Creates a labeled entry.
    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self::new(value).with_label(label)
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Resolves any pie-capable entry into an owned `PieEntry`.
    pub fn bind<E: PieChartEntry + ?Sized>(entry: &E) -> Self {
        Self {
            value: entry.value(),
            label: entry.label().map(String::from),
            icon: entry.icon().cloned(),
        }
    }

    /// Whether the slice is large enough to be drawn.
    pub fn is_visible(&self) -> bool {
        self.value.abs() > f64::EPSILON
    }
}

impl ChartEntry for PieEntry {
    fn value(&self) -> f64 {
        self.value
    }

    fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }
}

impl PieChartEntry for PieEntry {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl ChartEntry for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl PieChartEntry for f64 {}

impl From<f64> for PieEntry {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        amount: f64,
        name: &'static str,
    }

    impl ChartEntry for Sample {
        fn value(&self) -> f64 {
            self.amount
        }
    }

    impl PieChartEntry for Sample {
        fn label(&self) -> Option<&str> {
            Some(self.name)
        }
    }

    #[test]
    fn bind_copies_value_and_label_from_host_entry() {
        let e = PieEntry::bind(&Sample {
            amount: 3.5,
            name: "three",
        });
        assert_eq!(e.value, 3.5);
        assert_eq!(e.label.as_deref(), Some("three"));
        assert!(e.icon.is_none());
    }

    #[test]
    fn visibility_uses_machine_epsilon() {
        assert!(!PieEntry::new(0.0).is_visible());
        assert!(!PieEntry::new(f64::EPSILON).is_visible());
        assert!(PieEntry::new(-1.0).is_visible());
        assert!(PieEntry::new(1e-9).is_visible());
    }
}
