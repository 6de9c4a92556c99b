// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value text formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::PieEntry;

/// Turns a slice value into its display text.
///
/// `value` is already converted to a percentage when the chart draws percent values.
pub trait ValueFormatter {
    /// Formats `value` for `entry`, which belongs to dataset `data_set_index`.
    fn format(&self, value: f64, entry: &PieEntry, data_set_index: usize) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64, &PieEntry, usize) -> String,
{
    fn format(&self, value: f64, entry: &PieEntry, data_set_index: usize) -> String {
        self(value, entry, data_set_index)
    }
}

/// Fixed-precision formatter with an optional suffix (e.g. `" %"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultValueFormatter {
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Text appended after the number.
    pub suffix: Option<String>,
}

impl DefaultValueFormatter {
    /// Creates a formatter with `decimals` fraction digits and no suffix.
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals,
            suffix: None,
        }
    }

    /// Appends `suffix` after the number.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

impl Default for DefaultValueFormatter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, value: f64, _entry: &PieEntry, _data_set_index: usize) -> String {
        let mut out = format!("{value:.prec$}", prec = self.decimals);
        // Avoid "-0.0" for values that round to zero.
        if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
            out.remove(0);
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn default_formatter_uses_one_decimal() {
        let e = PieEntry::new(3.0);
        assert_eq!(DefaultValueFormatter::default().format(3.0, &e, 0), "3.0");
        assert_eq!(DefaultValueFormatter::new(2).format(1.005, &e, 0), "1.00");
    }

    #[test]
    fn suffix_is_appended_and_negative_zero_is_dropped() {
        let e = PieEntry::new(0.0);
        let f = DefaultValueFormatter::new(0).with_suffix(" %");
        assert_eq!(f.format(25.0, &e, 0), "25 %");
        assert_eq!(f.format(-0.2, &e, 0), "0 %");
    }

    #[test]
    fn closures_are_formatters() {
        let f = |v: f64, e: &PieEntry, i: usize| {
            let mut s = e.label.clone().unwrap_or_default();
            s.push_str(&i.to_string());
            s.push_str(&format!(":{v}"));
            s
        };
        let e = PieEntry::labeled(2.0, "b");
        assert_eq!(f.format(2.0, &e, 1), "b1:2");
    }
}
