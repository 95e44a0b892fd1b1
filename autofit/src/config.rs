// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font-size range configuration.
//!
//! A host loads [`FitAttributes`] once (from a style sheet, a resource file,
//! or code) and resolves them into an immutable [`FitConfig`] when the widget
//! is constructed. Bad values are normalized rather than rejected: fitting
//! runs on the rendering path and must never fail.

/// Lower font-size bound used when none is configured.
pub const DEFAULT_MIN_TEXT_SIZE: f64 = 20.0;

/// Raw font-size range attributes, as a host would load them.
///
/// Either bound may be missing. Zero, negative and non-finite values are
/// treated as missing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitAttributes {
    /// Smallest font size the fitter may shrink to.
    pub min_text_size: Option<f64>,
    /// Largest font size the fitter may grow back to.
    pub max_text_size: Option<f64>,
}

impl FitAttributes {
    /// Sets the minimum text size.
    #[must_use]
    pub fn with_min_text_size(mut self, size: f64) -> Self {
        self.min_text_size = Some(size);
        self
    }

    /// Sets the maximum text size.
    #[must_use]
    pub fn with_max_text_size(mut self, size: f64) -> Self {
        self.max_text_size = Some(size);
        self
    }
}

/// The resolved, immutable font-size range for one widget.
///
/// Always satisfies `0 <= min_size <= max_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitConfig {
    min_size: f64,
    max_size: f64,
}

impl FitConfig {
    /// Resolves a range from optional bounds.
    ///
    /// A missing or non-positive `min` becomes [`DEFAULT_MIN_TEXT_SIZE`]; a
    /// missing or non-positive `max` becomes `widget_font_size`, the font size
    /// the widget was constructed with. If the resolved bounds are inverted
    /// they are swapped.
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>, widget_font_size: f64) -> Self {
        let widget_font_size = if widget_font_size.is_finite() {
            widget_font_size.max(0.0)
        } else {
            0.0
        };
        let mut min_size = positive(min).unwrap_or(DEFAULT_MIN_TEXT_SIZE);
        let mut max_size = positive(max).unwrap_or(widget_font_size);
        if min_size > max_size {
            core::mem::swap(&mut min_size, &mut max_size);
        }
        log::debug!("resolved text size range: min={min_size} max={max_size}");
        Self { min_size, max_size }
    }

    /// Resolves a range from loaded attributes. See [`FitConfig::new`].
    #[must_use]
    pub fn from_attributes(attrs: FitAttributes, widget_font_size: f64) -> Self {
        Self::new(attrs.min_text_size, attrs.max_text_size, widget_font_size)
    }

    /// The smallest font size the fitter may produce.
    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// The largest font size the fitter may produce.
    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    /// Clamps `size` into `[min_size, max_size]`.
    ///
    /// A non-finite size resolves to `max_size`.
    #[must_use]
    pub fn clamp(&self, size: f64) -> f64 {
        if size.is_finite() {
            size.clamp(self.min_size, self.max_size)
        } else {
            self.max_size
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_bounds_take_defaults() {
        let config = FitConfig::new(None, None, 48.0);
        assert_eq!(config.min_size(), DEFAULT_MIN_TEXT_SIZE, "default minimum");
        assert_eq!(config.max_size(), 48.0, "maximum defaults to widget size");
    }

    #[test]
    fn non_positive_bounds_are_replaced_before_swapping() {
        let config = FitConfig::new(Some(0.0), Some(-5.0), 32.0);
        assert_eq!(config.min_size(), 20.0, "zero minimum replaced by default");
        assert_eq!(config.max_size(), 32.0, "negative maximum replaced by widget size");

        let config = FitConfig::new(Some(f64::NAN), Some(f64::INFINITY), 32.0);
        assert_eq!(config.min_size(), 20.0, "NaN minimum replaced by default");
        assert_eq!(config.max_size(), 32.0, "infinite maximum replaced by widget size");
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let config = FitConfig::new(Some(40.0), Some(12.0), 16.0);
        assert_eq!(config.min_size(), 12.0, "swapped minimum");
        assert_eq!(config.max_size(), 40.0, "swapped maximum");

        // Default minimum above a small widget font.
        let config = FitConfig::new(None, None, 14.0);
        assert_eq!(config.min_size(), 14.0, "widget size becomes the minimum");
        assert_eq!(config.max_size(), 20.0, "default minimum becomes the maximum");
    }

    #[test]
    fn clamp_stays_in_range() {
        let config = FitConfig::new(Some(10.0), Some(30.0), 30.0);
        assert_eq!(config.clamp(5.0), 10.0, "below range");
        assert_eq!(config.clamp(50.0), 30.0, "above range");
        assert_eq!(config.clamp(17.5), 17.5, "inside range");
        assert_eq!(config.clamp(f64::NAN), 30.0, "NaN resolves to the maximum");
    }

    #[test]
    fn attributes_resolve_like_explicit_bounds() {
        let attrs = FitAttributes::default()
            .with_min_text_size(8.0)
            .with_max_text_size(24.0);
        assert_eq!(
            FitConfig::from_attributes(attrs, 100.0),
            FitConfig::new(Some(8.0), Some(24.0), 100.0),
            "attribute and explicit construction agree"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn attributes_load_from_partial_json() {
        let attrs: FitAttributes =
            serde_json::from_str(r#"{ "max_text_size": 36.0 }"#).expect("valid attributes");
        assert_eq!(attrs.min_text_size, None, "missing field stays unset");
        assert_eq!(attrs.max_text_size, Some(36.0), "present field is read");

        let config = FitConfig::from_attributes(attrs, 18.0);
        assert_eq!(config.min_size(), 20.0, "default minimum");
        assert_eq!(config.max_size(), 36.0, "configured maximum");

        let empty: FitAttributes = serde_json::from_str("{}").expect("empty attributes");
        assert_eq!(empty, FitAttributes::default(), "empty object is all defaults");
    }
}
