// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-widget glue.
//!
//! A text input that wants auto-sized text owns a [`FitField`] and forwards
//! its two layout events to it: text edits and size changes. The field keeps
//! the text, the widget box and the fitting state, and hands back the font
//! size to render with.

use alloc::borrow::ToOwned;
use alloc::string::String;

use autofit_text::TextMeasurer;
use kurbo::{Insets, Size};

use crate::{FitAttributes, FitConfig, FitReport, FitState, SizeFitter};

/// Auto-fitting state for one single-line text widget.
#[derive(Clone, Debug)]
pub struct FitField<M> {
    fitter: SizeFitter<M>,
    state: FitState,
    text: String,
    size: Size,
    padding: Insets,
}

impl<M: TextMeasurer> FitField<M> {
    /// Creates a field for a widget constructed with `font_size`.
    ///
    /// Unset bounds in `attrs` default as described on [`FitConfig::new`]; the
    /// widget's font size becomes the default maximum and the starting size.
    pub fn new(measurer: M, attrs: FitAttributes, font_size: f64) -> Self {
        let config = FitConfig::from_attributes(attrs, font_size);
        let state = FitState::new(&config, font_size);
        Self {
            fitter: SizeFitter::new(config, measurer),
            state,
            text: String::new(),
            size: Size::ZERO,
            padding: Insets::ZERO,
        }
    }

    /// Sets the widget padding. Only the horizontal insets affect fitting.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the initial widget size without fitting.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }

    /// The width text may occupy: widget width minus horizontal padding.
    pub fn available_width(&self) -> f64 {
        self.size.width - self.padding.x0 - self.padding.x1
    }

    /// Handles a text edit.
    pub fn on_text_changed(&mut self, text: &str) -> FitReport {
        text.clone_into(&mut self.text);
        self.refit()
    }

    /// Handles a layout size change.
    ///
    /// Fitting only depends on width, so nothing is done (and `None` is
    /// returned) when only the height changed.
    pub fn on_size_changed(&mut self, new_size: Size, old_size: Size) -> Option<FitReport> {
        self.size = new_size;
        if new_size.width == old_size.width {
            return None;
        }
        Some(self.refit())
    }

    /// Fits the current text into the current width.
    pub fn refit(&mut self) -> FitReport {
        if self.size.width <= 0.0 {
            return FitReport::unchanged(self.state);
        }
        let report = self
            .fitter
            .fit(&self.text, self.available_width(), self.state);
        self.state = report.state;
        report
    }

    /// The font size to render with.
    pub fn font_size(&self) -> f64 {
        self.state.current_size()
    }

    /// The current fitting state.
    pub fn state(&self) -> FitState {
        self.state
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The widget padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The resolved font-size range.
    pub fn config(&self) -> &FitConfig {
        self.fitter.config()
    }
}

#[cfg(test)]
mod tests {
    use autofit_text::HeuristicTextMeasurer;

    use super::*;

    // 0.6em per char: "abcdefghij" is 6px wide per point of font size.
    const TEN: &str = "abcdefghij";

    fn field(min: f64, max: f64) -> FitField<HeuristicTextMeasurer> {
        let attrs = FitAttributes::default()
            .with_min_text_size(min)
            .with_max_text_size(max);
        FitField::new(HeuristicTextMeasurer, attrs, max)
    }

    #[test]
    fn typing_shrinks_and_deleting_grows_back() {
        let mut f = field(10.0, 30.0).with_size(Size::new(150.0, 40.0));
        let r = f.on_text_changed("abc");
        assert_eq!(r.font_size(), 30.0, "54px fits in 150px");

        let r = f.on_text_changed(TEN);
        // 6 * size <= 150 first holds at 25.
        assert_eq!(r.font_size(), 25.0, "shrunk to fit");
        assert!(f.state().has_shrunk(), "flag set");

        let r = f.on_text_changed("abcde");
        assert_eq!(r.font_size(), 30.0, "grew back to the maximum after deleting");
        assert_eq!(f.text(), "abcde", "text stored");
    }

    #[test]
    fn padding_reduces_the_budget() {
        let mut f = field(10.0, 30.0)
            .with_size(Size::new(170.0, 40.0))
            .with_padding(Insets::uniform_xy(10.0, 4.0));
        assert_eq!(f.available_width(), 150.0, "left and right padding removed");
        assert_eq!(f.on_text_changed(TEN).font_size(), 25.0, "fit against 150px");
    }

    #[test]
    fn height_only_changes_do_not_refit() {
        let mut f = field(10.0, 30.0).with_size(Size::new(150.0, 40.0));
        f.on_text_changed(TEN);
        let before = f.font_size();
        let r = f.on_size_changed(Size::new(150.0, 80.0), Size::new(150.0, 40.0));
        assert!(r.is_none(), "same width skips fitting");
        assert_eq!(f.size(), Size::new(150.0, 80.0), "size still recorded");
        assert_eq!(f.font_size(), before, "font size untouched");
    }

    #[test]
    fn widening_after_shrink_grows_back() {
        let mut f = field(10.0, 30.0).with_size(Size::new(150.0, 40.0));
        f.on_text_changed(TEN);
        assert_eq!(f.font_size(), 25.0, "shrunk first");

        let r = f
            .on_size_changed(Size::new(300.0, 40.0), Size::new(150.0, 40.0))
            .expect("width changed");
        assert_eq!(r.font_size(), 30.0, "grew back into the new room");

        let r = f
            .on_size_changed(Size::new(120.0, 40.0), Size::new(300.0, 40.0))
            .expect("width changed");
        assert_eq!(r.font_size(), 20.0, "narrowing shrinks again");
    }

    #[test]
    fn widening_without_prior_shrink_keeps_size() {
        let mut f = field(10.0, 30.0).with_size(Size::new(400.0, 40.0));
        f.on_text_changed("abc");
        let r = f
            .on_size_changed(Size::new(800.0, 40.0), Size::new(400.0, 40.0))
            .expect("width changed");
        assert_eq!(r.font_size(), 30.0, "already at maximum, never shrunk");
        assert!(!f.state().has_shrunk(), "flag untouched");
    }

    #[test]
    fn unlaid_out_widget_is_left_alone() {
        let mut f = field(10.0, 30.0);
        let r = f.on_text_changed(TEN);
        assert!(r.skipped, "zero-width widget is not fitted");
        assert_eq!(r.measurements, 0, "nothing measured");
        assert_eq!(r.state, f.state(), "state untouched");
        assert_eq!(r.start_size, 30.0, "report starts from the current size");
        assert_eq!(f.font_size(), 30.0, "starting size kept");
        assert_eq!(f.text(), TEN, "text still stored for a later layout");

        let mut f = field(10.0, 30.0)
            .with_size(Size::new(15.0, 40.0))
            .with_padding(Insets::uniform_xy(10.0, 0.0));
        assert!(f.on_text_changed(TEN).skipped, "padding eats the whole width");
    }

    #[test]
    fn empty_text_keeps_the_current_size() {
        let mut f = field(10.0, 30.0).with_size(Size::new(150.0, 40.0));
        f.on_text_changed(TEN);
        let r = f.on_text_changed("");
        assert!(r.skipped, "nothing to measure");
        assert_eq!(f.font_size(), 25.0, "size from the last fit is kept");
    }
}
