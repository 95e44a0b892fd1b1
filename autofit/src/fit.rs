// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The size search.
//!
//! Fitting is a bounded hill climb in unit steps:
//!
//! 1. **Shrink-to-fit**: while the text overflows the budget and the size is
//!    above the minimum, step down by one.
//! 2. **Grow-back**: once the widget has ever shrunk, while the text leaves
//!    slack and the size is below the maximum, step up by one.
//!
//! The grow-back check looks for slack at the size it is about to leave, not
//! at the size it is stepping to, so a grow-back can end one step past the
//! largest size that fits. The next call shrinks that step away and grows it
//! back, which keeps repeated calls stable.

use autofit_text::TextMeasurer;

use crate::{FitConfig, FitState};

/// The outcome of one [`fit`] call.
///
/// Carries the new [`FitState`] along with a structured trace of the search,
/// for hosts that want to log or profile fitting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitReport {
    /// The state after the search; store it for the next call.
    pub state: FitState,
    /// The font size the search started from.
    pub start_size: f64,
    /// Number of unit steps taken while shrinking.
    pub shrink_steps: u32,
    /// Number of unit steps taken while growing back.
    pub grow_steps: u32,
    /// Number of calls made to the measurer.
    pub measurements: u32,
    /// `true` if the input was empty text or a non-positive width, in which
    /// case the state is returned untouched.
    pub skipped: bool,
}

impl FitReport {
    pub(crate) fn unchanged(state: FitState) -> Self {
        Self {
            state,
            start_size: state.current_size(),
            shrink_steps: 0,
            grow_steps: 0,
            measurements: 0,
            skipped: true,
        }
    }

    /// The fitted font size.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.state.current_size()
    }

    /// Whether the font size differs from the one the search started at.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.state.current_size() != self.start_size
    }
}

/// Measures one text, remembering the last measurement.
///
/// The shrink loop and the grow-back loop check the same size back to back;
/// this keeps that to one measurer call. Nothing survives past one search.
struct Probe<'a, M: ?Sized> {
    measurer: &'a M,
    text: &'a str,
    last: Option<(f64, f64)>,
    calls: u32,
}

impl<'a, M: TextMeasurer + ?Sized> Probe<'a, M> {
    fn new(measurer: &'a M, text: &'a str) -> Self {
        Self {
            measurer,
            text,
            last: None,
            calls: 0,
        }
    }

    fn width_at(&mut self, size: f64) -> f64 {
        if let Some((last_size, width)) = self.last
            && last_size == size
        {
            return width;
        }
        let width = self.measurer.measure(self.text, size);
        self.calls = self.calls.saturating_add(1);
        self.last = Some((size, width));
        width
    }
}

/// Fits `text` into `available_width` by adjusting the font size in `state`.
///
/// Returns the state untouched (with [`FitReport::skipped`] set) if `text` is
/// empty or `available_width` is not positive. Otherwise the returned size is
/// always within `[config.min_size(), config.max_size()]` provided the input
/// state was.
pub fn fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    available_width: f64,
    config: &FitConfig,
    state: FitState,
) -> FitReport {
    if text.is_empty() || available_width.is_nan() || available_width <= 0.0 {
        log::trace!("skipping fit: text_len={} width={available_width}", text.len());
        return FitReport::unchanged(state);
    }

    let min_size = config.min_size();
    let max_size = config.max_size();
    let start_size = state.current_size();
    let mut size = start_size;
    let mut has_shrunk = state.has_shrunk();
    let mut probe = Probe::new(measurer, text);
    // The size the last width check applies to. Clamping to a bound ends a
    // phase without measuring the clamped size. So does a step too small to
    // change the size, which happens once sizes pass 2^53.
    let mut probe_size = size;

    let mut shrink_steps = 0_u32;
    while size > min_size && probe.width_at(probe_size) > available_width {
        has_shrunk = true;
        let next = size - 1.0;
        shrink_steps = shrink_steps.saturating_add(1);
        if next < min_size || next == size {
            size = min_size;
            break;
        }
        size = next;
        probe_size = size;
    }

    let mut grow_steps = 0_u32;
    if has_shrunk {
        while size < max_size && probe.width_at(probe_size) < available_width {
            let next = size + 1.0;
            grow_steps = grow_steps.saturating_add(1);
            if next > max_size || next == size {
                size = max_size;
                break;
            }
            size = next;
            probe_size = size;
        }
    }

    let report = FitReport {
        state: FitState::from_parts(size, has_shrunk),
        start_size,
        shrink_steps,
        grow_steps,
        measurements: probe.calls,
        skipped: false,
    };
    log::debug!(
        "fit text_len={} width={available_width}: size {start_size} -> {size} \
         (shrink={shrink_steps} grow={grow_steps} measurements={} shrunk={has_shrunk})",
        text.len(),
        report.measurements,
    );
    report
}

/// A [`FitConfig`] bundled with the measurer it fits against.
///
/// The measurer is reused for every call.
#[derive(Clone, Debug)]
pub struct SizeFitter<M> {
    config: FitConfig,
    measurer: M,
}

impl<M: TextMeasurer> SizeFitter<M> {
    /// Creates a fitter for one widget.
    pub fn new(config: FitConfig, measurer: M) -> Self {
        Self { config, measurer }
    }

    /// Runs [`fit`] with this fitter's config and measurer.
    pub fn fit(&self, text: &str, available_width: f64, state: FitState) -> FitReport {
        fit(&self.measurer, text, available_width, &self.config, state)
    }

    /// The font-size range.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// The measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }
}
