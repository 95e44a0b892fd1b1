// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text measurement adapter.
//!
//! This crate implements [`autofit_text::TextMeasurer`] using Parley, so the
//! fitter searches against shaped advance widths (kerning, ligatures, font
//! fallback) instead of a per-character estimate.
//!
//! A fit measures the same string at many sizes in a row. The measurer keeps
//! one Parley font context and one layout context alive for its whole life, so
//! font loading and shaping scratch buffers are paid for once per widget rather
//! than once per step.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use autofit_text::{FontFace, FontFamily, FontStyle, TextMeasurer};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{FontContext, FontStyle as ParleyFontStyle, FontWeight, LayoutContext};

/// A [`TextMeasurer`] backed by Parley.
///
/// Every measurement uses the [`FontFace`] given at construction; only the
/// size varies. The width of the first line is returned, unwrapped.
pub struct ParleyTextMeasurer {
    contexts: RefCell<Contexts>,
    face: FontFace,
    display_scale: f32,
    quantize: bool,
}

struct Contexts {
    fonts: FontContext,
    layout: LayoutContext<()>,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("face", &self.face)
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer for `face` using the system font collection.
    #[must_use]
    pub fn new(face: FontFace) -> Self {
        Self {
            contexts: RefCell::new(Contexts {
                fonts: FontContext::new(),
                layout: LayoutContext::new(),
            }),
            face,
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the device pixel ratio widths are shaped at.
    ///
    /// Returned widths stay in logical units.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether glyph positions are snapped to whole device pixels.
    ///
    /// Snapping matches what a raster renderer draws, at the cost of widths
    /// that grow in small jumps rather than smoothly with the size.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    /// The face this measurer renders with.
    #[must_use]
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    fn style_properties(&self, font_size: f32) -> [StyleProperty<'_, ()>; 4] {
        let family = match &self.face.family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        let style = match self.face.style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        };
        [
            StyleProperty::FontSize(font_size),
            StyleProperty::FontStack(FontStack::from(family)),
            StyleProperty::FontStyle(style),
            StyleProperty::FontWeight(FontWeight::new(f32::from(self.face.weight.0))),
        ]
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new(FontFace::default())
    }
}

/// Converts a fitter size to Parley's `f32`, mapping garbage to zero.
fn parley_font_size(font_size: f64) -> f32 {
    if !font_size.is_finite() || font_size <= 0.0 {
        return 0.0;
    }
    if font_size >= f64::from(f32::MAX) {
        return f32::MAX;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Value is below f32::MAX"
    )]
    {
        font_size as f32
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let line = text.split('\n').next().unwrap_or("");
        let font_size = parley_font_size(font_size);
        if line.is_empty() || font_size == 0.0 {
            return 0.0;
        }

        let scale = self.display_scale.max(1.0e-6);
        let mut contexts = self.contexts.borrow_mut();
        let contexts = &mut *contexts;
        let mut builder =
            contexts
                .layout
                .ranged_builder(&mut contexts.fonts, line, scale, self.quantize);
        for property in self.style_properties(font_size) {
            builder.push_default(property);
        }
        let mut layout: parley::Layout<()> = builder.build(line);
        // No width limit: fitting asks how wide the single line wants to be.
        layout.break_all_lines(None);

        layout.lines().next().map_or(0.0, |first| {
            f64::from(first.metrics().advance) / f64::from(scale)
        })
    }
}
