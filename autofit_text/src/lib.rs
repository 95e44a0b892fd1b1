// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for font-size fitting.
//!
//! Fitting a string into a width budget needs exactly one thing from the text
//! stack: the rendered advance width of a single line at a given font size.
//! `autofit` keeps shaping and rendering downstream, so the fitter depends on
//! the tiny [`TextMeasurer`] interface defined here.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::sync::Arc;

/// A minimal text measurement interface used by the size fitter.
///
/// A measurer is configured with a fixed font face; the fitter only varies the
/// font size between calls. Each call must be pure given its arguments: the
/// fitter measures the same text many times during one search and assumes the
/// answers are consistent.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Returns the advance width of `text` rendered at `font_size`.
    ///
    /// `text` is treated as a single line. The result is in the same linear
    /// units as `font_size` (typically pixels) and must be finite and
    /// non-negative.
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        (**self).measure(text, font_size)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        (**self).measure(text, font_size)
    }
}

/// The font face a measurer renders with.
///
/// Everything that affects advance width except the size, which is the one
/// quantity the fitter searches over.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontFace {
    /// The preferred font family.
    pub family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub style: FontStyle,
}

impl FontFace {
    /// Creates a normal-weight, upright face in the given family.
    #[must_use]
    pub fn new(family: FontFamily) -> Self {
        Self {
            family,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for FontFace {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif)
    }
}

/// Font family selection for measurement.
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
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
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

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em, so width scales linearly with
/// both the font size and the number of characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    /// Average advance of one glyph, in ems.
    pub const AVERAGE_ADVANCE_EM: f64 = 0.6;
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let text = text.split('\n').next().unwrap_or("");
        Self::AVERAGE_ADVANCE_EM * font_size.max(0.0) * text.chars().count() as f64
    }
}
