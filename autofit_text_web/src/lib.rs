// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM text measurement adapter.
//!
//! This crate provides an [`autofit_text::TextMeasurer`] implementation for
//! `wasm32-*` targets using HTML Canvas `measureText`, the web counterpart of
//! a native paint object's text measurement.
//!
//! Notes:
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//! - Non-`wasm32` builds fall back to a heuristic measurer.

#![no_std]

extern crate alloc;

use alloc::{format, string::String};

use autofit_text::{FontFace, HeuristicTextMeasurer, TextMeasurer};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls back
/// to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    face: FontFace,
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new(FontFace::default())
    }
}

impl WebTextMeasurer {
    /// Returns the CSS `font` shorthand for `face` at `font_size` pixels.
    #[must_use]
    pub fn css_font(face: &FontFace, font_size: f64) -> String {
        let family = face.family.as_css_family();
        let weight = face.weight.0;
        let font_style = match face.style {
            autofit_text::FontStyle::Normal => "normal",
            autofit_text::FontStyle::Italic => "italic",
            autofit_text::FontStyle::Oblique => "oblique",
        };
        format!("{font_style} {weight} {font_size}px {family}")
    }

    /// Creates a web measurer using an offscreen canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new(face: FontFace) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("autofit_text_web: missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("autofit_text_web: missing document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| {
                wasm_bindgen::JsValue::from_str("autofit_text_web: missing 2d context")
            })?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { face, ctx })
    }

    /// Creates a web measurer that uses an existing canvas 2D context.
    ///
    /// This is useful for embedders that want to reuse an existing canvas (or
    /// an offscreen canvas) instead of having `autofit_text_web` create DOM nodes.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(face: FontFace, ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { face, ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new(face: FontFace) -> Self {
        Self { face }
    }

    /// The face this measurer renders with.
    #[must_use]
    pub fn face(&self) -> &FontFace {
        &self.face
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            let font = Self::css_font(&self.face, font_size);
            self.ctx.set_font(&font);
            match self.ctx.measure_text(text) {
                Ok(metrics) => metrics.width(),
                Err(_) => HeuristicTextMeasurer.measure(text, font_size),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, font_size)
    }
}
