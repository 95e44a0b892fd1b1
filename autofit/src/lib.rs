// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fitting font sizes for single-line text.
//!
//! Given a string, a width budget and a font-size range, `autofit` finds the
//! largest size in the range at which the string's rendered width stays within
//! the budget, and grows the size back when room reopens (after a deletion, or
//! when the widget widens).
//!
//! - [`FitConfig`] is the immutable size range, resolved from
//!   [`FitAttributes`].
//! - [`FitState`] is the per-widget mutable state: the current size and
//!   whether the widget has ever shrunk.
//! - [`fit`] (or [`SizeFitter::fit`]) runs one search and returns a
//!   [`FitReport`].
//! - [`FitField`] is the glue a text widget owns: it tracks text, size and
//!   padding and refits on edits and width changes.
//!
//! Measurement is delegated to an [`autofit_text::TextMeasurer`].
//!
//! ```
//! use autofit::{FitField, FitAttributes};
//! use autofit_text::HeuristicTextMeasurer;
//! use kurbo::Size;
//!
//! let mut field = FitField::new(HeuristicTextMeasurer, FitAttributes::default(), 30.0)
//!     .with_size(Size::new(150.0, 40.0));
//! let report = field.on_text_changed("abcdefghij");
//! assert_eq!(report.font_size(), 25.0);
//! ```

#![no_std]

extern crate alloc;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("autofit requires either the `std` or `libm` feature");

mod config;
mod field;
mod fit;
mod state;

pub use config::{DEFAULT_MIN_TEXT_SIZE, FitAttributes, FitConfig};
pub use field::FitField;
pub use fit::{FitReport, SizeFitter, fit};
pub use state::FitState;
