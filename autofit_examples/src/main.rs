// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `autofit`.
//!
//! Simulates a single-line input being typed into, cleared and resized, and
//! prints the font size the field would render with after each event, once
//! with the heuristic measurer and once with Parley shaping. Run with
//! `RUST_LOG=autofit=debug` to see the search trace.

use autofit::{FitAttributes, FitField, FitReport};
use autofit_text::{FontFace, HeuristicTextMeasurer, TextMeasurer};
use autofit_text_parley::ParleyTextMeasurer;
use kurbo::{Insets, Size};

fn main() {
    env_logger::init();

    println!("== heuristic ==");
    run(HeuristicTextMeasurer);
    println!();
    println!("== parley ==");
    run(ParleyTextMeasurer::new(FontFace::default()));
}

fn run<M: TextMeasurer>(measurer: M) {
    let attrs = FitAttributes::default()
        .with_min_text_size(12.0)
        .with_max_text_size(32.0);
    let mut field = FitField::new(measurer, attrs, 32.0)
        .with_size(Size::new(240.0, 48.0))
        .with_padding(Insets::uniform_xy(8.0, 6.0));

    println!(
        "range {}..={}, available width {}",
        field.config().min_size(),
        field.config().max_size(),
        field.available_width()
    );

    let mut typed = String::new();
    for ch in "the quick brown fox".chars() {
        typed.push(ch);
        let report = field.on_text_changed(&typed);
        print_report(&format!("type {typed:?}"), &report);
    }

    while typed.len() > 3 {
        typed.pop();
        let report = field.on_text_changed(&typed);
        print_report(&format!("delete -> {typed:?}"), &report);
    }

    let old = field.size();
    let taller = Size::new(old.width, old.height * 2.0);
    match field.on_size_changed(taller, old) {
        Some(report) => print_report("taller", &report),
        None => println!("{:<28} skipped (width unchanged)", "taller"),
    }

    field.on_text_changed("the quick brown fox");
    for width in [160.0, 320.0, 480.0] {
        let old = field.size();
        if let Some(report) = field.on_size_changed(Size::new(width, old.height), old) {
            print_report(&format!("resize to {width}"), &report);
        }
    }
}

fn print_report(event: &str, report: &FitReport) {
    println!(
        "{event:<28} size={:>5.1} shrink={:>2} grow={:>2} measured={:>2}{}",
        report.font_size(),
        report.shrink_steps,
        report.grow_steps,
        report.measurements,
        if report.skipped { " (skipped)" } else { "" },
    );
}
