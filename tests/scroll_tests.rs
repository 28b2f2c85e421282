// Host-side tests for section scroll progress.
// The main crate is wasm-only, so we mount the pure-Rust core tree directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::{nav_is_scrolled, section_progress, ScrollProgress, ScrollTracker, SectionRect};

const EPS: f32 = 1e-6;

#[test]
fn partially_visible_section_reports_hidden_share() {
    // 600 of 1000 px visible in an 800 px viewport
    let p = section_progress(SectionRect::new(200.0, 1000.0), 800.0);
    assert!((p.value() - 0.4).abs() < EPS, "got {}", p.value());
}

#[test]
fn section_below_viewport_is_at_start() {
    let p = section_progress(SectionRect::new(801.0, 500.0), 800.0);
    assert_eq!(p, ScrollProgress::START);
}

#[test]
fn section_above_viewport_is_at_end() {
    let p = section_progress(SectionRect::new(-600.0, 500.0), 800.0);
    assert_eq!(p, ScrollProgress::END);
}

#[test]
fn zero_height_section_is_at_start() {
    let p = section_progress(SectionRect::new(100.0, 0.0), 800.0);
    assert_eq!(p, ScrollProgress::START);
}

#[test]
fn section_taller_than_viewport_filling_it() {
    // top at 0, viewport shows 800 of 2000 px
    let p = section_progress(SectionRect::new(0.0, 2000.0), 800.0);
    assert!((p.value() - 0.6).abs() < EPS);
}

#[test]
fn progress_is_always_within_unit_range() {
    for height in [0.0, 50.0, 400.0, 800.0, 3000.0] {
        let mut top = 2000.0;
        while top > -4000.0 {
            let v = section_progress(SectionRect::new(top, height), 800.0).value();
            assert!((0.0..=1.0).contains(&v), "top={top} height={height} -> {v}");
            top -= 37.0;
        }
    }
}

#[test]
fn progress_never_decreases_once_section_top_passes_viewport_top() {
    let height = 2000.0;
    let mut last = 0.0;
    let mut top = 0.0;
    while top > -(height + 200.0) {
        let v = section_progress(SectionRect::new(top, height), 800.0).value();
        assert!(v + EPS >= last, "dropped from {last} to {v} at top={top}");
        last = v;
        top -= 10.0;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn entering_section_starts_near_end_then_falls() {
    // only the hidden share counts, so a sliver peeking in at the bottom
    // reads as almost fully scrolled
    let at = |top: f32| section_progress(SectionRect::new(top, 1000.0), 800.0).value();
    assert!((at(799.0) - 0.999).abs() < 1e-4, "got {}", at(799.0));
    assert!((at(600.0) - 0.8).abs() < 1e-4);
    assert!((at(0.0) - 0.2).abs() < 1e-4);
    assert!(at(799.0) > at(600.0) && at(600.0) > at(0.0));
    assert_eq!(at(800.5), 0.0);
}

#[test]
fn nav_turns_compact_strictly_past_fifty_pixels() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(50.0));
    assert!(nav_is_scrolled(50.5));
    assert!(nav_is_scrolled(2400.0));
}

#[test]
fn progress_newtype_clamps_and_rejects_nan() {
    assert_eq!(ScrollProgress::new(1.5).value(), 1.0);
    assert_eq!(ScrollProgress::new(-0.2).value(), 0.0);
    assert_eq!(ScrollProgress::new(f32::NAN).value(), 0.0);
    assert_eq!(ScrollProgress::new(0.25).value(), 0.25);
}

#[test]
fn tracker_keeps_last_value_when_section_missing() {
    let mut tracker = ScrollTracker::new("about");
    assert_eq!(tracker.progress(), ScrollProgress::START);

    let p = tracker.sample(Some(SectionRect::new(200.0, 1000.0)), 800.0);
    assert!((p.value() - 0.4).abs() < EPS);

    let kept = tracker.sample(None, 800.0);
    assert_eq!(kept, p);
    assert_eq!(tracker.section_id(), "about");
}
