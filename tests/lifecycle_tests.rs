// Host-side tests for mount bookkeeping and frame pacing.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::frame_step;
use crate::core::lifecycle::MountGeneration;

#[test]
fn newer_mount_supersedes_older_ticket() {
    let mut generation = MountGeneration::default();
    let first = generation.begin();
    assert!(generation.is_current(first));

    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn unmount_during_pending_mount_invalidates_it() {
    let mut generation = MountGeneration::default();
    let pending = generation.begin();
    generation.cancel();
    assert!(!generation.is_current(pending));

    // a later mount gets a fresh, valid ticket
    let next = generation.begin();
    assert_ne!(next, pending);
    assert!(generation.is_current(next));
}

#[test]
fn frame_step_passes_normal_frames_through() {
    assert_eq!(frame_step(1.0 / 60.0), 1.0 / 60.0);
    assert_eq!(frame_step(0.0), 0.0);
    assert_eq!(frame_step(0.1), 0.1);
}

#[test]
fn frame_step_caps_long_gaps_and_drops_negative_time() {
    assert_eq!(frame_step(0.1001), 0.1);
    assert_eq!(frame_step(5.0), 0.1);
    assert_eq!(frame_step(-0.02), 0.0);
}
