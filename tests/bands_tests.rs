// Host-side tests for the rotation band table and the skills model animator.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::bands::{BandInput, BandTable};
use crate::core::scroll_driven::{skills_bands, SkillsAnimator};
use crate::core::{Animate, FrameInput, ScrollProgress, Transform};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-5;

fn band_name(table: &BandTable, progress: f32) -> Option<&'static str> {
    table.select(progress).map(|i| table.bands()[i].name)
}

#[test]
fn lower_bound_is_inclusive_upper_exclusive() {
    let table = skills_bands();
    assert_eq!(band_name(&table, 0.0), Some("float"));
    assert_eq!(band_name(&table, 0.29), Some("float"));
    assert_eq!(band_name(&table, 0.30), Some("accelerate"));
    assert_eq!(band_name(&table, 0.69), Some("accelerate"));
    assert_eq!(band_name(&table, 0.70), Some("axis-switch"));
}

#[test]
fn last_band_includes_its_upper_bound() {
    let table = skills_bands();
    assert_eq!(band_name(&table, 1.0), Some("axis-switch"));
    assert_eq!(table.select(1.0001), None);
    assert_eq!(table.select(-0.01), None);
}

#[test]
fn empty_table_selects_nothing() {
    let table = BandTable::new();
    assert_eq!(table.select(0.5), None);
    let mut t = Transform::default();
    assert_eq!(table.apply(0.5, 0.0, Transform::default(), &mut t), None);
    assert_eq!(t, Transform::default());
}

#[test]
fn local_progress_is_renormalized_per_band() {
    let table = skills_bands();
    let accelerate = &table.bands()[1];
    assert!((accelerate.local(0.3) - 0.0).abs() < EPS);
    assert!((accelerate.local(0.5) - 0.5).abs() < EPS);
    let last = &table.bands()[2];
    assert!((last.local(1.0) - 1.0).abs() < EPS);
}

fn record_local(input: &BandInput, out: &mut Transform) {
    out.position.x = input.local;
    out.position.y = input.base.position.y;
    out.position.z = input.time;
}

#[test]
fn policy_receives_local_time_and_base() {
    let table = BandTable::new()
        .with_band("a", 0.0, 0.5, record_local)
        .with_band("b", 0.5, 1.0, record_local);
    let base = Transform::at(Vec3::new(0.0, -1.5, 0.0));
    let mut out = Transform::default();
    assert_eq!(table.apply(0.75, 3.0, base, &mut out), Some(1));
    assert!((out.position.x - 0.5).abs() < EPS);
    assert_eq!(out.position.y, -1.5);
    assert_eq!(out.position.z, 3.0);
}

#[test]
fn float_band_pose_at_time_zero() {
    let table = skills_bands();
    let base = SkillsAnimator::rest_pose();
    let mut t = base;
    table.apply(0.1, 0.0, base, &mut t);
    assert!((t.rotation.y - FRAC_PI_2).abs() < EPS);
    assert!(t.rotation.x.abs() < EPS);
    assert!(t.rotation.z.abs() < EPS);
    assert!((t.position.y - (-1.5)).abs() < EPS);
}

#[test]
fn accelerate_band_tilts_forward() {
    let table = skills_bands();
    let base = SkillsAnimator::rest_pose();
    let mut t = base;
    table.apply(0.3, 0.0, base, &mut t);
    assert!((t.rotation.y - FRAC_PI_2).abs() < EPS);
    assert!((t.rotation.x - 0.1).abs() < EPS);
    assert!((t.position.y - (-1.5)).abs() < EPS);
}

#[test]
fn axis_switch_band_ends_facing_forward_and_lowered() {
    let table = skills_bands();
    let base = SkillsAnimator::rest_pose();
    let mut t = base;
    table.apply(1.0, 0.0, base, &mut t);
    assert!(t.rotation.y.abs() < EPS);
    assert!(t.rotation.z.abs() < EPS);
    assert!((t.position.y - (-1.8)).abs() < EPS);
}

#[test]
fn skills_animator_tracks_active_band() {
    let mut anim = SkillsAnimator::default();
    let mut t = SkillsAnimator::rest_pose();
    assert_eq!(anim.active_band(), None);

    let mut frame = FrameInput {
        dt: 1.0 / 60.0,
        elapsed: 1.0,
        progress: ScrollProgress::new(0.29),
    };
    anim.update(&frame, &mut t);
    assert_eq!(anim.active_band(), Some("float"));

    frame.progress = ScrollProgress::new(0.3);
    anim.update(&frame, &mut t);
    assert_eq!(anim.active_band(), Some("accelerate"));

    frame.progress = ScrollProgress::END;
    anim.update(&frame, &mut t);
    assert_eq!(anim.active_band(), Some("axis-switch"));
}
