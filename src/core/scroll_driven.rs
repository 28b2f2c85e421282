//! Animators whose pose is a function of section scroll progress plus an idle
//! wobble driven by elapsed time.

use super::bands::{BandInput, BandTable};
use super::constants::*;
use super::motion::{damp, lerp, Animate, FrameInput, Transform};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Yaw the about model spins toward at a given progress.
///
/// Flat until `ABOUT_SPIN_START`, then one full turn over the rest of the
/// section.
#[inline]
pub fn about_spin_target(progress: f32) -> f32 {
    if progress < ABOUT_SPIN_START {
        0.0
    } else {
        TAU * (progress - ABOUT_SPIN_START) * 2.0
    }
}

/// Sinks the about model as the section scrolls by and spins it through the
/// second half.
#[derive(Clone, Debug)]
pub struct AboutAnimator {
    pub start_y: f32,
    pub end_y: f32,
    pub spin_rate: f32,
}

impl Default for AboutAnimator {
    fn default() -> Self {
        Self {
            start_y: ABOUT_START_Y,
            end_y: ABOUT_END_Y,
            spin_rate: ABOUT_SPIN_RATE,
        }
    }
}

impl AboutAnimator {
    pub fn rest_pose() -> Transform {
        Transform::new(Vec3::new(0.0, ABOUT_START_Y, 0.0), Vec3::ZERO, ABOUT_SCALE)
    }
}

impl Animate for AboutAnimator {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform) {
        let p = frame.progress.value();
        transform.position.y = lerp(self.start_y, self.end_y, p);
        transform.rotation.y = damp(
            transform.rotation.y,
            about_spin_target(p),
            self.spin_rate,
            frame.dt,
        );
    }
}

// Skills bands

fn skills_float(input: &BandInput, t: &mut Transform) {
    let time = input.time;
    t.rotation.y = SKILLS_BASE_YAW + (time * 0.2).sin() * 0.3;
    t.rotation.x = (time * 0.15).sin() * 0.1;
    t.rotation.z = (time * 0.1).sin() * 0.05;
    t.position.y = input.base.position.y + (time * 0.5).sin() * 0.2;
}

fn skills_accelerate(input: &BandInput, t: &mut Transform) {
    let speed = 0.2 + input.local * 0.4;
    t.rotation.y = SKILLS_BASE_YAW + (input.time * speed).sin() * 0.5;
    t.rotation.x = 0.1 + (input.time * speed * 0.8).sin() * 0.2;
    t.position.y = input.base.position.y;
}

fn skills_axis_switch(input: &BandInput, t: &mut Transform) {
    let e = input.local;
    t.rotation.y = SKILLS_BASE_YAW - e * PI * 0.5;
    t.rotation.z = e * (input.time * 0.3).sin() * 0.5;
    t.position.y = input.base.position.y - e * 0.3;
}

/// Float, then accelerate, then hand the spin over to the z axis.
pub fn skills_bands() -> BandTable {
    BandTable::new()
        .with_band("float", 0.0, SKILLS_FLOAT_END, skills_float)
        .with_band("accelerate", SKILLS_FLOAT_END, SKILLS_ACCEL_END, skills_accelerate)
        .with_band("axis-switch", SKILLS_ACCEL_END, 1.0, skills_axis_switch)
}

#[derive(Clone, Debug)]
pub struct SkillsAnimator {
    bands: BandTable,
    base: Transform,
    active_band: Option<usize>,
}

impl Default for SkillsAnimator {
    fn default() -> Self {
        Self {
            bands: skills_bands(),
            base: Self::rest_pose(),
            active_band: None,
        }
    }
}

impl SkillsAnimator {
    pub fn rest_pose() -> Transform {
        Transform::new(
            SKILLS_BASE_POSITION,
            Vec3::new(0.0, SKILLS_BASE_YAW, 0.0),
            SKILLS_SCALE,
        )
    }

    /// Band applied on the most recent frame.
    pub fn active_band(&self) -> Option<&'static str> {
        self.active_band.map(|i| self.bands.bands()[i].name)
    }
}

impl Animate for SkillsAnimator {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform) {
        let band = self
            .bands
            .apply(frame.progress.value(), frame.elapsed, self.base, transform);
        if band != self.active_band {
            if let Some(i) = band {
                log::debug!("[skills] band -> {}", self.bands.bands()[i].name);
            }
            self.active_band = band;
        }
    }
}
