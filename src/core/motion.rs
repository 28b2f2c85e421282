//! Interpolation helpers and the per-object transform written by animators.

use super::constants::MAX_FRAME_DT;
use super::scroll::ScrollProgress;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Linear interpolation from `a` to `b` by `t`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One smoothing step toward `target` with the factor clamped to [0, 1].
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    lerp(current, target, factor.clamp(0.0, 1.0))
}

/// Frame-rate independent exponential smoothing toward `target`.
///
/// `rate` is in 1/seconds; the fraction of the remaining distance covered in
/// one step is `1 - exp(-rate * dt)`.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt_sec: f32) -> f32 {
    let alpha = 1.0 - (-rate * dt_sec.max(0.0)).exp();
    approach(current, target, alpha)
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt_sec: f32) -> Vec3 {
    let alpha = (1.0 - (-rate * dt_sec.max(0.0)).exp()).clamp(0.0, 1.0);
    current.lerp(target, alpha)
}

/// Measured frame delta as fed to animators: never negative, capped at
/// `MAX_FRAME_DT`.
#[inline]
pub fn frame_step(raw_dt_sec: f32) -> f32 {
    raw_dt_sec.clamp(0.0, MAX_FRAME_DT)
}

/// Position, Euler rotation (radians, XYZ order) and uniform scale of one
/// visual object. Animators own the values; the renderer only reads them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), q, self.position)
    }
}

/// Per-frame inputs shared by every animator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds accumulated since the animator was mounted.
    pub elapsed: f32,
    /// Scroll progress of the section the animator is bound to.
    pub progress: ScrollProgress,
}

/// Something that rewrites a transform once per rendered frame.
pub trait Animate {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform);
}

/// Shared animators: the frame loop drives the value while another owner
/// (a resize handler, say) can still retune it between frames.
impl<A: Animate + ?Sized> Animate for Rc<RefCell<A>> {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform) {
        self.borrow_mut().update(frame, transform);
    }
}
