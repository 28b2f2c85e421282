//! Perspective camera description and the rig that eases the background
//! camera between per-section positions.

use super::constants::CAMERA_FOLLOW_RATE;
use super::motion::damp_vec3;
use super::sections::SectionId;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    pub fn looking_at_origin(eye: Vec3, fovy_degrees: f32) -> Self {
        Self {
            eye,
            fovy_radians: fovy_degrees.to_radians(),
            ..Default::default()
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

/// Eases a camera's eye toward the active section's framing.
#[derive(Clone, Debug)]
pub struct CameraRig {
    target: Vec3,
    rate: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            target: SectionId::Home.camera_position(),
            rate: CAMERA_FOLLOW_RATE,
        }
    }
}

impl CameraRig {
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn focus(&mut self, section: SectionId) {
        self.target = section.camera_position();
    }

    pub fn update(&self, camera: &mut Camera, dt_sec: f32) {
        camera.eye = damp_vec3(camera.eye, self.target, self.rate, dt_sec);
    }
}
