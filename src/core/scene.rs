//! A scene is a set of animated objects under one root transform, plus the
//! optional star, particle and rain layers. It produces flat instance lists for the
//! renderer and knows nothing about the GPU.

use super::ambient::{ParticleField, StarField, SymbolRain};
use super::constants::{GOLD, MATRIX_GREEN, STAR_COLOR};
use super::motion::{Animate, FrameInput, Transform};
use super::scroll::ScrollProgress;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Primitive meshes available to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    Quad,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Cube,
        Shape::Tetrahedron,
        Shape::Octahedron,
        Shape::Icosahedron,
        Shape::Dodecahedron,
        Shape::Quad,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

pub struct SceneObject {
    pub name: &'static str,
    pub shape: Shape,
    pub color: [f32; 4],
    pub transform: Transform,
    animator: Option<Box<dyn Animate>>,
}

impl SceneObject {
    pub fn new(name: &'static str, shape: Shape, color: [f32; 4], transform: Transform) -> Self {
        Self {
            name,
            shape,
            color,
            transform,
            animator: None,
        }
    }

    pub fn animated(mut self, animator: impl Animate + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }
}

/// One draw of a primitive with its world matrix and color.
#[derive(Clone, Copy, Debug)]
pub struct Instance {
    pub shape: Shape,
    pub model: Mat4,
    pub color: [f32; 4],
    /// Drawn at full color, ignoring lighting and fog.
    pub emissive: bool,
}

/// Look of one canvas: background, fog band and whether the page shows through.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceStyle {
    pub clear: [f64; 4],
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
    pub ambient: f32,
}

impl SurfaceStyle {
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.clear[3] < 1.0
    }
}

pub struct Scene {
    pub name: &'static str,
    pub root: Transform,
    pub objects: Vec<SceneObject>,
    pub stars: Option<StarField>,
    pub particles: Option<ParticleField>,
    pub particle_color: [f32; 4],
    pub rain: Option<SymbolRain>,
    root_spin: f32,
    elapsed: f32,
}

impl Scene {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            root: Transform::default(),
            objects: Vec::new(),
            stars: None,
            particles: None,
            particle_color: GOLD,
            rain: None,
            root_spin: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Spin the whole scene about Y at `rad_per_sec`.
    pub fn with_root_spin(mut self, rad_per_sec: f32) -> Self {
        self.root_spin = rad_per_sec;
        self
    }

    /// Stars sit outside the spinning root.
    pub fn with_stars(mut self, stars: StarField) -> Self {
        self.stars = Some(stars);
        self
    }

    pub fn with_particles(mut self, field: ParticleField, color: [f32; 4]) -> Self {
        self.particles = Some(field);
        self.particle_color = color;
        self
    }

    pub fn with_rain(mut self, rain: SymbolRain) -> Self {
        self.rain = Some(rain);
        self
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Advance every animator by one frame.
    pub fn update(&mut self, dt: f32, progress: ScrollProgress) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let frame = FrameInput {
            dt,
            elapsed: self.elapsed,
            progress,
        };
        self.root.rotation.y += self.root_spin * dt;
        for object in &mut self.objects {
            if let Some(animator) = object.animator.as_mut() {
                animator.update(&frame, &mut object.transform);
            }
        }
        if let Some(s) = self.stars.as_mut() {
            s.update(self.elapsed);
        }
        if let Some(p) = self.particles.as_mut() {
            p.update(dt, self.elapsed);
        }
        if let Some(r) = self.rain.as_mut() {
            r.update(dt);
        }
    }

    /// Append this frame's draws to `out`.
    pub fn collect_instances(&self, out: &mut Vec<Instance>) {
        let root = self.root.model_matrix();
        out.extend(self.objects.iter().map(|o| Instance {
            shape: o.shape,
            model: root * o.transform.model_matrix(),
            color: o.color,
            emissive: false,
        }));
        if let Some(s) = &self.stars {
            out.extend(s.positions.iter().enumerate().map(|(i, &pos)| Instance {
                shape: Shape::Octahedron,
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(s.star_scale(i)),
                    Quat::IDENTITY,
                    pos,
                ),
                color: STAR_COLOR,
                emissive: true,
            }));
        }
        if let Some(p) = &self.particles {
            let cloud = root
                * Mat4::from_quat(Quat::from_euler(
                    EulerRot::XYZ,
                    p.rotation.x,
                    p.rotation.y,
                    p.rotation.z,
                ));
            out.extend(p.positions.iter().map(|&pos| Instance {
                shape: Shape::Octahedron,
                model: cloud * Mat4::from_scale_rotation_translation(Vec3::splat(p.size), Quat::IDENTITY, pos),
                color: self.particle_color,
                emissive: false,
            }));
        }
        if let Some(r) = &self.rain {
            out.extend(r.drops.iter().map(|d| Instance {
                shape: Shape::Quad,
                model: root * Mat4::from_scale_rotation_translation(Vec3::splat(d.size), Quat::IDENTITY, d.position),
                color: if d.gold { GOLD } else { MATRIX_GREEN },
                emissive: false,
            }));
        }
    }
}
