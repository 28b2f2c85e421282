//! Background motion for the main scene: bobbing primitives, a twinkling
//! star shell, a drifting particle cloud and falling glyph rain.

use super::constants::*;
use super::motion::{Animate, FrameInput, Transform};
use super::scene::Shape;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Placement and tempo of one floating primitive.
#[derive(Clone, Copy, Debug)]
pub struct FloatSpec {
    pub shape: Shape,
    pub position: Vec3,
    pub color: [f32; 4],
    pub scale: f32,
    pub speed: f32,
}

pub fn main_scene_floaters() -> [FloatSpec; 3] {
    [
        FloatSpec {
            shape: Shape::Icosahedron,
            position: Vec3::ZERO,
            color: GOLD,
            scale: 1.5,
            speed: 0.5,
        },
        FloatSpec {
            shape: Shape::Dodecahedron,
            position: Vec3::new(-3.0, 2.0, -2.0),
            color: MATRIX_GREEN,
            scale: 0.8,
            speed: 0.7,
        },
        FloatSpec {
            shape: Shape::Octahedron,
            position: Vec3::new(3.0, -1.0, -1.0),
            color: GOLD,
            scale: 1.2,
            speed: 0.3,
        },
    ]
}

/// Sinusoidal bob around a rest height plus a slow constant spin.
#[derive(Clone, Debug)]
pub struct FloatingMotion {
    phase: f32,
    origin_y: f32,
    speed: f32,
    spin: Vec3,
}

impl FloatingMotion {
    pub fn new(origin_y: f32, speed: f32, phase: f32) -> Self {
        Self {
            phase,
            origin_y,
            speed,
            spin: FLOAT_SPIN,
        }
    }

    /// Start at a random point of the bob cycle so floaters do not move in lockstep.
    pub fn with_random_phase<R: Rng>(origin_y: f32, speed: f32, rng: &mut R) -> Self {
        Self::new(origin_y, speed, rng.gen::<f32>() * FLOAT_PHASE_MAX)
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Animate for FloatingMotion {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform) {
        self.phase += frame.dt * self.speed;
        transform.position.y = self.origin_y + self.phase.sin() * FLOAT_BOB_AMPLITUDE;
        transform.rotation += self.spin * frame.dt * self.speed;
    }
}

/// Distant stars on a spherical shell around the origin. Each star keeps a
/// base size; all of them pulse together on a slow sine.
#[derive(Clone, Debug)]
pub struct StarField {
    pub positions: Vec<Vec3>,
    pub sizes: Vec<f32>,
    speed: f32,
    time: f32,
}

impl StarField {
    /// Radii start at `radius + depth` and step inward by a random fraction
    /// of `depth / count` per star, directions are uniform on the sphere.
    pub fn new<R: Rng>(
        count: usize,
        radius: f32,
        depth: f32,
        factor: f32,
        speed: f32,
        rng: &mut R,
    ) -> Self {
        let increment = depth / count.max(1) as f32;
        let mut r = radius + depth;
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            r -= increment * rng.gen::<f32>();
            let polar = (1.0 - rng.gen::<f32>() * 2.0).acos();
            let azimuth = rng.gen::<f32>() * TAU;
            positions.push(Vec3::new(
                r * polar.sin() * azimuth.sin(),
                r * polar.cos(),
                r * polar.sin() * azimuth.cos(),
            ));
        }
        let sizes = (0..count)
            .map(|_| (0.5 + 0.5 * rng.gen::<f32>()) * factor)
            .collect();
        Self {
            positions,
            sizes,
            speed,
            time: 0.0,
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        self.time = elapsed * self.speed;
    }

    /// Shared size multiplier, between 2 and 4.
    #[inline]
    pub fn pulse(&self) -> f32 {
        3.0 + (self.time + 100.0).sin()
    }

    /// World-space scale of star `i` this frame.
    pub fn star_scale(&self, i: usize) -> f32 {
        self.sizes.get(i).copied().unwrap_or(0.0) * STAR_WORLD_SCALE * self.pulse()
    }
}

/// Cloud of points drifting vertically inside a cube, wrapping at the faces.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    speeds: Vec<f32>,
    half_extent: f32,
    spin: Vec3,
    pub rotation: Vec3,
    pub size: f32,
}

impl ParticleField {
    pub fn new<R: Rng>(count: usize, area: f32, speed: f32, rng: &mut R) -> Self {
        let mut coord = || (rng.gen::<f32>() - 0.5) * area;
        let positions = (0..count)
            .map(|_| Vec3::new(coord(), coord(), coord()))
            .collect();
        let speeds = (0..count).map(|_| rng.gen::<f32>() * speed * 0.5).collect();
        let mut spin_axis = || (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_SPIN_MAX;
        let spin = Vec3::new(spin_axis(), spin_axis(), spin_axis());
        Self {
            positions,
            speeds,
            half_extent: area / 2.0,
            spin,
            rotation: Vec3::ZERO,
            size: PARTICLE_SIZE,
        }
    }

    pub fn update(&mut self, dt: f32, elapsed: f32) {
        let h = self.half_extent;
        for (i, (p, speed)) in self.positions.iter_mut().zip(&self.speeds).enumerate() {
            p.y += (elapsed + i as f32).sin() * speed * dt;
            for axis in 0..3 {
                if p[axis] > h {
                    p[axis] = -h;
                } else if p[axis] < -h {
                    p[axis] = h;
                }
            }
        }
        self.rotation += self.spin * dt;
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RainDrop {
    pub position: Vec3,
    pub speed: f32,
    pub size: f32,
    pub gold: bool,
}

/// Glyph quads falling behind the scene and respawning at the top.
#[derive(Clone, Debug)]
pub struct SymbolRain {
    pub drops: Vec<RainDrop>,
}

impl SymbolRain {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let drops = (0..count)
            .map(|_| RainDrop {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 5.0 - 5.0,
                ),
                speed: rng.gen_range(RAIN_SPEED_MIN..RAIN_SPEED_MAX),
                size: rng.gen::<f32>() * 0.2 + 0.1,
                gold: rng.gen::<f32>() < RAIN_GOLD_SHARE,
            })
            .collect();
        Self { drops }
    }

    pub fn update(&mut self, dt: f32) {
        for d in &mut self.drops {
            d.position.y -= dt * d.speed;
            if d.position.y < RAIN_BOTTOM {
                d.position.y = RAIN_TOP;
            }
        }
    }
}
