//! Self-driven spaceship flight: a left-to-right pass that wraps, holds at the
//! left edge after the first pass and parks for good after the last one.
//!
//! ```text
//! Running --(pass 1 done)--> Paused --(pause elapsed)--> Running
//! Running --(pass `max_loops` done)--> Complete
//! ```

use super::constants::*;
use super::motion::{approach, Animate, FrameInput, Transform};
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    Running,
    Paused,
    Complete,
}

/// Tuning for one flight. Speed is in world units per second.
#[derive(Clone, Debug)]
pub struct FlightConfig {
    pub left_boundary: f32,
    pub right_boundary: f32,
    pub speed: f32,
    pub wobble_amount: f32,
    pub wobble_speed: f32,
    pub roll_speed: f32,
    pub center_point: f32,
    pub center_threshold: f32,
    pub pause_duration: f32,
    pub max_loops: u32,
    pub base_position: Vec3,
    pub initial_rotation: Vec3,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            left_boundary: FLIGHT_LEFT_BOUNDARY,
            right_boundary: FLIGHT_RIGHT_BOUNDARY,
            speed: FLIGHT_SPEED_PER_SEC,
            wobble_amount: FLIGHT_WOBBLE_AMOUNT,
            wobble_speed: FLIGHT_WOBBLE_SPEED,
            roll_speed: FLIGHT_ROLL_SPEED,
            center_point: FLIGHT_CENTER_POINT,
            center_threshold: FLIGHT_CENTER_THRESHOLD,
            pause_duration: FLIGHT_PAUSE_SEC,
            max_loops: FLIGHT_MAX_LOOPS,
            base_position: Vec3::new(FLIGHT_LEFT_BOUNDARY, FLIGHT_BASE_Y, 0.0),
            initial_rotation: Vec3::new(0.0, FLIGHT_INITIAL_YAW, 0.0),
        }
    }
}

impl FlightConfig {
    /// Base height for the given viewport width (narrow screens fly lower).
    pub fn base_y_for_width(width_px: f32) -> f32 {
        if width_px < NARROW_VIEWPORT_PX {
            FLIGHT_BASE_Y_NARROW
        } else {
            FLIGHT_BASE_Y
        }
    }
}

/// Mutable flight state plus its tuning. Owned by exactly one animator.
#[derive(Clone, Debug)]
pub struct AnimationParams {
    pub config: FlightConfig,
    pub x_position: f32,
    pub loop_count: u32,
    pub pause_timer: f32,
    pub phase: FlightPhase,
}

impl AnimationParams {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            x_position: config.left_boundary,
            config,
            loop_count: 0,
            pause_timer: 0.0,
            phase: FlightPhase::Running,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == FlightPhase::Complete
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == FlightPhase::Paused
    }

    /// Pose the ship holds before the first frame.
    pub fn initial_transform(&self) -> Transform {
        Transform::new(
            self.config.base_position,
            self.config.initial_rotation,
            FLIGHT_SCALE,
        )
    }
}

/// Advance the flight by one frame.
///
/// `elapsed` drives the idle wobble; `dt` drives travel, the pause timer and
/// roll smoothing.
pub fn step_flight(params: &mut AnimationParams, dt: f32, elapsed: f32, transform: &mut Transform) {
    match params.phase {
        FlightPhase::Complete => return,
        FlightPhase::Paused => {
            params.pause_timer += dt;
            if params.pause_timer >= params.config.pause_duration {
                params.phase = FlightPhase::Running;
                params.pause_timer = 0.0;
                log::info!("[flight] resume after pause");
            }
            return;
        }
        FlightPhase::Running => {}
    }

    let cfg = &params.config;
    params.x_position += cfg.speed * dt;

    if params.x_position > cfg.right_boundary {
        params.x_position = cfg.left_boundary;
        transform.rotation = cfg.initial_rotation;
        params.loop_count += 1;

        if params.loop_count >= cfg.max_loops {
            params.phase = FlightPhase::Complete;
            log::info!("[flight] complete after {} loops", params.loop_count);
            return;
        }
        if params.loop_count == 1 {
            params.phase = FlightPhase::Paused;
            log::info!("[flight] pass 1 done, holding {:.1}s", cfg.pause_duration);
        }
    }

    let base = cfg.base_position;
    transform.position.x = params.x_position;
    transform.position.y = base.y + (elapsed * cfg.wobble_speed).sin() * cfg.wobble_amount;
    transform.position.z =
        base.z + (elapsed * cfg.wobble_speed * 0.7).cos() * cfg.wobble_amount * 0.3;

    let distance = (params.x_position - cfg.center_point).abs();
    transform.rotation.z = if distance < cfg.center_threshold {
        let closeness = 1.0 - distance / cfg.center_threshold;
        approach(
            transform.rotation.z,
            PI * closeness,
            cfg.roll_speed * FLIGHT_ROLL_IN_GAIN * dt,
        )
    } else {
        approach(
            transform.rotation.z,
            0.0,
            cfg.roll_speed * FLIGHT_ROLL_OUT_GAIN * dt,
        )
    };
}

#[derive(Clone, Debug)]
pub struct FlightAnimator {
    pub params: AnimationParams,
}

impl FlightAnimator {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            params: AnimationParams::new(config),
        }
    }

    /// Move the flight line vertically, e.g. after a viewport resize.
    pub fn set_base_y(&mut self, y: f32) {
        self.params.config.base_position.y = y;
    }
}

impl Animate for FlightAnimator {
    fn update(&mut self, frame: &FrameInput, transform: &mut Transform) {
        step_flight(&mut self.params, frame.dt, frame.elapsed, transform);
    }
}
