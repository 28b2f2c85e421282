use glam::Vec3;

// Shared animation tuning constants used by the scene animators.

// Spaceship flight path
pub const FLIGHT_LEFT_BOUNDARY: f32 = -10.0; // respawn x after a pass
pub const FLIGHT_RIGHT_BOUNDARY: f32 = 10.0; // wrap once x goes past this
pub const FLIGHT_SPEED_PER_SEC: f32 = 3.9; // world units per second
pub const FLIGHT_WOBBLE_AMOUNT: f32 = 0.03;
pub const FLIGHT_WOBBLE_SPEED: f32 = 0.3;
pub const FLIGHT_ROLL_SPEED: f32 = 0.02; // scales the roll smoothing factors
pub const FLIGHT_ROLL_IN_GAIN: f32 = 10.0; // roll toward peak near the center point
pub const FLIGHT_ROLL_OUT_GAIN: f32 = 5.0; // relax back to level flight
pub const FLIGHT_CENTER_POINT: f32 = -2.0; // roll peaks here (left of screen center)
pub const FLIGHT_CENTER_THRESHOLD: f32 = 3.0;
pub const FLIGHT_PAUSE_SEC: f32 = 2.0; // hold at the left edge after the first pass
pub const FLIGHT_MAX_LOOPS: u32 = 2;
pub const FLIGHT_BASE_Y: f32 = -1.0;
pub const FLIGHT_BASE_Y_NARROW: f32 = -3.0; // lower on narrow viewports
pub const FLIGHT_INITIAL_YAW: f32 = std::f32::consts::FRAC_PI_4; // profile view
pub const FLIGHT_SCALE: f32 = 1.2;
pub const NARROW_VIEWPORT_PX: f32 = 768.0; // below this the layout is treated as mobile

// About model
pub const ABOUT_START_Y: f32 = 0.0;
pub const ABOUT_END_Y: f32 = -5.0;
pub const ABOUT_SPIN_START: f32 = 0.5; // progress where the spin kicks in
pub const ABOUT_SPIN_RATE: f32 = 6.32; // exp smoothing rate, ~0.1 per frame at 60 fps
pub const ABOUT_SCALE: f32 = 1.2;

// Skills model
pub const SKILLS_BASE_POSITION: Vec3 = Vec3::new(0.0, -1.5, 0.0);
pub const SKILLS_BASE_YAW: f32 = std::f32::consts::FRAC_PI_2;
pub const SKILLS_FLOAT_END: f32 = 0.3;
pub const SKILLS_ACCEL_END: f32 = 0.7;
pub const SKILLS_SCALE: f32 = 1.5;

// Frame pacing
pub const MAX_FRAME_DT: f32 = 0.1; // longest step fed to animators, covers tab switches

// Page chrome
pub const NAV_SCROLLED_THRESHOLD_PX: f32 = 50.0; // nav bar goes compact past this

// Main scene camera
pub const CAMERA_FOLLOW_RATE: f32 = 3.08; // exp smoothing rate, ~0.05 per frame at 60 fps
pub const SCENE_SPIN_PER_SEC: f32 = 0.05;

// Background geometry
pub const FLOAT_BOB_AMPLITUDE: f32 = 0.5;
pub const FLOAT_SPIN: Vec3 = Vec3::new(0.01, 0.01, 0.0);
pub const FLOAT_PHASE_MAX: f32 = 100.0;

pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_AREA: f32 = 10.0;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_SPEED: f32 = 0.2;
pub const PARTICLE_SPIN_MAX: f32 = 0.3; // rad/s bound per axis for the cloud spin

pub const STAR_COUNT: usize = 1000;
pub const STAR_RADIUS: f32 = 100.0; // inner edge of the star shell
pub const STAR_DEPTH: f32 = 50.0; // shell thickness outward from the radius
pub const STAR_FACTOR: f32 = 4.0; // largest base size
pub const STAR_TWINKLE_SPEED: f32 = 0.5;
pub const STAR_WORLD_SCALE: f32 = 0.05; // world units per size unit at pulse 1
pub const STAR_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

pub const RAIN_COUNT: usize = 200;
pub const RAIN_TOP: f32 = 10.0;
pub const RAIN_BOTTOM: f32 = -10.0;
pub const RAIN_SPEED_MIN: f32 = 1.0;
pub const RAIN_SPEED_MAX: f32 = 4.0;
pub const RAIN_GOLD_SHARE: f32 = 0.2;

// Palette
pub const GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
pub const MATRIX_GREEN: [f32; 4] = [0.0, 1.0, 0.255, 1.0];
pub const SHIP_GREY: [f32; 4] = [0.78, 0.8, 0.86, 1.0];
