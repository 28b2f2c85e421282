// Page wiring and render defaults for the browser front-end.
//
// Element ids and class names must match `index.html`.
use crate::core::SurfaceStyle;

// Canvases, one per rendered view
pub const MAIN_CANVAS_ID: &str = "main-canvas";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const ABOUT_CANVAS_ID: &str = "about-canvas";
pub const SKILLS_CANVAS_ID: &str = "skills-canvas";

// Navigation bar
pub const NAV_ID: &str = "site-nav";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_MENU_BUTTON_ID: &str = "nav-menu-button";
pub const NAV_LINK_SELECTOR: &str = "#nav-menu a[data-section]";
pub const NAV_LINK_SECTION_ATTR: &str = "data-section";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";

// Canvas backing store never exceeds 2x CSS pixels
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Per-view cameras: (eye z, vertical fov in degrees)
pub const MAIN_CAMERA_FOV_DEG: f32 = 75.0;
pub const HERO_CAMERA_Z: f32 = 15.0;
pub const HERO_CAMERA_FOV_DEG: f32 = 45.0;
pub const ABOUT_CAMERA_Z: f32 = 10.0;
pub const ABOUT_CAMERA_FOV_DEG: f32 = 45.0;
pub const SKILLS_CAMERA_Z: f32 = 6.0;
pub const SKILLS_CAMERA_FOV_DEG: f32 = 40.0;

/// Opaque near-black background with fog toward the far field.
pub const MAIN_STYLE: SurfaceStyle = SurfaceStyle {
    clear: [0.0196, 0.0196, 0.0196, 1.0],
    fog_color: [0.0196, 0.0196, 0.0196],
    fog_near: 5.0,
    fog_far: 20.0,
    ambient: 0.5,
};

/// Transparent overlay canvases that sit on top of page content.
pub const OVERLAY_STYLE: SurfaceStyle = SurfaceStyle {
    clear: [0.0, 0.0, 0.0, 0.0],
    fog_color: [0.0, 0.0, 0.0],
    fog_near: 1000.0,
    fog_far: 2000.0,
    ambient: 0.6,
};
