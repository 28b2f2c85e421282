// Host-side tests for background motion, the camera rig and the page scenes.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::ambient::{FloatingMotion, ParticleField, RainDrop, StarField, SymbolRain};
use crate::core::flight::{FlightAnimator, FlightConfig};
use crate::core::stages;
use crate::core::{
    Animate, Camera, CameraRig, FrameInput, ScrollProgress, SectionId, Shape, Transform,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

const DT: f32 = 1.0 / 60.0;

#[test]
fn floater_bobs_around_origin_and_spins() {
    let mut motion = FloatingMotion::new(2.0, 0.7, 0.0);
    let mut t = Transform::at(Vec3::new(-3.0, 2.0, -2.0));
    let frame = FrameInput {
        dt: 1.0,
        elapsed: 1.0,
        progress: ScrollProgress::START,
    };
    motion.update(&frame, &mut t);
    assert!((motion.phase() - 0.7).abs() < 1e-6);
    assert!((t.position.y - (2.0 + 0.7f32.sin() * 0.5)).abs() < 1e-6);
    assert!((t.rotation.x - 0.007).abs() < 1e-6);
    assert!((t.rotation.y - 0.007).abs() < 1e-6);
    assert_eq!(t.rotation.z, 0.0);
    assert_eq!(t.position.x, -3.0);
}

#[test]
fn random_phase_is_within_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let m = FloatingMotion::with_random_phase(0.0, 0.5, &mut rng);
        assert!((0.0..100.0).contains(&m.phase()));
    }
}

#[test]
fn particles_stay_inside_their_cube() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::new(100, 10.0, 0.2, &mut rng);
    assert_eq!(field.positions.len(), 100);
    assert_eq!(field.half_extent(), 5.0);
    let mut elapsed = 0.0;
    for _ in 0..2000 {
        elapsed += DT;
        field.update(DT, elapsed);
        for p in &field.positions {
            assert!(p.abs().max_element() <= 5.0, "escaped: {p:?}");
        }
    }
}

#[test]
fn particle_cloud_rotates_at_a_fixed_rate() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new(10, 10.0, 0.2, &mut rng);
    field.update(1.0, 1.0);
    let step = field.rotation;
    assert!(step.abs().max_element() <= 0.3);
    field.update(1.0, 2.0);
    assert!((field.rotation - step * 2.0).length() < 1e-5);
}

#[test]
fn rain_drop_respawns_at_top() {
    let mut rain = SymbolRain {
        drops: vec![RainDrop {
            position: Vec3::new(0.0, -9.9, -5.0),
            speed: 1.0,
            size: 0.2,
            gold: false,
        }],
    };
    rain.update(0.05);
    assert!((rain.drops[0].position.y - (-9.95)).abs() < 1e-5);
    rain.update(0.1);
    assert_eq!(rain.drops[0].position.y, 10.0);
}

#[test]
fn rain_stays_in_band_and_mixes_colors() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut rain = SymbolRain::new(200, &mut rng);
    let gold = rain.drops.iter().filter(|d| d.gold).count();
    assert!((10..=80).contains(&gold), "gold drops: {gold}");
    for d in &rain.drops {
        assert!((1.0..4.0).contains(&d.speed));
        assert!((-7.5..=-2.5).contains(&d.position.z));
    }
    for _ in 0..1000 {
        rain.update(DT);
    }
    for d in &rain.drops {
        assert!((-10.0..=10.0).contains(&d.position.y));
    }
}

#[test]
fn rig_eases_toward_active_section() {
    let mut rig = CameraRig::default();
    let mut cam = Camera::looking_at_origin(SectionId::Home.camera_position(), 75.0);
    rig.focus(SectionId::About);
    assert_eq!(rig.target(), Vec3::new(-3.0, 2.0, 7.0));

    let start = cam.eye;
    rig.update(&mut cam, DT);
    let covered = (cam.eye - start).length() / (rig.target() - start).length();
    assert!((covered - 0.05).abs() < 1e-3, "covered {covered}");

    for _ in 0..600 {
        rig.update(&mut cam, DT);
    }
    assert!((cam.eye - rig.target()).length() < 1e-3);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn camera_matrices_are_finite() {
    let mut cam = Camera::looking_at_origin(Vec3::new(0.0, 0.0, 15.0), 45.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    let vp = cam.view_projection();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn background_scene_emits_every_layer() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = stages::background_scene(&mut rng);
    assert_eq!(scene.objects.len(), 3);

    scene.update(2.0, ScrollProgress::START);
    assert!((scene.root.rotation.y - 0.1).abs() < 1e-6);
    assert_eq!(scene.elapsed(), 2.0);

    let mut out = Vec::new();
    scene.collect_instances(&mut out);
    assert_eq!(out.len(), 3 + 1000 + 100 + 200);
    assert_eq!(out.iter().filter(|i| i.shape == Shape::Quad).count(), 200);
    assert_eq!(out.iter().filter(|i| i.shape == Shape::Dodecahedron).count(), 1);
    assert_eq!(out.iter().filter(|i| i.shape == Shape::Octahedron).count(), 1 + 1000 + 100);
    assert_eq!(out.iter().filter(|i| i.emissive).count(), 1000);
}

#[test]
fn stars_fill_a_shell_around_the_scene() {
    let mut rng = StdRng::seed_from_u64(19);
    let stars = StarField::new(1000, 100.0, 50.0, 4.0, 0.5, &mut rng);
    assert_eq!(stars.positions.len(), 1000);
    for p in &stars.positions {
        let r = p.length();
        assert!((100.0 - 1e-3..=150.0 + 1e-3).contains(&r), "radius {r}");
    }
    for s in &stars.sizes {
        assert!((2.0..=4.0).contains(s), "size {s}");
    }
    // the shell is not collapsed onto one side
    assert!(stars.positions.iter().any(|p| p.y > 50.0));
    assert!(stars.positions.iter().any(|p| p.y < -50.0));
}

#[test]
fn stars_twinkle_together() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut stars = StarField::new(10, 100.0, 50.0, 4.0, 0.5, &mut rng);
    assert!((stars.pulse() - (3.0 + 100f32.sin())).abs() < 1e-5);

    stars.update(2.0);
    let pulse = 3.0 + 101f32.sin();
    assert!((stars.pulse() - pulse).abs() < 1e-5);
    assert!((stars.star_scale(0) - stars.sizes[0] * 0.05 * pulse).abs() < 1e-5);
    assert_eq!(stars.star_scale(99), 0.0);

    for step in 0..200 {
        stars.update(step as f32 * 0.37);
        assert!((2.0..=4.0).contains(&stars.pulse()));
    }
}

#[test]
fn stars_do_not_follow_the_spinning_root() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = stages::background_scene(&mut rng);
    scene.update(2.0, ScrollProgress::START);
    assert!(scene.root.rotation.y > 0.0);

    let mut out = Vec::new();
    scene.collect_instances(&mut out);
    let first = out.iter().find(|i| i.emissive).map(|i| i.model.w_axis.truncate());
    let expected = scene.stars.as_ref().map(|s| s.positions[0]);
    assert!(first.is_some());
    assert_eq!(first, expected);
}

#[test]
fn hero_scene_drives_shared_ship() {
    let ship = Rc::new(RefCell::new(FlightAnimator::new(FlightConfig::default())));
    let mut scene = stages::hero_scene(ship.clone());
    scene.update(DT, ScrollProgress::START);
    let x = ship.borrow().params.x_position;
    assert!(x > -10.0);
    let obj = scene.object("ship").map(|o| o.transform.position.x);
    assert_eq!(obj, Some(x));
}

#[test]
fn about_scene_follows_progress() {
    let mut scene = stages::about_scene();
    scene.update(DT, ScrollProgress::new(0.4));
    let y = scene.object("about-model").map(|o| o.transform.position.y);
    assert!(y.is_some_and(|y| (y - (-2.0)).abs() < 1e-5));
}

#[test]
fn skills_scene_applies_band_pose() {
    let mut scene = stages::skills_scene();
    scene.update(DT, ScrollProgress::END);
    let model = scene.object("skills-model").map(|o| o.transform);
    assert!(model.is_some_and(|t| (t.position.y - (-1.8)).abs() < 1e-5));
}

#[test]
fn negative_dt_is_ignored() {
    let mut scene = stages::about_scene();
    scene.update(-1.0, ScrollProgress::START);
    assert_eq!(scene.elapsed(), 0.0);
}
