//! Scene graphs for each canvas on the page.

use super::ambient::{main_scene_floaters, FloatingMotion, ParticleField, StarField, SymbolRain};
use super::constants::*;
use super::flight::FlightAnimator;
use super::motion::Transform;
use super::scene::{Scene, SceneObject, Shape};
use super::scroll_driven::{AboutAnimator, SkillsAnimator};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

const FLOATER_NAMES: [&str; 3] = ["floater-a", "floater-b", "floater-c"];

/// Background: a fixed star shell around bobbing primitives, a particle
/// cloud and glyph rain that slowly spin about Y.
pub fn background_scene<R: Rng>(rng: &mut R) -> Scene {
    let mut scene = Scene::new("main").with_root_spin(SCENE_SPIN_PER_SEC);
    for (spec, name) in main_scene_floaters().into_iter().zip(FLOATER_NAMES) {
        let motion = FloatingMotion::with_random_phase(spec.position.y, spec.speed, rng);
        let mut transform = Transform::at(spec.position);
        transform.scale = spec.scale;
        scene = scene.with_object(
            SceneObject::new(name, spec.shape, spec.color, transform).animated(motion),
        );
    }
    let stars = StarField::new(
        STAR_COUNT,
        STAR_RADIUS,
        STAR_DEPTH,
        STAR_FACTOR,
        STAR_TWINKLE_SPEED,
        rng,
    );
    let particles = ParticleField::new(PARTICLE_COUNT, PARTICLE_AREA, PARTICLE_SPEED, rng);
    scene
        .with_stars(stars)
        .with_particles(particles, GOLD)
        .with_rain(SymbolRain::new(RAIN_COUNT, rng))
}

/// Hero banner: the spaceship on its looping flight. The caller keeps a
/// handle to `ship` to retune the flight line on resize.
pub fn hero_scene(ship: Rc<RefCell<FlightAnimator>>) -> Scene {
    let pose = ship.borrow().params.initial_transform();
    Scene::new("hero").with_object(
        SceneObject::new("ship", Shape::Tetrahedron, SHIP_GREY, pose).animated(ship),
    )
}

pub fn about_scene() -> Scene {
    Scene::new("about").with_object(
        SceneObject::new(
            "about-model",
            Shape::Icosahedron,
            GOLD,
            AboutAnimator::rest_pose(),
        )
        .animated(AboutAnimator::default()),
    )
}

pub fn skills_scene() -> Scene {
    Scene::new("skills").with_object(
        SceneObject::new(
            "skills-model",
            Shape::Cube,
            MATRIX_GREEN,
            SkillsAnimator::rest_pose(),
        )
        .animated(SkillsAnimator::default()),
    )
}
