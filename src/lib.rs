#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::flight::{FlightAnimator, FlightConfig};
use crate::core::lifecycle::{MountGeneration, MountTicket};
use crate::core::stages;
use crate::core::{Camera, CameraRig, Scene, SectionId, SurfaceStyle};
use glam::Vec3;
use gloo::events::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod render;

/// Everything that lives between mount and unmount.
struct Mounted {
    _frame_loop: frame::LoopHandle,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    static GENERATION: RefCell<MountGeneration> = RefCell::new(MountGeneration::default());
}

fn is_current(ticket: MountTicket) -> bool {
    GENERATION.with(|g| g.borrow().is_current(ticket))
}

/// Recipe for one canvas before its GPU state exists.
struct ViewSpec {
    name: &'static str,
    canvas_id: &'static str,
    scene: Scene,
    camera: Camera,
    style: SurfaceStyle,
    section: Option<SectionId>,
    follow_sections: bool,
}

fn view_specs(ship: &Rc<RefCell<FlightAnimator>>, rng: &mut StdRng) -> [ViewSpec; 4] {
    [
        ViewSpec {
            name: "main",
            canvas_id: MAIN_CANVAS_ID,
            scene: stages::background_scene(rng),
            camera: Camera::looking_at_origin(
                SectionId::Home.camera_position(),
                MAIN_CAMERA_FOV_DEG,
            ),
            style: MAIN_STYLE,
            section: None,
            follow_sections: true,
        },
        ViewSpec {
            name: "hero",
            canvas_id: HERO_CANVAS_ID,
            scene: stages::hero_scene(ship.clone()),
            camera: Camera::looking_at_origin(
                Vec3::new(0.0, 0.0, HERO_CAMERA_Z),
                HERO_CAMERA_FOV_DEG,
            ),
            style: OVERLAY_STYLE,
            section: None,
            follow_sections: false,
        },
        ViewSpec {
            name: "about",
            canvas_id: ABOUT_CANVAS_ID,
            scene: stages::about_scene(),
            camera: Camera::looking_at_origin(
                Vec3::new(0.0, 0.0, ABOUT_CAMERA_Z),
                ABOUT_CAMERA_FOV_DEG,
            ),
            style: OVERLAY_STYLE,
            section: Some(SectionId::About),
            follow_sections: false,
        },
        ViewSpec {
            name: "skills",
            canvas_id: SKILLS_CANVAS_ID,
            scene: stages::skills_scene(),
            camera: Camera::looking_at_origin(
                Vec3::new(0.0, 0.0, SKILLS_CAMERA_Z),
                SKILLS_CAMERA_FOV_DEG,
            ),
            style: OVERLAY_STYLE,
            section: Some(SectionId::Skills),
            follow_sections: false,
        },
    ]
}

/// Bring up every view whose canvas exists and whose GPU init succeeds.
async fn build_views(
    document: &web::Document,
    specs: [ViewSpec; 4],
) -> (Vec<frame::View>, Vec<web::HtmlCanvasElement>) {
    let mut views = Vec::with_capacity(specs.len());
    let mut canvases = Vec::with_capacity(specs.len());
    for spec in specs {
        let Some(canvas) = dom::canvas_by_id(document, spec.canvas_id) else {
            log::warn!("[view] #{} not found, skipping {}", spec.canvas_id, spec.name);
            continue;
        };
        dom::sync_canvas_backing_size(&canvas);
        let gpu = match render::GpuState::new(&canvas, spec.camera, spec.style).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("[gpu] {} init error: {:?}", spec.name, e);
                continue;
            }
        };
        log::info!("[view] {} ready ({}x{})", spec.name, canvas.width(), canvas.height());
        canvases.push(canvas.clone());
        views.push(frame::View {
            name: spec.name,
            canvas,
            scene: spec.scene,
            gpu,
            section: spec.section,
            rig: spec.follow_sections.then(CameraRig::default),
        });
    }
    (views, canvases)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    mount();
    Ok(())
}

/// Mount the page scenes and listeners, replacing any previous mount.
#[wasm_bindgen]
pub fn mount() {
    teardown();
    let ticket = GENERATION.with(|g| g.borrow_mut().begin());
    spawn_local(async move {
        if let Err(e) = init(ticket).await {
            log::error!("init error: {:?}", e);
        }
    });
}

/// Stop the frame loop and remove every listener registered at mount. A
/// mount still waiting on the GPU is abandoned.
#[wasm_bindgen]
pub fn unmount() {
    GENERATION.with(|g| g.borrow_mut().cancel());
    teardown();
}

fn teardown() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    if mounted.is_some() {
        drop(mounted);
        log::info!("folio-web unmounted");
    }
}

async fn init(ticket: MountTicket) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (viewport_width, _) = dom::viewport_size(&window);
    let mut flight = FlightConfig::default();
    flight.base_position.y = FlightConfig::base_y_for_width(viewport_width);
    let ship = Rc::new(RefCell::new(FlightAnimator::new(flight)));

    let mut rng = StdRng::seed_from_u64(rand::random());
    let specs = view_specs(&ship, &mut rng);
    let (views, canvases) = build_views(&document, specs).await;
    if !is_current(ticket) {
        log::info!("[view] mount superseded, dropping {} views", views.len());
        return Ok(());
    }

    let scroll = Rc::new(RefCell::new(events::ScrollState::default()));
    let sample = scroll.borrow_mut().refresh(&window, &document);
    events::scroll::publish(&document, &scroll.borrow(), sample, true);

    let mut listeners = events::wire_scroll_and_resize(
        &window,
        scroll.clone(),
        events::scroll::ResizeTargets {
            canvases,
            ship: Some(ship),
        },
    );
    listeners.extend(nav::wire_nav(&document));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(views, scroll)));
    let frame_loop = frame::start_loop(frame_ctx);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            _frame_loop: frame_loop,
            _listeners: listeners,
        })
    });
    Ok(())
}
