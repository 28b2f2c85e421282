use crate::core::{frame_step, CameraRig, Instance, Scene, ScrollProgress, SectionId};
use crate::events::ScrollState;
use crate::render;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One canvas with its scene and renderer.
pub struct View {
    pub name: &'static str,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Scene,
    pub gpu: render::GpuState<'static>,
    /// Section whose scroll progress drives the scene, if any.
    pub section: Option<SectionId>,
    /// Eases the camera toward the active section when set.
    pub rig: Option<CameraRig>,
}

pub struct FrameContext {
    pub views: Vec<View>,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub last_instant: Instant,
    instances: Vec<Instance>,
}

impl FrameContext {
    pub fn new(views: Vec<View>, scroll: Rc<RefCell<ScrollState>>) -> Self {
        Self {
            views,
            scroll,
            last_instant: Instant::now(),
            instances: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = frame_step(dt.as_secs_f32());

        let scroll = self.scroll.borrow();
        let active = scroll.current_section();
        for view in &mut self.views {
            let progress = view
                .section
                .map(|s| scroll.progress_for(s))
                .unwrap_or(ScrollProgress::START);
            view.scene.update(dt_sec, progress);

            if let Some(rig) = view.rig.as_mut() {
                rig.focus(active);
                rig.update(&mut view.gpu.camera, dt_sec);
            }
            view.gpu
                .resize_if_needed(view.canvas.width(), view.canvas.height());

            self.instances.clear();
            view.scene.collect_instances(&mut self.instances);
            if let Err(e) = view.gpu.render(&self.instances) {
                log::error!("[gpu] {} render error: {:?}", view.name, e);
            }
        }
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Keeps the animation loop alive. Dropping it cancels the pending frame
/// and releases the loop closure.
pub struct LoopHandle {
    pending: FrameSlot,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        // dropping the AnimationFrame cancels it and breaks the slot cycle
        self.pending.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn schedule(frame_ctx: Rc<RefCell<FrameContext>>, pending: FrameSlot) {
    let slot = pending.clone();
    let handle = request_animation_frame(move |_| {
        slot.borrow_mut().take();
        frame_ctx.borrow_mut().frame();
        schedule(frame_ctx, slot);
    });
    *pending.borrow_mut() = Some(handle);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let pending: FrameSlot = Rc::new(RefCell::new(None));
    schedule(frame_ctx, pending.clone());
    log::info!("[frame] loop started");
    LoopHandle { pending }
}
