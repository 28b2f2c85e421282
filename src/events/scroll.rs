use crate::core::flight::{FlightAnimator, FlightConfig};
use crate::core::{nav_is_scrolled, ScrollProgress, ScrollTracker, SectionId, SectionRouter};
use crate::{dom, nav};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-derived page state shared by the listeners and the frame loop.
pub struct ScrollState {
    router: SectionRouter,
    about: ScrollTracker,
    skills: ScrollTracker,
    viewport: (f32, f32),
    scroll_y: f32,
}

/// What changed during one refresh.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSample {
    pub section_changed: bool,
    pub scrolled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            router: SectionRouter::default(),
            about: ScrollTracker::new(SectionId::About.as_str()),
            skills: ScrollTracker::new(SectionId::Skills.as_str()),
            viewport: (0.0, 0.0),
            scroll_y: 0.0,
        }
    }
}

impl ScrollState {
    /// Re-read geometry from the DOM and recompute progress and the active
    /// section. Sections that are not mounted keep their previous values.
    pub fn refresh(&mut self, window: &web::Window, document: &web::Document) -> ScrollSample {
        let (width, height) = dom::viewport_size(window);
        self.viewport = (width, height);
        self.scroll_y = dom::scroll_y(window);

        for tracker in [&mut self.about, &mut self.skills] {
            let rect = dom::section_rect(document, tracker.section_id());
            tracker.sample(rect, height);
        }

        let spans = dom::section_spans(document);
        let section_changed = self.router.update(&spans, self.scroll_y, height);
        if section_changed {
            log::info!("[router] active section -> {}", self.router.current().as_str());
        }
        ScrollSample {
            section_changed,
            scrolled: nav_is_scrolled(self.scroll_y),
        }
    }

    #[inline]
    pub fn current_section(&self) -> SectionId {
        self.router.current()
    }

    /// Progress through `section`. Only tracked sections report movement.
    pub fn progress_for(&self, section: SectionId) -> ScrollProgress {
        match section {
            SectionId::About => self.about.progress(),
            SectionId::Skills => self.skills.progress(),
            _ => ScrollProgress::START,
        }
    }

    #[inline]
    pub fn viewport_width(&self) -> f32 {
        self.viewport.0
    }
}

/// Push a refresh result to the navigation bar. `force` restyles the links
/// even if the section did not change (first paint).
pub fn publish(document: &web::Document, state: &ScrollState, sample: ScrollSample, force: bool) {
    if sample.section_changed || force {
        nav::highlight(document, state.current_section());
    }
    nav::set_scrolled(document, sample.scrolled);
}

/// Things that follow the viewport size.
pub struct ResizeTargets {
    pub canvases: Vec<web::HtmlCanvasElement>,
    pub ship: Option<Rc<RefCell<FlightAnimator>>>,
}

pub fn wire_scroll_and_resize(
    window: &web::Window,
    state: Rc<RefCell<ScrollState>>,
    targets: ResizeTargets,
) -> Vec<EventListener> {
    let on_scroll = state.clone();
    let scroll = EventListener::new(window, "scroll", move |_| {
        let (Some(w), Some(d)) = (web::window(), dom::window_document()) else {
            return;
        };
        let sample = on_scroll.borrow_mut().refresh(&w, &d);
        publish(&d, &on_scroll.borrow(), sample, false);
    });

    let on_resize = state;
    let resize = EventListener::new(window, "resize", move |_| {
        let (Some(w), Some(d)) = (web::window(), dom::window_document()) else {
            return;
        };
        let sample = on_resize.borrow_mut().refresh(&w, &d);
        publish(&d, &on_resize.borrow(), sample, false);

        for canvas in &targets.canvases {
            dom::sync_canvas_backing_size(canvas);
        }
        if let Some(ship) = &targets.ship {
            let width = on_resize.borrow().viewport_width();
            ship.borrow_mut()
                .set_base_y(FlightConfig::base_y_for_width(width));
        }
    });

    vec![scroll, resize]
}
