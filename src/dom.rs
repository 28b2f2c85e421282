use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::{SectionId, SectionRect, SectionSpan};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels, `(width, height)`.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Viewport-relative rectangle of the element with `id`, if mounted.
pub fn section_rect(document: &web::Document, id: &str) -> Option<SectionRect> {
    let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
    Some(SectionRect {
        top: rect.top() as f32,
        bottom: rect.bottom() as f32,
    })
}

/// Document-relative spans of every mounted section, in document order.
pub fn section_spans(document: &web::Document) -> Vec<SectionSpan> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let el = document
                .get_element_by_id(id.as_str())?
                .dyn_into::<web::HtmlElement>()
                .ok()?;
            Some(SectionSpan {
                id,
                top: el.offset_top() as f32,
                height: el.offset_height() as f32,
            })
        })
        .collect()
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Match the canvas pixel size to its CSS size times the (capped) device
/// pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_class_by_id(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        set_class(&el, class, on);
    }
}
