use crate::constants::*;
use crate::core::SectionId;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

fn nav_links(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

fn link_section(link: &web::Element) -> Option<SectionId> {
    link.get_attribute(NAV_LINK_SECTION_ATTR)
        .as_deref()
        .and_then(SectionId::from_id)
}

/// Mark the link for `active` and clear the rest.
pub fn highlight(document: &web::Document, active: SectionId) {
    for link in nav_links(document) {
        dom::set_class(&link, CLASS_ACTIVE, link_section(&link) == Some(active));
    }
}

#[inline]
pub fn set_scrolled(document: &web::Document, scrolled: bool) {
    dom::set_class_by_id(document, NAV_ID, CLASS_SCROLLED, scrolled);
}

#[inline]
pub fn set_menu_open(document: &web::Document, open: bool) {
    dom::set_class_by_id(document, NAV_MENU_ID, CLASS_OPEN, open);
    dom::set_class_by_id(document, NAV_MENU_BUTTON_ID, CLASS_OPEN, open);
}

pub fn toggle_menu(document: &web::Document) {
    let open = document
        .get_element_by_id(NAV_MENU_ID)
        .map(|el| el.class_list().contains(CLASS_OPEN))
        .unwrap_or(false);
    set_menu_open(document, !open);
}

pub fn scroll_to_section(document: &web::Document, section: SectionId) {
    if let Some(el) = document.get_element_by_id(section.as_str()) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Link clicks scroll smoothly to their section and close the mobile menu;
/// the menu button opens and closes it.
pub fn wire_nav(document: &web::Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for link in nav_links(document) {
        let Some(section) = link_section(&link) else {
            continue;
        };
        // non-passive so the default jump to the anchor can be cancelled
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(&link, "click", options, move |ev| {
            ev.prevent_default();
            if let Some(d) = dom::window_document() {
                scroll_to_section(&d, section);
                set_menu_open(&d, false);
            }
        }));
    }
    if let Some(button) = document.get_element_by_id(NAV_MENU_BUTTON_ID) {
        listeners.push(EventListener::new(&button, "click", move |_| {
            if let Some(d) = dom::window_document() {
                toggle_menu(&d);
            }
        }));
    }
    log::info!("[nav] wired {} listeners", listeners.len());
    listeners
}
