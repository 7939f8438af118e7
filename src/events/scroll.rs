use crate::constants::{
    DOCK_TARGET_SELECTOR, HEADER_SELECTOR, LANDING_SELECTOR, LOGO_CONTAINER_ID,
};
use crate::core::{evaluate_scroll, DockConfig, DockState, Placement, SCurve, ScrollInput};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub container: web::HtmlElement,
    pub curve: SCurve,
    pub config: DockConfig,
    pub last_state: Rc<Cell<Option<DockState>>>,
}

/// Measure everything the dock evaluation needs. Nothing is cached between
/// events.
pub fn read_scroll_input(window: &web::Window, document: &web::Document) -> ScrollInput {
    let viewport = dom::viewport_size(window);
    let landing_height = dom::query(document, LANDING_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(viewport.y);
    let header = dom::query(document, HEADER_SELECTOR);
    let header_title = header
        .as_ref()
        .and_then(|h| h.query_selector("h1").ok().flatten())
        .map(|h1| dom::rect_of(&h1));
    ScrollInput {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        landing_height,
        viewport,
        dock_target: dom::query(document, DOCK_TARGET_SELECTOR).map(|el| dom::rect_of(&el)),
        header_title,
    }
}

pub fn apply_placement(container: &web::HtmlElement, placement: &Placement) {
    dom::set_style(container, "position", placement.positioning.as_css());
    dom::set_style(container, "top", "0");
    dom::set_style(container, "left", "0");
    dom::set_style(container, "transform", &placement.css_transform());
}

fn on_scroll(w: &ScrollWiring) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let mut config = w.config;
    if let Some(header) = dom::query(&document, HEADER_SELECTOR) {
        config.default_padding_left = dom::padding_left_px(&window, &header);
    }
    let input = read_scroll_input(&window, &document);
    let placement = evaluate_scroll(&input, &w.curve, &config);
    if w.last_state.get() != Some(placement.state) {
        log::debug!(
            "[dock] {:?} -> {:?} at scrollY={:.0}",
            w.last_state.get(),
            placement.state,
            input.scroll_y
        );
        w.last_state.set(Some(placement.state));
    }
    apply_placement(&w.container, &placement);
}

/// Re-evaluate the logo placement on every scroll and resize, and once now.
pub fn wire_scroll_and_resize(document: &web::Document) {
    let Some(container) = dom::html_by_id(document, LOGO_CONTAINER_ID) else {
        log::warn!("missing #{}; scroll docking disabled", LOGO_CONTAINER_ID);
        return;
    };
    let wiring = ScrollWiring {
        container,
        curve: SCurve::default(),
        config: DockConfig::default(),
        last_state: Rc::new(Cell::new(None)),
    };
    let Some(window) = web::window() else {
        return;
    };
    for event in ["scroll", "resize"] {
        let w = wiring.clone();
        let closure = Closure::wrap(Box::new(move || on_scroll(&w)) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    on_scroll(&wiring);
}

/// Smoothly bring the second page into view from the call-to-action button.
pub fn wire_explore_button(document: &web::Document) {
    use crate::constants::{EXPLORE_BUTTON_ID, SECOND_PAGE_ID};
    dom::add_click_listener(document, EXPLORE_BUTTON_ID, || {
        if let Some(page) = dom::window_document().and_then(|d| d.get_element_by_id(SECOND_PAGE_ID))
        {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            page.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
}
