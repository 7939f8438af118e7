//! Landing page front-end: a scroll-docked 3D logo, a parts gallery and a
//! part search box.
//!
//! Everything with real content lives in [`core`] and builds on any target;
//! the browser shell around it is wasm32-only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod gallery;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("logo-dock starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    use wasm_bindgen::JsCast;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_scroll_and_resize(&document);
    events::wire_explore_button(&document);
    events::wire_search(&document);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = wasm_bindgen::closure::Closure::once_into_js(move || spawn_gallery(doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    } else {
        spawn_gallery(document);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn spawn_gallery(document: web_sys::Document) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = gallery::load_gallery(document).await {
            log::error!("Failed to load gallery: {:?}", e);
        }
    });
}
