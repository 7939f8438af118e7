use crate::constants::{
    SEARCH_BUTTON_ID, SEARCH_FOCUS_VISIBILITY, SEARCH_INPUT_ID, SECOND_PAGE_ID,
    SUGGESTIONS_BLUR_HIDE_MS, SUGGESTIONS_ID, SUGGESTIONS_VISIBLE_CLASS, THRESHOLD_INPUT_ID,
    THRESHOLD_VALUE_ID,
};
use crate::core::search::{
    parse_suggestions, search_result_url, slider_background, slider_fill_percent,
    suggest_url, suggestion_query, threshold_label, Debouncer,
};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct SearchWiring {
    input: web::HtmlInputElement,
    suggestions: Option<web::HtmlElement>,
    debouncer: Rc<RefCell<Debouncer>>,
}

pub fn wire_search(document: &web::Document) {
    wire_threshold_slider(document);
    wire_search_button(document);
    let Some(input) = dom::input_by_id(document, SEARCH_INPUT_ID) else {
        return;
    };
    let w = SearchWiring {
        input,
        suggestions: dom::html_by_id(document, SUGGESTIONS_ID),
        debouncer: Rc::new(RefCell::new(Debouncer::default())),
    };
    wire_input(&w);
    wire_blur(&w);
    wire_focus_on_second_page(document, &w.input);
}

fn wire_input(w: &SearchWiring) {
    let w = w.clone();
    let target = w.input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let value = w.input.value();
        match suggestion_query(&value) {
            Some(q) => {
                w.debouncer.borrow_mut().schedule(q, Instant::now());
                arm_debounce(&w);
            }
            None => {
                w.debouncer.borrow_mut().cancel();
                clear_suggestions(&w);
            }
        }
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn arm_debounce(w: &SearchWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let delay = w.debouncer.borrow().remaining(Instant::now());
    let Some(delay) = delay else {
        return;
    };
    let w = w.clone();
    dom::set_timeout(&window, delay.as_millis() as i32, move || {
        let now = Instant::now();
        let due = w.debouncer.borrow_mut().take_due(now);
        match due {
            Some(q) => spawn_local(fetch_and_render(w, q)),
            // timer fired ahead of the deadline; try again for the rest
            None if w.debouncer.borrow().remaining(now).is_some() => arm_debounce(&w),
            None => {}
        }
    });
}

async fn fetch_and_render(w: SearchWiring, query: String) {
    let items = match dom::fetch_text(&suggest_url(&query)).await {
        Ok(body) => parse_suggestions(&body).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    match items {
        Ok(items) => render_suggestions(&w, &items),
        Err(e) => log::error!("suggestions failed: {:?}", e),
    }
}

fn clear_suggestions(w: &SearchWiring) {
    if let Some(list) = &w.suggestions {
        list.set_inner_html("");
        _ = list.class_list().remove_1(SUGGESTIONS_VISIBLE_CLASS);
    }
}

fn render_suggestions(w: &SearchWiring, items: &[String]) {
    let Some(list) = &w.suggestions else {
        return;
    };
    if items.is_empty() {
        clear_suggestions(w);
        return;
    }
    list.set_inner_html("");
    let Some(document) = dom::window_document() else {
        return;
    };
    for name in items {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        _ = button.set_attribute("type", "button");
        _ = button.set_attribute("data-name", name);
        button.set_text_content(Some(name.as_str()));

        let input = w.input.clone();
        let list_for_click = list.clone();
        let picked = name.clone();
        let closure = Closure::wrap(Box::new(move || {
            input.set_value(&picked);
            _ = list_for_click.class_list().remove_1(SUGGESTIONS_VISIBLE_CLASS);
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        _ = list.append_child(&button);
    }
    _ = list.class_list().add_1(SUGGESTIONS_VISIBLE_CLASS);
}

fn wire_blur(w: &SearchWiring) {
    let list = w.suggestions.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (Some(window), Some(list)) = (web::window(), list.clone()) else {
            return;
        };
        dom::set_timeout(&window, SUGGESTIONS_BLUR_HIDE_MS, move || {
            _ = list.class_list().remove_1(SUGGESTIONS_VISIBLE_CLASS);
        });
    }) as Box<dyn FnMut()>);
    _ = w
        .input
        .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn update_slider(slider: &web::HtmlInputElement, label: Option<&web::HtmlElement>) {
    let value = slider.value();
    if let Some(label) = label {
        label.set_text_content(Some(threshold_label(&value).as_str()));
    }
    dom::set_style(
        slider,
        "background",
        &slider_background(slider_fill_percent(&value)),
    );
}

fn wire_threshold_slider(document: &web::Document) {
    let (Some(slider), Some(label)) = (
        dom::input_by_id(document, THRESHOLD_INPUT_ID),
        dom::html_by_id(document, THRESHOLD_VALUE_ID),
    ) else {
        return;
    };
    let slider_cb = slider.clone();
    let closure = Closure::wrap(Box::new(move || {
        update_slider(&slider_cb, Some(&label));
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    // paint the fill on load without touching the label
    update_slider(&slider, None);
}

fn wire_search_button(document: &web::Document) {
    dom::add_click_listener(document, SEARCH_BUTTON_ID, || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let name = dom::input_by_id(&document, SEARCH_INPUT_ID)
            .map(|i| i.value())
            .unwrap_or_default();
        let threshold = dom::input_by_id(&document, THRESHOLD_INPUT_ID)
            .map(|i| i.value())
            .unwrap_or_default();
        dom::navigate(&search_result_url(&name, &threshold));
    });
}

/// Focus and select the search box once the second page is mostly visible.
fn wire_focus_on_second_page(document: &web::Document, input: &web::HtmlInputElement) {
    let Some(page) = document.get_element_by_id(SECOND_PAGE_ID) else {
        return;
    };
    let input = input.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let opts = web::FocusOptions::new();
                opts.set_prevent_scroll(true);
                if input.focus_with_options(&opts).is_err() {
                    _ = input.focus();
                }
                input.select();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(SEARCH_FOCUS_VISIBILITY));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer.observe(&page),
        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
    }
    closure.forget();
}
