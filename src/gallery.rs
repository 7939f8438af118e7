use crate::constants::{
    GALLERY_ID, GALLERY_SKELETON_COUNT, GALLERY_SKELETON_HEIGHT, PARTS_ENDPOINT,
};
use crate::core::gallery::{
    detail_page_url, detail_request_url, is_activation_key, parse_detail, parse_parts, Part,
};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Show skeleton cards, fetch the parts list and replace them with real cards.
pub async fn load_gallery(document: web::Document) -> anyhow::Result<()> {
    let Some(gallery) = document.get_element_by_id(GALLERY_ID) else {
        return Ok(());
    };
    gallery.set_inner_html("");
    for _ in 0..GALLERY_SKELETON_COUNT {
        let skeleton = create_html(&document, "article")?;
        skeleton.set_class_name("card skeleton");
        dom::set_style(&skeleton, "height", GALLERY_SKELETON_HEIGHT);
        _ = gallery.append_child(&skeleton);
    }

    let body = dom::fetch_text(PARTS_ENDPOINT).await?;
    let parts = parse_parts(&body)?;
    log::info!("[gallery] {} parts", parts.len());

    gallery.set_inner_html("");
    for part in &parts {
        let card = build_card(&document, part)?;
        _ = gallery.append_child(&card);
    }
    Ok(())
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

fn child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create_html(document, tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

fn build_card(document: &web::Document, part: &Part) -> anyhow::Result<web::HtmlElement> {
    let card = create_html(document, "article")?;
    card.set_class_name("card");
    card.set_tab_index(0);

    let media = child(document, &card, "div", "card-media")?;
    let img = child(document, &media, "img", "")?;
    _ = img.set_attribute("loading", "lazy");
    _ = img.set_attribute("src", &part.image);
    _ = img.set_attribute("alt", &part.name);

    let content = child(document, &card, "div", "card-content")?;
    let title = child(document, &content, "h4", "card-title")?;
    title.set_text_content(Some(part.name.as_str()));

    let overlay = child(document, &card, "div", "card-overlay")?;
    let desc = child(document, &overlay, "p", "card-desc")?;
    desc.set_text_content(Some(part.desc.as_str()));

    let name = part.name.clone();
    let on_click = Closure::wrap(Box::new(move || {
        spawn_local(open_detail(name.clone()));
    }) as Box<dyn FnMut()>);
    _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let name = part.name.clone();
    let on_key = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            spawn_local(open_detail(name.clone()));
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = card.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    on_key.forget();

    Ok(card)
}

async fn open_detail(name: String) {
    let result = async {
        let body = dom::fetch_text(&detail_request_url(&name)).await?;
        let detail = parse_detail(&body)?;
        anyhow::Ok(detail_page_url(&detail.name))
    }
    .await;
    match result {
        Ok(url) => dom::navigate(&url),
        Err(e) => log::error!("detail request failed: {:?}", e),
    }
}
