//! Thin helpers over `web_sys` shared by the controllers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?.document().ok_or_else(|| "No document".to_string())
}

pub fn body() -> Result<HtmlElement, String> {
    document()?.body().ok_or_else(|| "Document has no body".to_string())
}

/// All matches of `selector` under `root` that cast to `T`; others are skipped.
pub fn query_all<T: JsCast>(root: &JsValue, selector: &str) -> Vec<T> {
    let list = if let Some(doc) = root.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        log::warn!("Bad selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), String> {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to listen for '{event}': {e:?}"))?;
    cb.forget();
    Ok(())
}

/// One-shot timer. There is no handle; scheduled callbacks always run.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Result<(), String> {
    let handle: Closure<dyn FnMut()> = Closure::once(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(handle.as_ref().unchecked_ref(), ms)
        .map_err(|e| format!("setTimeout failed: {e:?}"))?;
    handle.forget();
    Ok(())
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, String> {
    document
        .create_element(tag)
        .map_err(|e| format!("Failed to create <{tag}>: {e:?}"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("<{tag}> is not an HtmlElement"))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("Failed to set {property}: {e:?}");
    }
}
