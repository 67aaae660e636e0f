use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use crate::dom;

/// Options every chart starts from, in insertion order.
pub fn default_entries() -> Vec<(String, Value)> {
    vec![
        ("responsive".into(), json!(true)),
        ("maintainAspectRatio".into(), json!(false)),
        ("plugins".into(), json!({ "legend": { "display": false } })),
    ]
}

/// Top-level merge: a caller key replaces the default entry wholesale,
/// nested objects included. Keys keep their first-seen order.
pub fn shallow_merge<V>(
    defaults: impl IntoIterator<Item = (String, V)>,
    overrides: impl IntoIterator<Item = (String, V)>,
) -> Vec<(String, V)> {
    let mut merged: Vec<(String, V)> = defaults.into_iter().collect();
    for (key, value) in overrides {
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => merged.push((key, value)),
        }
    }
    merged
}

fn to_js(value: &Value) -> Result<JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(|e| format!("Chart default not valid JSON: {e:?}"))
}

/// Own enumerable properties of a caller object. Values stay as JS values,
/// so callbacks survive. Anything but an object yields nothing.
fn js_entries(options: &JsValue) -> Vec<(String, JsValue)> {
    let Some(obj) = options.dyn_ref::<js_sys::Object>() else { return Vec::new() };
    js_sys::Object::entries(obj)
        .iter()
        .filter_map(|pair| {
            let pair: js_sys::Array = pair.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1)))
        })
        .collect()
}

fn to_object(entries: &[(String, JsValue)]) -> Result<js_sys::Object, String> {
    let obj = js_sys::Object::new();
    for (k, v) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(k), v)
            .map_err(|e| format!("Failed to build chart config: {e:?}"))?;
    }
    Ok(obj)
}

fn find_canvas(canvas_id: &str) -> Result<Option<HtmlCanvasElement>, String> {
    let Some(el) = dom::document()?.get_element_by_id(canvas_id) else {
        return Ok(None);
    };
    match el.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Ok(Some(canvas)),
        Err(_) => {
            log::warn!("#{canvas_id} is not a canvas");
            Ok(None)
        }
    }
}

fn construct(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsValue, String> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| format!("getContext failed: {e:?}"))?
        .ok_or("Canvas has no 2d context")?;
    let ctor = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .ok()
        .and_then(|c| c.dyn_into::<js_sys::Function>().ok())
        .ok_or("Chart.js is not loaded")?;
    let args = js_sys::Array::of2(&ctx, config);
    js_sys::Reflect::construct(&ctor, &args).map_err(|e| format!("new Chart() failed: {e:?}"))
}

/// Builds a chart on `#canvas_id`. `Ok(None)` when there is no such canvas.
pub fn create_chart(canvas_id: &str, kind: &str, data: JsValue, options: JsValue) -> Result<Option<JsValue>, String> {
    let Some(canvas) = find_canvas(canvas_id)? else { return Ok(None) };

    let defaults = default_entries()
        .into_iter()
        .map(|(k, v)| to_js(&v).map(|v| (k, v)))
        .collect::<Result<Vec<_>, String>>()?;
    let merged = to_object(&shallow_merge(defaults, js_entries(&options)))?;

    let config = to_object(&[
        ("type".to_string(), JsValue::from_str(kind)),
        ("data".to_string(), data),
        ("options".to_string(), merged.into()),
    ])?;
    construct(&canvas, &config).map(Some)
}
