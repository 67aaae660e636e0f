use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};
use crate::state::Notifier;
use crate::types::Palette;
use crate::upload_zone::{attach_zone, DropZone};
use crate::{chart, clipboard, format};

thread_local! {
    static HANDLE: RefCell<Option<CareerInsights>> = const { RefCell::new(None) };
}

/// Handle exported to page scripts and templates.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct CareerInsights {
    notifier: Notifier,
    max_upload_bytes: u64,
}

#[wasm_bindgen]
impl CareerInsights {
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, text: String) {
        clipboard::copy_to_clipboard(text, self.notifier);
    }

    #[wasm_bindgen(js_name = showSuccess)]
    pub fn show_success(&self, message: String) {
        self.notifier.notify_success(message);
    }

    #[wasm_bindgen(js_name = showError)]
    pub fn show_error(&self, message: String) {
        self.notifier.notify_error(message);
    }

    /// Resolves to `null` when there is no canvas with that id.
    #[wasm_bindgen(js_name = createChart)]
    pub fn create_chart(&self, canvas_id: &str, kind: &str, data: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
        match chart::create_chart(canvas_id, kind, data, options) {
            Ok(chart) => Ok(chart.unwrap_or(JsValue::NULL)),
            Err(e) => {
                log::error!("createChart({canvas_id}): {e}");
                Err(JsValue::from_str(&e))
            }
        }
    }

    /// Wires a drop zone for markup outside the `*drop-area` id convention.
    /// `palette` is `"primary"` (default) or `"secondary"`.
    #[wasm_bindgen(js_name = registerDropZone)]
    pub fn register_drop_zone(
        &self,
        container: HtmlElement,
        input: HtmlInputElement,
        display: Option<HtmlElement>,
        palette: Option<String>,
    ) -> Result<(), JsValue> {
        let mut zone = DropZone::new(container, input);
        if let Some(display) = display {
            zone = zone.with_display(display);
        }
        if let Some(name) = palette {
            let palette = Palette::parse(&name)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown palette: {name}")))?;
            zone = zone.with_palette(palette);
        }
        attach_zone(zone, self.notifier, self.max_upload_bytes).map_err(|e| {
            log::error!("registerDropZone: {e}");
            JsValue::from_str(&e)
        })
    }

    #[wasm_bindgen(js_name = formatNumber)]
    pub fn format_number(&self, n: f64) -> String {
        format::format_number(n)
    }

    #[wasm_bindgen(js_name = formatPercentage)]
    pub fn format_percentage(&self, n: f64) -> String {
        format::format_percentage(n)
    }
}

impl CareerInsights {
    pub fn new(notifier: Notifier, max_upload_bytes: u64) -> Self {
        Self { notifier, max_upload_bytes }
    }
}

pub(crate) fn register(handle: CareerInsights) {
    HANDLE.with(|h| *h.borrow_mut() = Some(handle));
}

/// The page's handle, once initialisation has run.
#[wasm_bindgen]
pub fn insights() -> Option<CareerInsights> {
    HANDLE.with(|h| *h.borrow())
}

/// Exposes the handle as `window[name]` for inline markup.
pub(crate) fn install_global(handle: CareerInsights, name: &str) -> Result<(), String> {
    let window = crate::dom::window()?;
    js_sys::Reflect::set(&window, &JsValue::from_str(name), &JsValue::from(handle))
        .map_err(|e| format!("Failed to install window.{name}: {e:?}"))?;
    Ok(())
}
