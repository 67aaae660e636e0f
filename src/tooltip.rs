use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{Document, HtmlElement};
use crate::dom;
use crate::types::Rect;

const TOOLTIP_CLASS: &str = "tooltip absolute bg-gray-800 text-white text-xs rounded px-2 py-1 z-50";

/// Top-left corner for a tooltip of `tip_width` x `tip_height`, centred
/// horizontally above `target` with `gap` pixels between them.
pub fn tooltip_position(target: Rect, tip_width: f64, tip_height: f64, gap: f64) -> (f64, f64) {
    let left = target.left + target.width / 2.0 - tip_width / 2.0;
    let top = target.top - tip_height - gap;
    (left, top)
}

/// Hover labels for `[data-tooltip]` elements. Owns the live tooltip of
/// each registered target.
#[derive(Clone)]
pub struct TooltipService {
    active: Rc<RefCell<HashMap<usize, HtmlElement>>>,
    next_key: Rc<Cell<usize>>,
    gap: f64,
}

impl TooltipService {
    pub fn new(gap: f64) -> Self {
        Self {
            active: Rc::new(RefCell::new(HashMap::new())),
            next_key: Rc::new(Cell::new(0)),
            gap,
        }
    }

    pub fn register_all(&self, document: &Document) -> usize {
        let targets = dom::query_all::<HtmlElement>(document, "[data-tooltip]");
        let mut count = 0;
        for target in targets {
            match self.register(target) {
                Ok(()) => count += 1,
                Err(e) => log::warn!("Tooltip not attached: {e}"),
            }
        }
        count
    }

    pub fn register(&self, target: HtmlElement) -> Result<(), String> {
        let key = self.next_key.get();
        self.next_key.set(key + 1);

        let service = self.clone();
        let el = target.clone();
        dom::listen(&target, "mouseenter", move |_| {
            if let Err(e) = service.show(key, &el) {
                log::warn!("Tooltip: {e}");
            }
        })?;

        let service = self.clone();
        dom::listen(&target, "mouseleave", move |_| service.hide(key))
    }

    fn show(&self, key: usize, target: &HtmlElement) -> Result<(), String> {
        let text = target.dataset().get("tooltip").unwrap_or_default();
        let document = dom::document()?;
        let tip = dom::create_html(&document, "div")?;
        tip.set_class_name(TOOLTIP_CLASS);
        tip.set_text_content(Some(&text));
        dom::body()?
            .append_child(&tip)
            .map_err(|e| format!("Failed to append tooltip: {e:?}"))?;

        // Measured after insertion so the rendered size is known.
        let rect = Rect::from(&target.get_bounding_client_rect());
        let (left, top) = tooltip_position(rect, tip.offset_width() as f64, tip.offset_height() as f64, self.gap);
        dom::set_style(&tip, "left", &format!("{left}px"));
        dom::set_style(&tip, "top", &format!("{top}px"));

        if let Some(stale) = self.active.borrow_mut().insert(key, tip) {
            stale.remove();
        }
        Ok(())
    }

    fn hide(&self, key: usize) {
        if let Some(tip) = self.active.borrow_mut().remove(&key) {
            tip.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred_above_target() {
        let target = Rect { left: 100.0, top: 200.0, width: 50.0, height: 20.0 };
        let (left, top) = tooltip_position(target, 30.0, 18.0, 5.0);
        assert_eq!(left, 110.0);
        assert_eq!(top, 177.0);
    }

    #[test]
    fn test_wider_tooltip_overhangs_left() {
        let target = Rect { left: 10.0, top: 40.0, width: 20.0, height: 10.0 };
        let (left, top) = tooltip_position(target, 100.0, 20.0, 5.0);
        assert_eq!(left, -30.0);
        assert_eq!(top, 15.0);
    }
}
