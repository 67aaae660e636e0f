use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry};
use crate::dom;

pub const FADE_IN_CLASS: &str = "animate-fadeIn";

/// Keyframes the page templates expect to exist.
const ANIMATION_CSS: &str = r#"
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-fadeIn { animation: fadeIn 0.6s ease-out forwards; }

@keyframes slideInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-slideInUp { animation: slideInUp 0.8s ease-out forwards; }

@keyframes bounce {
    0%, 20%, 53%, 80%, 100% { transform: translate3d(0,0,0); }
    40%, 43% { transform: translate3d(0,-30px,0); }
    70% { transform: translate3d(0,-15px,0); }
    90% { transform: translate3d(0,-4px,0); }
}
.animate-bounce { animation: bounce 1s ease infinite; }
"#;

/// Final CSS width for a bar; the attribute is passed through untouched.
pub fn progress_width(data_progress: Option<String>) -> String {
    format!("{}%", data_progress.unwrap_or_else(|| "0".into()))
}

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", index as u64 * step_ms as u64)
}

pub fn inject_styles(document: &Document) -> Result<(), String> {
    let style = dom::create_html(document, "style")?;
    style.set_text_content(Some(ANIMATION_CSS));
    let head = document.head().ok_or("Document has no head")?;
    head.append_child(&style)
        .map_err(|e| format!("Failed to inject animation styles: {e:?}"))?;
    Ok(())
}

/// Zeroes every `.progress-bar`, then grows it to its target once.
pub fn animate_progress_bars(document: &Document, delay_ms: i32) -> Result<(), String> {
    for bar in dom::query_all::<HtmlElement>(document, ".progress-bar") {
        let target = progress_width(bar.dataset().get("progress"));
        dom::set_style(&bar, "width", "0%");
        dom::set_timeout(delay_ms, move || dom::set_style(&bar, "width", &target))?;
    }
    Ok(())
}

/// Adds the fade-in class to `.card-hover` elements as they scroll into view.
pub fn observe_cards(document: &Document) -> Result<(), String> {
    let cards = dom::query_all::<HtmlElement>(document, ".card-hover");
    if cards.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(FADE_IN_CLASS);
            }
        }
    });
    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
        .map_err(|e| format!("IntersectionObserver unavailable: {e:?}"))?;
    on_intersect.forget();

    for card in &cards {
        observer.observe(card);
    }
    log::debug!("Observing {} cards", cards.len());
    Ok(())
}

pub fn stagger_skill_tags(document: &Document, step_ms: u32) {
    for (i, tag) in dom::query_all::<HtmlElement>(document, ".skill-tag").iter().enumerate() {
        dom::set_style(tag, "animation-delay", &stagger_delay(i, step_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_width_defaults_to_zero() {
        assert_eq!(progress_width(None), "0%");
    }

    #[test]
    fn test_progress_width_passes_value_through() {
        assert_eq!(progress_width(Some("72".into())), "72%");
        assert_eq!(progress_width(Some("33.5".into())), "33.5%");
    }

    #[test]
    fn test_stagger_delay_steps() {
        let delays: Vec<_> = (0..4).map(|i| stagger_delay(i, 100)).collect();
        assert_eq!(delays, ["0ms", "100ms", "200ms", "300ms"]);
    }
}
