use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlTextAreaElement, Window};
use crate::dom;
use crate::state::{NoticeKind, Notifier};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Copies `text` and reports the result with exactly one notification.
pub fn copy_to_clipboard(text: String, notifier: Notifier) {
    spawn_local(async move {
        let result = copy_text(&text).await;
        if let Err(e) = &result {
            log::warn!("Copy failed: {e}");
        }
        let (kind, message) = copy_notice(&result);
        notifier.notify(kind, message);
    });
}

/// The single notice a finished copy attempt produces.
pub fn copy_notice(result: &Result<(), String>) -> (NoticeKind, &'static str) {
    match result {
        Ok(()) => (NoticeKind::Success, COPIED_MESSAGE),
        Err(_) => (NoticeKind::Error, COPY_FAILED_MESSAGE),
    }
}

/// `execCommand("copy")` answering `false` means the browser refused; only
/// `true` counts as copied.
pub fn exec_copy_result(copied: Result<bool, String>) -> Result<(), String> {
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("execCommand('copy') was refused".into()),
        Err(e) => Err(format!("execCommand('copy') threw: {e}")),
    }
}

/// Async Clipboard API first, then the legacy `execCommand` path.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = dom::window()?;
    if has_async_clipboard(&window) {
        let promise = window.navigator().clipboard().write_text(text);
        match JsFuture::from(promise).await {
            Ok(_) => return Ok(()),
            Err(e) => log::debug!("Clipboard API rejected, falling back: {e:?}"),
        }
    }
    legacy_copy(&window, text)
}

fn has_async_clipboard(window: &Window) -> bool {
    if !window.is_secure_context() {
        return false;
    }
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map(|c| !c.is_undefined() && !c.is_null())
        .unwrap_or(false)
}

fn legacy_copy(window: &Window, text: &str) -> Result<(), String> {
    let document = window.document().ok_or("No document")?;
    let body = document.body().ok_or("Document has no body")?;
    let textarea = document
        .create_element("textarea")
        .map_err(|e| format!("Unable to create textarea: {e:?}"))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "Textarea cast failed")?;
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-999999px");
    let _ = style.set_property("top", "-999999px");

    body.append_child(&textarea)
        .map_err(|e| format!("Unable to attach textarea: {e:?}"))?;
    let _ = textarea.focus();
    textarea.select();
    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy").map_err(|e| format!("{e:?}"));
    textarea.remove();
    exec_copy_result(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeStack;

    fn report(stack: &mut NoticeStack, result: Result<(), String>) {
        let (kind, message) = copy_notice(&result);
        stack.push(kind, message);
    }

    #[test]
    fn test_success_gives_one_success_notice() {
        let mut stack = NoticeStack::default();
        report(&mut stack, Ok(()));
        assert_eq!(stack.notices().len(), 1);
        assert_eq!(stack.notices()[0].kind, NoticeKind::Success);
        assert_eq!(stack.notices()[0].message, COPIED_MESSAGE);
    }

    #[test]
    fn test_both_paths_failing_gives_one_error_per_call() {
        let mut stack = NoticeStack::default();
        for _ in 0..2 {
            report(&mut stack, exec_copy_result(Err("SecurityError".into())));
        }
        let kinds: Vec<_> = stack.notices().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, [NoticeKind::Error, NoticeKind::Error]);
        assert!(stack.notices().iter().all(|n| n.message == COPY_FAILED_MESSAGE));
    }

    #[test]
    fn test_refused_exec_command_is_a_failure() {
        assert!(exec_copy_result(Ok(true)).is_ok());
        let err = exec_copy_result(Ok(false)).unwrap_err();
        assert!(err.contains("refused"), "{err}");
        assert_eq!(copy_notice(&Err(err)).0, NoticeKind::Error);
    }
}
