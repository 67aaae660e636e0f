use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement};
use crate::components::loading_overlay::{show_loading_overlay, PROCESSING_LABEL};
use crate::dom;
use crate::state::{NoticeKind, Notifier};

pub const MISSING_FILE_MESSAGE: &str = "Please select a file before submitting.";

/// `None` means the form has no file input at all.
pub fn submission_allowed(selected_files: Option<u32>) -> bool {
    !matches!(selected_files, Some(0))
}

/// Decides one submit attempt. A blocked submit reports exactly one error.
pub fn guard_submit(selected_files: Option<u32>, report: impl FnOnce(NoticeKind, &'static str)) -> bool {
    let allowed = submission_allowed(selected_files);
    if !allowed {
        report(NoticeKind::Error, MISSING_FILE_MESSAGE);
    }
    allowed
}

pub fn discover_forms(document: &Document) -> Vec<HtmlFormElement> {
    dom::query_all::<HtmlFormElement>(document, r#"form[enctype="multipart/form-data"]"#)
}

pub fn attach_form(form: HtmlFormElement, notifier: Notifier) -> Result<(), String> {
    let target = form.clone();
    dom::listen(&target, "submit", move |ev| {
        let selected = dom::query_one::<HtmlInputElement>(&form, r#"input[type="file"]"#)
            .map(|input| input.files().map(|f| f.length()).unwrap_or(0));
        if !guard_submit(selected, |kind, message| notifier.notify(kind, message)) {
            ev.prevent_default();
            return;
        }
        show_loading_state(&form);
    })
}

/// Leaves the button disabled and the overlay up; the submit is terminal
/// for this page view.
fn show_loading_state(form: &HtmlFormElement) {
    if let Some(button) = dom::query_one::<HtmlButtonElement>(form, r#"button[type="submit"]"#) {
        let original = button.inner_html();
        button.set_inner_html(PROCESSING_LABEL);
        button.set_disabled(true);
        if let Err(e) = button.dataset().set("originalText", &original) {
            log::warn!("Could not keep submit label: {e:?}");
        }
    }
    if let Err(e) = show_loading_overlay() {
        log::error!("Loading overlay: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeStack;

    #[test]
    fn test_empty_file_input_blocks_submit() {
        assert!(!submission_allowed(Some(0)));
    }

    #[test]
    fn test_selected_file_allows_submit() {
        assert!(submission_allowed(Some(1)));
        assert!(submission_allowed(Some(3)));
    }

    #[test]
    fn test_form_without_file_input_submits() {
        assert!(submission_allowed(None));
    }

    #[test]
    fn test_blocked_submit_pushes_one_error() {
        let mut stack = NoticeStack::default();
        let allowed = guard_submit(Some(0), |kind, message| {
            stack.push(kind, message);
        });
        assert!(!allowed);
        assert_eq!(stack.notices().len(), 1);
        assert_eq!(stack.notices()[0].kind, NoticeKind::Error);
        assert_eq!(stack.notices()[0].message, MISSING_FILE_MESSAGE);
    }

    #[test]
    fn test_allowed_submit_is_silent() {
        let mut stack = NoticeStack::default();
        assert!(guard_submit(Some(1), |kind, message| {
            stack.push(kind, message);
        }));
        assert!(guard_submit(None, |kind, message| {
            stack.push(kind, message);
        }));
        assert!(stack.notices().is_empty());
    }
}
