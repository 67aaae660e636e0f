use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, FileList, HtmlElement, HtmlInputElement};
use crate::dom;
use crate::state::Notifier;
use crate::types::{FileInfo, Palette};
use crate::validate::{evaluate_selection, SelectionOutcome};

const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];
const ACTIVE_CLASS: &str = "drop-area-active";
const PRIMARY_ZONE_ID: &str = "drop-area";

thread_local! {
    static BODY_GUARDED: Cell<bool> = const { Cell::new(false) };
}

/// Everything a drop zone needs, supplied by the caller. Pages following the
/// id convention get these from [`DropZone::discover`]; other markup builds
/// one with [`DropZone::new`] and the `with_*` setters, from Rust or through
/// `registerDropZone` on the exported handle.
#[derive(Clone)]
pub struct DropZone {
    pub container: HtmlElement,
    pub input: HtmlInputElement,
    pub display: Option<HtmlElement>,
    pub palette: Palette,
}

impl DropZone {
    pub fn new(container: HtmlElement, input: HtmlInputElement) -> Self {
        Self { container, input, display: None, palette: Palette::Primary }
    }

    pub fn with_display(mut self, display: HtmlElement) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builds a descriptor from the `*drop-area` / `*file-name` id convention.
    /// Returns `None` when the container has no file input.
    pub fn discover(container: HtmlElement) -> Option<Self> {
        let input = dom::query_one::<HtmlInputElement>(&container, r#"input[type="file"]"#)?;
        let display = dom::query_one::<HtmlElement>(&container, "#file-name")
            .or_else(|| dom::query_one::<HtmlElement>(&container, r#"[id$="file-name"]"#));
        let palette = if container.id() == PRIMARY_ZONE_ID { Palette::Primary } else { Palette::Secondary };
        Some(Self { container, input, display, palette })
    }

    fn highlight(&self) {
        let classes = self.container.class_list();
        let _ = classes.add_1(ACTIVE_CLASS);
        let [border, bg] = self.palette.classes();
        let _ = classes.add_2(border, bg);
    }

    fn unhighlight(&self) {
        let classes = self.container.class_list();
        let _ = classes.remove_1(ACTIVE_CLASS);
        for palette in Palette::ALL {
            let [border, bg] = palette.classes();
            let _ = classes.remove_2(border, bg);
        }
    }

    fn show_label(&self, label: &str) {
        let Some(display) = &self.display else { return };
        display.set_text_content(Some(label));
        let _ = display.class_list().remove_1("hidden");
        let _ = display.class_list().add_1("animate-fadeIn");
    }

    /// Shared by drop and picker so both end in the same state.
    fn accept_selection(&self, files: &FileList, notifier: Notifier, max_bytes: u64) {
        let first = files.get(0).map(|f| FileInfo::from_file(&f));
        match evaluate_selection(first.as_ref(), &self.input.accept(), max_bytes) {
            SelectionOutcome::Empty => {}
            SelectionOutcome::Accepted { label } => {
                self.show_label(&label);
                log::debug!("{label} ({} bytes)", first.map(|f| f.size).unwrap_or(0));
            }
            SelectionOutcome::Rejected { label, error } => {
                self.show_label(&label);
                log::info!("Rejected upload: {error}");
                notifier.notify_error(error.to_string());
                self.input.set_value("");
            }
        }
    }
}

pub fn discover_zones(document: &Document) -> Vec<DropZone> {
    dom::query_all::<HtmlElement>(document, r#"[id$="drop-area"]"#)
        .into_iter()
        .filter_map(DropZone::discover)
        .collect()
}

fn suppress_defaults(ev: &web_sys::Event) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Stops the browser from navigating to a file dropped outside any zone.
fn guard_body() -> Result<(), String> {
    if BODY_GUARDED.with(|g| g.replace(true)) {
        return Ok(());
    }
    let body = dom::body()?;
    for event in DRAG_EVENTS {
        dom::listen(&body, event, |ev| suppress_defaults(&ev))?;
    }
    Ok(())
}

pub fn attach_zone(zone: DropZone, notifier: Notifier, max_bytes: u64) -> Result<(), String> {
    guard_body()?;
    let target = zone.container.clone();

    for event in DRAG_EVENTS {
        dom::listen(&target, event, |ev| suppress_defaults(&ev))?;
    }
    for event in ["dragenter", "dragover"] {
        let z = zone.clone();
        dom::listen(&target, event, move |_| z.highlight())?;
    }
    for event in ["dragleave", "drop"] {
        let z = zone.clone();
        dom::listen(&target, event, move |_| z.unhighlight())?;
    }

    let z = zone.clone();
    dom::listen(&target, "drop", move |ev| {
        let Some(drag) = ev.dyn_ref::<DragEvent>() else { return };
        let Some(files) = drag.data_transfer().and_then(|dt| dt.files()) else { return };
        if files.length() == 0 {
            return;
        }
        z.input.set_files(Some(&files));
        z.accept_selection(&files, notifier, max_bytes);
    })?;

    let z = zone.clone();
    dom::listen(&zone.input, "change", move |_| {
        let Some(files) = z.input.files() else { return };
        z.accept_selection(&files, notifier, max_bytes);
    })?;

    log::debug!("Drop zone attached: #{}", zone.container.id());
    Ok(())
}
