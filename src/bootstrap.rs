use crate::api::{self, CareerInsights};
use crate::animation;
use crate::config::UiConfig;
use crate::dom;
use crate::form_guard;
use crate::state::Notifier;
use crate::tooltip::TooltipService;
use crate::upload_zone;

/// Runs `f` once the DOM is parsed, immediately if it already is.
pub fn on_ready(f: fn()) -> Result<(), String> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

/// Wires every controller into the current page. A failing controller is
/// logged and skipped; the rest still run.
pub fn init_page() {
    let document = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    let config = UiConfig::from_page(&document);

    if let Err(e) = animation::inject_styles(&document) {
        log::warn!("{e}");
    }

    let notifier = Notifier::new(config.notify);
    if let Err(e) = notifier.mount() {
        log::error!("Notifications unavailable: {e}");
    }

    let zones = upload_zone::discover_zones(&document);
    let zone_count = zones.len();
    for zone in zones {
        if let Err(e) = upload_zone::attach_zone(zone, notifier, config.max_upload_bytes) {
            log::error!("Drop zone: {e}");
        }
    }

    let forms = form_guard::discover_forms(&document);
    let form_count = forms.len();
    for form in forms {
        if let Err(e) = form_guard::attach_form(form, notifier) {
            log::error!("Form guard: {e}");
        }
    }

    let tooltips = TooltipService::new(config.tooltip_gap_px).register_all(&document);

    if let Err(e) = animation::animate_progress_bars(&document, config.progress_delay_ms) {
        log::error!("Progress bars: {e}");
    }
    if let Err(e) = animation::observe_cards(&document) {
        log::warn!("{e}");
    }
    animation::stagger_skill_tags(&document, config.stagger_step_ms);

    let handle = CareerInsights::new(notifier, config.max_upload_bytes);
    api::register(handle);
    if let Some(name) = &config.global_name {
        if let Err(e) = api::install_global(handle, name) {
            log::error!("{e}");
        }
    }

    log::info!(
        "UI ready: {} drop zones, {} upload forms, {} tooltips",
        zone_count,
        form_count,
        tooltips
    );
}
