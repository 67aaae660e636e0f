use leptos::prelude::*;
use leptos::mount::mount_to;
use crate::dom;

/// Markup swapped into a submit button while the upload is in flight.
pub const PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Processing..."#;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="text-center">
                <div class="loading-spinner"></div>
                <p class="mt-4 text-gray-600">"Processing your request..."</p>
            </div>
        </div>
    }
}

/// Covers the page until it navigates away. Never unmounted.
pub fn show_loading_overlay() -> Result<(), String> {
    let body = dom::body()?;
    mount_to(body, LoadingOverlay).forget();
    Ok(())
}
