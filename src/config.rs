use serde::Deserialize;
use crate::validate::MAX_UPLOAD_BYTES;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    /// Every banner sits at the same fixed spot.
    #[default]
    Overlap,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageContent {
    #[default]
    Text,
    /// Message is inserted as markup. Only for trusted callers.
    RawMarkup,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub success_ms: i32,
    pub error_ms: i32,
    pub stacking: Stacking,
    pub max_visible: Option<usize>,
    pub content: MessageContent,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            success_ms: 3_000,
            error_ms: 5_000,
            stacking: Stacking::Overlap,
            max_visible: None,
            content: MessageContent::Text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub max_upload_bytes: u64,
    pub notify: NotifyConfig,
    pub progress_delay_ms: i32,
    pub stagger_step_ms: u32,
    pub tooltip_gap_px: f64,
    /// Name of the `window` property the API handle is installed under.
    pub global_name: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            notify: NotifyConfig::default(),
            progress_delay_ms: 500,
            stagger_step_ms: 100,
            tooltip_gap_px: 5.0,
            global_name: Some("CareerInsights".into()),
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid UI config: {e}"))
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn from_page(document: &web_sys::Document) -> Self {
        let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let text = el.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("Loaded UI config from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(e) => {
                log::error!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
