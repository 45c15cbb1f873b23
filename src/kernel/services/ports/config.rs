use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ROOT_CLASS: &str = "typeahead";

/// Serializable widget options. Callbacks and the lookup live in
/// `app::WidgetOptions`, which wraps this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub placeholder: String,
    pub no_items_text: String,
    pub loading_text: String,
    pub debounce_delay_ms: u64,
    pub class_name: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            no_items_text: "No items".to_string(),
            loading_text: "Loading...".to_string(),
            debounce_delay_ms: 500,
            class_name: None,
        }
    }
}

impl WidgetConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Root class list: the widget's own class followed by the caller's.
    pub fn root_class(&self) -> String {
        match self.class_name.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{} {}", ROOT_CLASS, extra),
            _ => ROOT_CLASS.to_string(),
        }
    }
}
