use crate::kernel::services::ports::{Lookup, LookupError, WidgetConfig};
use crate::kernel::ErrorFormatter;
use crate::ui::core::theme::Theme;
use std::sync::Arc;
use std::time::Duration;

pub type SelectCallback<T> = Box<dyn FnMut(T)>;

/// Everything needed to build an [`super::Autocomplete`]: the lookup, the
/// callbacks and the serializable [`WidgetConfig`].
pub struct WidgetOptions<T> {
    pub(super) lookup: Arc<dyn Lookup<T>>,
    pub(super) config: WidgetConfig,
    pub(super) on_select: Option<SelectCallback<T>>,
    pub(super) on_error: Option<ErrorFormatter>,
    pub(super) theme: Theme,
}

impl<T> WidgetOptions<T> {
    pub fn new(lookup: Arc<dyn Lookup<T>>) -> Self {
        Self {
            lookup,
            config: WidgetConfig::default(),
            on_select: None,
            on_error: None,
            theme: Theme::default(),
        }
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_select(mut self, f: impl FnMut(T) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&LookupError) -> String + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = text.into();
        self
    }

    pub fn no_items_text(mut self, text: impl Into<String>) -> Self {
        self.config.no_items_text = text.into();
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.config.loading_text = text.into();
        self
    }

    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.config.debounce_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.config.class_name = Some(class_name.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}
