pub mod catalog;
pub mod runtime;
pub mod settings;

pub use catalog::ShowCatalog;
pub use runtime::{LookupMessage, LookupRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, load_settings, settings_path, SettingsError, CONFIG_ENV,
};
