//! Service adapters: filesystem-backed pieces (settings file, log directory).

pub mod paths;
pub mod settings;

pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, read_settings_from,
};
