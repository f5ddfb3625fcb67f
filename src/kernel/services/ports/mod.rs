//! Service ports: data contracts shared with the kernel.

pub mod config;
pub mod settings;

pub use config::ExplorerConfig;
pub use settings::{ExplorerSettings, Settings};
