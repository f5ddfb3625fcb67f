use super::config::ExplorerConfig;
use serde::{Deserialize, Serialize};

/// User settings file. Every field is optional; missing keys fall back to
/// `ExplorerConfig::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub explorer: ExplorerSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_folder_label: Option<String>,
}

impl Settings {
    pub fn explorer_config(&self) -> ExplorerConfig {
        let mut config = ExplorerConfig::default();
        self.apply_to(&mut config);
        config
    }

    pub fn apply_to(&self, config: &mut ExplorerConfig) {
        let s = &self.explorer;
        if let Some(name) = s.new_file_name.as_ref().filter(|n| !n.trim().is_empty()) {
            config.new_file_name = name.clone();
        }
        if let Some(name) = s.new_folder_name.as_ref().filter(|n| !n.trim().is_empty()) {
            config.new_folder_name = name.clone();
        }
        if let Some(name) = s.root_folder_name.as_ref().filter(|n| !n.trim().is_empty()) {
            config.root_folder_name = name.clone();
        }
        if let Some(v) = s.allow_empty_names {
            config.allow_empty_names = v;
        }
        if let Some(v) = s.case_sensitive_search {
            config.case_sensitive_search = v;
        }
        if let Some(width) = s.indent_width {
            config.indent_width = width.clamp(1, 8);
        }
        if let Some(label) = &s.empty_folder_label {
            config.empty_folder_label = label.clone();
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
