use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub new_file_name: String,
    pub new_folder_name: String,
    pub root_folder_name: String,
    /// When false, committing a blank rename leaves the node unchanged.
    pub allow_empty_names: bool,
    pub case_sensitive_search: bool,
    pub indent_width: u16,
    pub empty_folder_label: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            new_file_name: "NewFile.txt".to_string(),
            new_folder_name: "New Folder".to_string(),
            root_folder_name: "Root Folder".to_string(),
            allow_empty_names: false,
            case_sensitive_search: false,
            indent_width: 2,
            empty_folder_label: "This folder is empty".to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn indent(&self, depth: u16) -> String {
        " ".repeat(usize::from(self.indent_width) * usize::from(depth))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
