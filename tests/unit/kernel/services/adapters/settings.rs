use super::*;
use tempfile::tempdir;

#[test]
fn load_settings_from_reads_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, r#"{ "explorer": { "new_folder_name": "Untitled" } }"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.explorer_config().new_folder_name, "Untitled");
}

#[test]
fn load_settings_from_missing_or_invalid_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_settings_from(&dir.path().join("nope.json")).is_none());

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}

#[test]
fn write_default_settings_creates_parent_and_keeps_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_DIR).join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    assert!(load_settings_from(&path).is_some());

    std::fs::write(&path, r#"{ "log_filter": "fexplorer=trace" }"#).unwrap();
    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.log_filter.as_deref(), Some("fexplorer=trace"));
}

#[test]
fn read_settings_from_reports_parse_errors() {
    let dir = tempdir().unwrap();
    assert!(matches!(read_settings_from(&dir.path().join("nope.json")), Ok(None)));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(read_settings_from(&path).is_err());

    std::fs::write(&path, r#"{ "log_filter": "fexplorer=debug" }"#).unwrap();
    let settings = read_settings_from(&path).unwrap().unwrap();
    assert_eq!(settings.log_filter.as_deref(), Some("fexplorer=debug"));
}
