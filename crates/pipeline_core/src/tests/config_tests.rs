use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("pipeline_core_config_{tag}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("pipeline.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_to_well_known_endpoint() {
    let settings = load_settings_from(Path::new("/nonexistent/pipeline.toml"), no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
}

#[test]
fn file_overrides_default() {
    let path = temp_settings_file("file", "endpoint_url = \"http://127.0.0.1:8080/items.json\"\n");

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.endpoint_url, "http://127.0.0.1:8080/items.json");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("env", "endpoint_url = \"http://file.example/items.json\"\n");

    let settings = load_settings_from(&path, |key| match key {
        "PIPELINE_ENDPOINT_URL" => Some("http://env.example/items.json".into()),
        _ => None,
    });
    assert_eq!(settings.endpoint_url, "http://env.example/items.json");

    let settings = load_settings_from(&path, |key| match key {
        "PIPELINE_ENDPOINT_URL" => Some("http://env.example/items.json".into()),
        "APP__ENDPOINT_URL" => Some("http://app.example/items.json".into()),
        _ => None,
    });
    assert_eq!(settings.endpoint_url, "http://app.example/items.json");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn blank_and_invalid_values_are_ignored() {
    let path = temp_settings_file("invalid", "endpoint_url = 42\n");
    let settings = load_settings_from(&path, |_| Some("   ".into()));
    assert_eq!(settings, Settings::default());
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");

    let path = temp_settings_file("blank", "endpoint_url = \"  \"\n");
    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings, Settings::default());
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
