//! Tests for form copy configuration.

use std::fs;
use std::path::PathBuf;

use form_cli::config::{load_form_copy, parse_form_copy};
use form_model::{DEFAULT_SUCCESS_BANNER, FormCopy};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "contact-form-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn no_path_gives_defaults() {
    let copy = load_form_copy(None).unwrap();
    assert_eq!(copy, FormCopy::default());
}

#[test]
fn partial_config_keeps_defaults() {
    let copy = parse_form_copy(
        r#"
submit_label = "Send"

[banners]
error = "Please check your details"
"#,
    )
    .unwrap();
    assert_eq!(copy.submit_label, "Send");
    assert_eq!(copy.name_label, "Name");
    assert_eq!(copy.banners.error, "Please check your details");
    assert_eq!(copy.banners.success, DEFAULT_SUCCESS_BANNER);
}

#[test]
fn invalid_config_is_an_error() {
    let error = parse_form_copy("submit_label = 3").unwrap_err();
    assert!(format!("{error:#}").contains("invalid form config"));
}

#[test]
fn config_file_is_loaded() {
    let path = unique_temp_path("config.toml");
    fs::write(&path, "title = \"Newsletter\"\n").unwrap();
    let copy = load_form_copy(Some(path.as_path())).unwrap();
    assert_eq!(copy.title, "Newsletter");
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_config_file_names_the_path() {
    let path = unique_temp_path("missing.toml");
    let error = load_form_copy(Some(path.as_path())).unwrap_err();
    assert!(error.to_string().contains("read config file"));
}
