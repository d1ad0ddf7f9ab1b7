use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;
use uhal_tools::{
    AppError, BootstrapAction, BootstrapOptions, ConfigFileState, ConfigSet, Define, PlatformSelector,
    bootstrap_config_at, build_stamp_at, config_status_at, list_platforms_at, load_config_at,
    platform_sources_at,
};

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config/templates")).unwrap();
    fs::write(temp.path().join("config/templates/config.h"), "A").unwrap();
    fs::write(temp.path().join("config/templates/advanced.h"), "B").unwrap();
    temp
}

#[test]
fn bootstrap_then_status_round() {
    let temp = project();
    let set = ConfigSet::default();

    let report = bootstrap_config_at(temp.path(), &set, BootstrapOptions::default()).unwrap();
    assert_eq!(report.copied().count(), 2);
    assert!(matches!(
        &report.actions()[0],
        BootstrapAction::Copied { bytes: 1, .. }
    ));

    let statuses = config_status_at(temp.path(), &set).unwrap();
    assert!(statuses.iter().all(|s| s.state == ConfigFileState::Default));

    let again = bootstrap_config_at(temp.path(), &set, BootstrapOptions::default()).unwrap();
    assert!(again.is_noop());
}

#[test]
fn missing_template_stops_processing() {
    let temp = project();
    fs::remove_file(temp.path().join("config/templates/config.h")).unwrap();

    let err = bootstrap_config_at(temp.path(), &ConfigSet::default(), BootstrapOptions::default())
        .unwrap_err();

    assert!(matches!(err, AppError::TemplateCopy { .. }));
    assert!(!temp.path().join("config/advanced.h").exists());
}

#[test]
fn missing_destination_directory_is_fatal() {
    let temp = project();
    let set = ConfigSet::default().with_config_dir("does/not/exist");

    let err = bootstrap_config_at(temp.path(), &set, BootstrapOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::TemplateCopy { .. }));
}

#[test]
fn config_defaults_without_file() {
    let temp = TempDir::new().unwrap();
    let config = load_config_at(temp.path()).unwrap();
    assert_eq!(config.config_set(), ConfigSet::default());
}

#[test]
fn stamp_outside_repository_falls_back() {
    let temp = TempDir::new().unwrap();
    let stamp = build_stamp_at(temp.path(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    assert!(stamp.is_fallback());
}

#[test]
fn stamp_without_commits_falls_back() {
    let temp = TempDir::new().unwrap();
    git2::Repository::init(temp.path()).unwrap();

    let stamp = build_stamp_at(temp.path(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

    assert!(stamp.is_fallback());
    assert_eq!(stamp.version(), "0000000");
}

#[test]
fn sources_reject_regular_file_as_source_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("src"), "x").unwrap();
    let selector = PlatformSelector::Defines { defines: &[], define_name: "uHAL_PLATFORM" };

    let err = platform_sources_at(temp.path(), std::path::Path::new("src"), &selector).unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn platform_listing_and_sources() {
    let temp = TempDir::new().unwrap();
    for file in ["src/main.c", "src/platform/AVR_XMEGA3/adc.c", "src/platform/CMSIS_STM32/adc.c"] {
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
    let src = std::path::Path::new("src");

    assert_eq!(list_platforms_at(temp.path(), src).unwrap(), vec!["AVR_XMEGA3", "CMSIS_STM32"]);

    let defines: Vec<Define> = vec!["uHAL_PLATFORM=AVR_XMEGA3".parse().unwrap()];
    let selector = PlatformSelector::Defines { defines: &defines, define_name: "uHAL_PLATFORM" };
    let files = platform_sources_at(temp.path(), src, &selector).unwrap();
    assert_eq!(files, vec!["main.c", "platform/AVR_XMEGA3/adc.c"]);
}
