// tests/unit_config.rs
use std::fs;
use std::path::PathBuf;

use coursemap_core::catalog::School;
use coursemap_core::config::Config;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursemap.toml");
    fs::write(
        &path,
        "[catalog]\nschool = \"ubc\"\nprograms = \"majors.json\"\n\n[graph]\nedge_type = \"step\"\nwidth_per_char = 12\npretty = false\n",
    )
    .unwrap();

    let c = Config::load(Some(&path)).unwrap();
    assert_eq!(c.school(), School::Ubc);
    assert_eq!(c.separator(), ' ');
    assert_eq!(c.courses_path(), PathBuf::from("data/ScrapedUBCCourses.json"));
    assert_eq!(c.programs_path(), PathBuf::from("majors.json"));
    assert_eq!(c.graph().edge_type, "step");
    assert_eq!(c.graph().width_per_char, 12);
    assert!(!c.graph().animated);
    assert!(!c.pretty());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("absent.toml");
    let err = Config::load(Some(&path)).err().map(|e| e.to_string()).unwrap_or_default();
    assert!(err.contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("coursemap.toml");
    fs::write(&path, "[graph\nwidth_per_char = ").unwrap();
    let err = Config::load(Some(&path)).err().map(|e| e.to_string()).unwrap_or_default();
    assert!(err.starts_with("Invalid configuration"));
}

#[test]
fn test_separator_override() {
    let c = Config::parse("[catalog]\nseparator = \"-\"").unwrap();
    assert_eq!(c.separator(), '-');
    assert_eq!(c.school(), School::Guelph);
}
