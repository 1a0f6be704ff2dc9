use pathweave_cluster::MixedAttrsPolicy;
use pathweave_settings::{Config, SettingsError};

fn customized() -> Config {
    let mut config = Config::new();
    config.cluster.tolerance = 0.05;
    config.cluster.by_attrs = true;
    config.cluster.mixed_attrs = MixedAttrsPolicy::Orphan;
    config.import.keep_white = true;
    config.export.precision = Some(3);
    config.export.suffix = "_joined".to_string();
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"mixed_attrs\": \"orphan\""));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_default_precision_round_trips_in_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    Config::new().save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap().export.precision, None);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pathweave").join("config.toml");
    Config::new().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[cluster]\ntolerance = -2.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { ref key, .. } if key == "cluster.tolerance"));
}

#[test]
fn test_load_reports_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("bad.toml");
    std::fs::write(&toml_path, "[cluster\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml_path),
        Err(SettingsError::TomlError(_))
    ));

    let json_path = dir.path().join("bad.json");
    std::fs::write(&json_path, "{").unwrap();
    assert!(matches!(
        Config::load_from_file(&json_path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from_file(&dir.path().join("absent.toml")),
        Err(SettingsError::IoError(_))
    ));
}
