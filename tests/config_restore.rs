use std::fs;
use std::path::PathBuf;

use gabor_orientation_game::config::{
    AppConfig, DifficultyConfig, SessionConfig, StimulusConfig, WindowConfig,
};
use gabor_orientation_game::error::GameError;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "gabor_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn config_roundtrip_default_toml() {
    let default_cfg = AppConfig::default();
    let text = toml::to_string_pretty(&default_cfg).expect("serialize default");
    let parsed: AppConfig = toml::from_str(&text).expect("parse default");
    assert_eq!(parsed, default_cfg);
}

#[test]
fn config_load_custom_values() {
    let path = unique_path("custom.toml");
    let custom = AppConfig {
        stimulus: StimulusConfig {
            spatial_frequencies_cpd: vec![2.0, 4.0],
            size_pixels: 256,
            field_of_view_deg: 6.0,
            sigma_deg: 1.0,
        },
        difficulty: DifficultyConfig {
            initial_contrast: 0.4,
            min_contrast: 0.005,
            decay_rate: 0.08,
        },
        window: WindowConfig {
            title: "Contrast probe".to_owned(),
            inner_size: [800.0, 800.0],
            min_inner_size: [600.0, 600.0],
        },
        session: SessionConfig { seed: Some(42) },
    };
    let text = toml::to_string_pretty(&custom).expect("serialize custom");
    fs::write(&path, text).expect("write custom config");

    let loaded = AppConfig::load(&path).expect("load custom config");
    assert_eq!(loaded, custom);
    let lenient = AppConfig::load_or_default(&path.to_string_lossy());
    assert_eq!(lenient, custom);

    let _ = fs::remove_file(&path);
}

#[test]
fn config_missing_file_fallback() {
    let path = unique_path("missing.toml");
    let _ = fs::remove_file(&path);

    let loaded = AppConfig::load_or_default(&path.to_string_lossy());
    assert!(path.exists(), "missing config should be created");
    assert_eq!(loaded, AppConfig::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let path = unique_path("invalid.toml");
    fs::write(&path, "[difficulty]\ndecay_rate = 1.5\n").expect("write invalid config");

    assert!(matches!(
        AppConfig::load(&path),
        Err(GameError::InvalidConfig(_))
    ));
    assert_eq!(
        AppConfig::load_or_default(&path.to_string_lossy()),
        AppConfig::default()
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let path = unique_path("malformed.toml");
    fs::write(&path, "[stimulus\nsize_pixels = ").expect("write malformed config");
    assert!(matches!(
        AppConfig::load(&path),
        Err(GameError::ConfigParse(_))
    ));
    let _ = fs::remove_file(&path);
}
