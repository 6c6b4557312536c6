use std::fs;

use alien_invasion::error::GameError;
use alien_invasion::settings::Settings;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!((s.screen_w, s.screen_h), (1200.0, 800.0));
    assert_eq!(s.bullets_allowed, 7);
    assert_eq!(s.rank_advance, -40.0);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let s = Settings::from_toml("fleet_speed = 3.5\nbullets_allowed = 3\n").unwrap();
    assert_eq!(s.fleet_speed, 3.5);
    assert_eq!(s.bullets_allowed, 3);
    assert_eq!(s.screen_w, Settings::default().screen_w);
    assert_eq!(s.alien_points, Settings::default().alien_points);
}

#[test]
fn wrong_type_is_a_parse_error() {
    assert!(Settings::from_toml("fleet_speed = \"fast\"").is_err());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "screen_w = 800.0\nrank_advance = -20.0\n").unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.screen_w, 800.0);
    assert_eq!(s.rank_advance, -20.0);
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "screen_w = = 3").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }));
}

#[test]
fn out_of_range_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "bullets_allowed = 0\n").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidSetting {
            name: "bullets_allowed",
            ..
        }
    ));
    assert!(err.to_string().contains("bullets_allowed"));
}

#[test]
fn negative_speed_is_rejected() {
    let s = Settings {
        fleet_speed: -1.0,
        ..Settings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn scaled_speeds_up_movement_only() {
    let base = Settings::default();
    let next = base.scaled();

    assert!(close(next.ship_speed, 5.5));
    assert!(close(next.bullet_speed, 7.7));
    assert!(close(next.fleet_speed, 2.2));
    assert!(close(next.rank_advance, -44.0));
    assert_eq!(next.screen_w, base.screen_w);
    assert_eq!(next.bullets_allowed, base.bullets_allowed);
    assert_eq!(next.alien_points, base.alien_points);
    // The source record is untouched
    assert_eq!(base.fleet_speed, 2.0);
}

#[test]
fn frame_duration_follows_fps() {
    let s = Settings {
        fps: 50,
        ..Settings::default()
    };
    assert_eq!(s.frame_duration().as_millis(), 20);
}
