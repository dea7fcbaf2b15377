//! Configuration loader tests

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use transit_fares::config::load_config;
use transit_fares::{build_standard_report, ReportRequest, TimeOfDay, TransportMode, Trip};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("transit_fares_{}_{name}.toml", std::process::id()));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = load_config(Some("definitely/not/here.toml")).unwrap();
    let trip = Trip::try_from(&config.trip).unwrap();

    assert_eq!(trip, Trip::new(dec!(10), TimeOfDay::Day, 2).unwrap());
    assert_eq!(config.settings.log_level, "info");
    assert_eq!(config.settings.modes, TransportMode::ALL.to_vec());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let path = write_config(
        "overrides",
        r#"
[trip]
distance_km = 4
time_of_day = "night"
zones = 3

[adjustments]
commission = 15
discount_percent = 20

[settings]
modes = ["taxi", "metro"]
json = true
"#,
    );

    let config = load_config(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    let trip = Trip::try_from(&config.trip).unwrap();
    assert_eq!(trip, Trip::new(dec!(4), TimeOfDay::Night, 3).unwrap());
    assert_eq!(config.adjustments.commission, Some(dec!(15)));
    assert_eq!(config.adjustments.discount_percent, Some(dec!(20)));
    assert_eq!(config.settings.modes, vec![TransportMode::Taxi, TransportMode::Metro]);
    assert!(config.settings.json);
}

#[test]
fn test_configured_report() {
    let path = write_config(
        "report",
        r#"
[trip]
distance_km = 10
zones = 2

[adjustments]
commission = 10
discount_percent = 50
"#,
    );

    let config = load_config(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    let request = ReportRequest {
        trip: Trip::try_from(&config.trip).unwrap(),
        modes: config.settings.modes,
        commission: config.adjustments.commission,
        discount_percent: config.adjustments.discount_percent,
    };
    let report = build_standard_report(&request).unwrap();

    let adjusted: Vec<_> = report
        .sections
        .last()
        .unwrap()
        .quotes
        .iter()
        .map(|q| (q.label.as_str(), q.price))
        .collect();
    assert_eq!(
        adjusted,
        vec![
            ("bus (base)", dec!(70)),
            ("+ commission 10", dec!(80)),
            ("- discount 50%", dec!(40)),
        ]
    );
}

#[test]
fn test_invalid_trip_in_config_is_rejected() {
    let path = write_config(
        "invalid",
        r#"
[trip]
distance_km = -3
"#,
    );

    let config = load_config(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    let err = Trip::try_from(&config.trip).unwrap_err();
    assert!(err.is_invalid_input());
}
