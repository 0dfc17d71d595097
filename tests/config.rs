use physics_explorer::config::{
    ConfigError, SimulatorConfig, load_parameter_overrides, load_simulator_config,
};

#[test]
fn bundled_toml_settings_load() {
    let config = load_simulator_config("data/simulator.toml").expect("simulator toml");
    assert!((config.gravity_m_s2 - 9.81).abs() < 1e-12);
    assert_eq!(config.curve_points, 100);
    assert_eq!(config.orbit_points, 360);

    let catalog = config.catalog().expect("catalog");
    let velocity = catalog.spec("projectile", "velocity").expect("velocity spec");
    assert!((velocity.max - 150.0).abs() < 1e-12);
}

#[test]
fn yaml_settings_fill_missing_fields_with_defaults() {
    let config = load_simulator_config("data/lunar.yaml").expect("lunar yaml");
    assert!((config.gravity_m_s2 - 1.62).abs() < 1e-12);
    assert_eq!(config.curve_points, 50);
    assert!(config.overrides.is_empty());
}

#[test]
fn directory_of_toml_ranges_loads() {
    let records = load_parameter_overrides("data/ranges").expect("ranges dir");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].topic, "free-fall");
}

#[test]
fn overrides_for_unknown_topics_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    std::fs::write(
        &path,
        "- topic: warp-drive\n  parameters: []\n",
    )
    .expect("write");
    let overrides = load_parameter_overrides(&path).expect("parses");
    let config = SimulatorConfig {
        overrides,
        ..SimulatorConfig::default()
    };
    assert!(matches!(config.catalog(), Err(ConfigError::UnknownTopic(_))));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "gravity_m_s2: [not, a, number\n").expect("write");
    assert!(matches!(
        load_simulator_config(&path),
        Err(ConfigError::Parse(_))
    ));
}
