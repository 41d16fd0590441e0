use super::*;
use chess_core::Color;

#[test]
fn test_empty_file_is_default() {
    let config = PlayerConfig::from_toml_str("").unwrap();
    assert_eq!(config, PlayerConfig::default());
    assert_eq!(config.max_plies, 200);
    assert_eq!(config.white.strategy, Strategy::AlphaBeta);
}

#[test]
fn test_full_config() {
    let text = r#"
max_plies = 60
start_fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"

[white]
strategy = "negamax"
strength = 2

[black]
strategy = "monte-carlo"
strength = 4
overrides = { simulations = 7, playout_plies = 3, seed = 11, time_limit_ms = 0 }
"#;
    let config = PlayerConfig::from_toml_str(text).unwrap();
    assert_eq!(config.max_plies, 60);
    assert_eq!(config.side(Color::White).strategy, Strategy::Negamax);
    assert_eq!(config.white.params(), StrategyParams::from_strength(2));

    let black = config.side(Color::Black).params();
    assert_eq!(black.max_depth, 6);
    assert_eq!(black.simulations, 7);
    assert_eq!(black.playout_plies, 3);
    assert_eq!(black.seed, Some(11));
    assert_eq!(black.time_limit, None);
}

#[test]
fn test_rejects_out_of_range_strength() {
    let err = PlayerConfig::from_toml_str("[white]\nstrength = 11\n").unwrap_err();
    assert!(matches!(err, ConfigError::Strength(11)));
}

#[test]
fn test_rejects_unknown_strategy_and_fields() {
    assert!(matches!(
        PlayerConfig::from_toml_str("[white]\nstrategy = \"minimax\"\n"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        PlayerConfig::from_toml_str("colour = \"white\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let err = PlayerConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("here.toml")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = PlayerConfig::default();
    config.black.strategy = Strategy::MonteCarlo;
    config.black.overrides.seed = Some(3);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(PlayerConfig::from_toml_str(&text).unwrap(), config);
}
