use motif_search_rs::config::{Algorithm, SearchConfig};
use motif_search_rs::error::MotifError;
use motif_search_rs::profile::Pseudocounts;
use motif_search_rs::restart::SearchOutcome;
use test_case::test_case;

#[test_case("greedy", Algorithm::Greedy)]
#[test_case("Randomized", Algorithm::Randomized)]
#[test_case("GIBBS", Algorithm::Gibbs)]
fn test_parse_algorithm(name: &str, expected: Algorithm) {
    assert_eq!(name.parse::<Algorithm>().unwrap(), expected);
}

#[test]
fn test_algorithm_display_round_trips() {
    for algorithm in [Algorithm::Greedy, Algorithm::Randomized, Algorithm::Gibbs] {
        assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
    }
    assert!(matches!(
        "median".parse::<Algorithm>(),
        Err(MotifError::InvalidParameter { .. })
    ));
}

#[test]
fn test_default_config_is_valid() {
    let config = SearchConfig::default();
    assert_eq!(config.algorithm, Algorithm::Gibbs);
    assert!(config.validate().is_ok());
}

#[test_case(SearchConfig { k: 0, ..Default::default() } ; "zero k")]
#[test_case(SearchConfig { t: Some(0), ..Default::default() } ; "zero t")]
#[test_case(SearchConfig { restarts: 0, ..Default::default() } ; "zero restarts")]
#[test_case(SearchConfig { iterations: 0, ..Default::default() } ; "zero gibbs iterations")]
fn test_invalid_config(config: SearchConfig) {
    assert!(matches!(
        config.validate(),
        Err(MotifError::InvalidParameter { .. })
    ));
}

#[test]
fn test_greedy_ignores_restarts_and_iterations() {
    let config = SearchConfig {
        algorithm: Algorithm::Greedy,
        restarts: 0,
        iterations: 0,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_search_config_json_round_trip() {
    let config = SearchConfig {
        k: 8,
        t: Some(4),
        algorithm: Algorithm::Gibbs,
        iterations: 250,
        restarts: 12,
        seed: 42,
        parallel: false,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"algorithm\":\"gibbs\""));
    let back: SearchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let default: SearchConfig =
        serde_json::from_str(&serde_json::to_string(&SearchConfig::default()).unwrap()).unwrap();
    assert_eq!(default, SearchConfig::default());
}

#[test]
fn test_algorithm_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Algorithm::Randomized).unwrap(), "\"randomized\"");
    let parsed: Algorithm = serde_json::from_str("\"greedy\"").unwrap();
    assert_eq!(parsed, Algorithm::Greedy);
    assert!(serde_json::from_str::<Algorithm>("\"Greedy\"").is_err());
}

#[test]
fn test_pseudocounts_json_round_trip() {
    for pseudocounts in [Pseudocounts::None, Pseudocounts::Laplace] {
        let json = serde_json::to_string(&pseudocounts).unwrap();
        assert_eq!(serde_json::from_str::<Pseudocounts>(&json).unwrap(), pseudocounts);
    }
    assert_eq!(serde_json::to_string(&Pseudocounts::Laplace).unwrap(), "\"Laplace\"");
}

#[test]
fn test_search_outcome_serializes() {
    let outcome = SearchOutcome::new(vec!["TTC".to_string(), "ATC".to_string()], 3).unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "motifs": ["TTC", "ATC"],
            "score": 1,
            "consensus": "ATC",
            "restart": 3,
        })
    );
}
