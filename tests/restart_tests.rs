use motif_search_rs::config::{Algorithm, SearchConfig};
use motif_search_rs::error::MotifError;
use motif_search_rs::profile::score;
use motif_search_rs::randomized::randomized_motif_search;
use motif_search_rs::restart::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DNA: [&str; 5] = [
    "GGCGTTCAGGCA",
    "AAGAATCAGTCA",
    "CAAGGAGTTCGC",
    "CACGTCAATCAC",
    "CAATAATATTCG",
];

const PLANTED: [&str; 6] = [
    "TTGACCTAACGTTGCAGGTCAT",
    "ACGTTGCATTAGGCTCCAAGTG",
    "GGCTAGTCCAATTCAACGTTGCA",
    "CATTGACGTTGCAGTACCTAGG",
    "TCCAGGATACTTAACGTTGCAGT",
    "AGTCACGTTGCATTCTGGATCC",
];

#[test]
fn test_search_outcome() {
    let motifs = vec!["TTC".to_string(), "ATC".to_string(), "TTC".to_string()];
    let outcome = SearchOutcome::new(motifs, 4).unwrap();
    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.consensus, "TTC");
    assert_eq!(outcome.restart, 4);
}

#[test]
fn test_best_of_restarts_keeps_lowest_score() {
    let candidates = [
        vec!["AAA".to_string(), "CCC".to_string()],
        vec!["AAA".to_string(), "AAC".to_string()],
        vec!["AAA".to_string(), "AAA".to_string()],
        vec!["AAA".to_string(), "AAA".to_string()],
    ];
    let mut rng = StdRng::seed_from_u64(0);
    let mut calls = 0;
    let outcome = best_of_restarts(4, &mut rng, |_| {
        calls += 1;
        Ok(candidates[calls - 1].clone())
    })
    .unwrap();

    assert_eq!(calls, 4);
    assert_eq!(outcome.score, 0);
    // the earlier of two equal scores wins
    assert_eq!(outcome.restart, 2);
}

#[test]
fn test_restarts_must_be_positive() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        best_of_restarts(0, &mut rng, |rng| randomized_motif_search(&DNA, 3, 5, rng)),
        Err(MotifError::InvalidParameter { .. })
    ));
    assert!(best_of_seeded_restarts(0, 0, true, |rng| {
        randomized_motif_search(&DNA, 3, 5, rng)
    })
    .is_err());
}

#[test]
fn test_restart_errors_propagate() {
    let result = best_of_seeded_restarts(8, 1, true, |rng| {
        randomized_motif_search(&DNA, 20, 5, rng)
    });
    assert!(matches!(result, Err(MotifError::InvalidParameter { .. })));
}

#[test]
fn test_seeded_restarts_do_not_depend_on_parallelism() {
    let search = |rng: &mut StdRng| randomized_motif_search(&PLANTED, 8, 6, rng);
    let parallel = best_of_seeded_restarts(30, 7, true, search).unwrap();
    let sequential = best_of_seeded_restarts(30, 7, false, search).unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_seeded_restarts_keep_earliest_on_ties() {
    let tied = |_: &mut StdRng| Ok::<_, MotifError>(vec!["AAA".to_string(), "AAC".to_string()]);
    for parallel in [true, false] {
        let outcome = best_of_seeded_restarts(5_000, 9, parallel, tied).unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.restart, 0);
    }
}

#[test]
fn test_seeded_restarts_pick_lowest_score() {
    // only restart 137 draws this value first
    let target = StdRng::seed_from_u64(5 + 137).gen::<u64>();
    let run = |rng: &mut StdRng| {
        let second = if rng.gen::<u64>() == target { "AAA" } else { "CCC" };
        Ok::<_, MotifError>(vec!["AAA".to_string(), second.to_string()])
    };
    for parallel in [true, false] {
        let outcome = best_of_seeded_restarts(1_000, 5, parallel, run).unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.restart, 137);
    }
}

#[test]
fn test_seeded_restart_matches_a_single_run() {
    let outcome = best_of_seeded_restarts(1, 123, false, |rng| {
        randomized_motif_search(&DNA, 4, 5, rng)
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    assert_eq!(outcome.motifs, randomized_motif_search(&DNA, 4, 5, &mut rng).unwrap());
}

#[test]
fn test_run_search_greedy() {
    let config = SearchConfig {
        k: 3,
        algorithm: Algorithm::Greedy,
        ..Default::default()
    };
    let outcome = run_search(&DNA, &config).unwrap();
    assert_eq!(outcome.motifs, ["TTC", "ATC", "TTC", "ATC", "TTC"]);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.consensus, "TTC");
}

#[test]
fn test_run_search_randomized_finds_planted_motif() {
    let config = SearchConfig {
        k: 8,
        algorithm: Algorithm::Randomized,
        restarts: 100,
        seed: 2,
        ..Default::default()
    };
    let outcome = run_search(&PLANTED, &config).unwrap();
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.consensus, "ACGTTGCA");
    assert!(outcome.motifs.iter().all(|m| m == "ACGTTGCA"));
}

#[test]
fn test_run_search_gibbs_finds_planted_motif() {
    let config = SearchConfig {
        k: 8,
        algorithm: Algorithm::Gibbs,
        iterations: 200,
        restarts: 40,
        seed: 3,
        ..Default::default()
    };
    let outcome = run_search(&PLANTED, &config).unwrap();
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.consensus, "ACGTTGCA");
}

#[test]
fn test_run_search_is_reproducible() {
    let config = SearchConfig {
        k: 4,
        t: Some(4),
        algorithm: Algorithm::Gibbs,
        iterations: 30,
        restarts: 5,
        seed: 11,
        parallel: true,
    };
    let first = run_search(&DNA, &config).unwrap();
    let second = run_search(&DNA, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.motifs.len(), 4);
    assert_eq!(first.score, score(&first.motifs).unwrap());
}

#[test]
fn test_run_search_rejects_invalid_config() {
    let config = SearchConfig {
        k: 0,
        ..Default::default()
    };
    assert!(run_search(&DNA, &config).is_err());

    let config = SearchConfig {
        k: 3,
        t: Some(9),
        ..Default::default()
    };
    assert!(matches!(
        run_search(&DNA, &config),
        Err(MotifError::InvalidParameter { .. })
    ));
}
