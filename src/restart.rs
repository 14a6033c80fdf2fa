//! Drives the randomized searches through many independent restarts and
//! keeps the lowest-scoring motif set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Algorithm, SearchConfig};
use crate::error::{MotifError, Result};
use crate::gibbs::gibbs_sampler;
use crate::greedy::greedy_motif_search;
use crate::profile::{consensus, score};
use crate::randomized::randomized_motif_search;
use crate::types::*;

/// The best motif set found by a search, with its statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub motifs: MotifSet,
    pub score: usize,
    pub consensus: String,
    /// Index of the restart that produced `motifs`
    pub restart: usize,
}

impl SearchOutcome {
    pub fn new(motifs: MotifSet, restart: usize) -> Result<Self> {
        Ok(Self {
            score: score(&motifs)?,
            consensus: consensus(&motifs)?,
            motifs,
            restart,
        })
    }
}

fn check_restarts(restarts: usize) -> Result<()> {
    if restarts == 0 {
        return Err(MotifError::invalid_parameter(
            "restarts",
            restarts,
            "must be positive",
        ));
    }
    Ok(())
}

/// Lowest score wins; on equal scores the earlier restart wins.
fn better(a: SearchOutcome, b: SearchOutcome) -> SearchOutcome {
    if (b.score, b.restart) < (a.score, a.restart) {
        b
    } else {
        a
    }
}

/// Calls `run` `restarts` times on a single random stream and keeps the
/// lowest-scoring result.
pub fn best_of_restarts<R, F>(restarts: usize, rng: &mut R, mut run: F) -> Result<SearchOutcome>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Result<MotifSet>,
{
    check_restarts(restarts)?;

    let mut best = SearchOutcome::new(run(rng)?, 0)?;
    for restart in 1..restarts {
        best = better(best, SearchOutcome::new(run(rng)?, restart)?);
    }
    Ok(best)
}

/// Calls `run` `restarts` times, restart `r` with its own generator seeded
/// from `seed + r`, and keeps the lowest-scoring result.
///
/// Restarts are independent, so with `parallel` they are spread over the
/// rayon thread pool. The outcome does not depend on `parallel` or on the
/// number of threads.
pub fn best_of_seeded_restarts<F>(
    restarts: usize,
    seed: u64,
    parallel: bool,
    run: F,
) -> Result<SearchOutcome>
where
    F: Fn(&mut StdRng) -> Result<MotifSet> + Sync,
{
    check_restarts(restarts)?;

    let single = |restart: usize| -> Result<SearchOutcome> {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(restart as u64));
        let outcome = SearchOutcome::new(run(&mut rng)?, restart)?;
        debug!(restart, score = outcome.score, "restart finished");
        Ok(outcome)
    };

    let best = if parallel {
        (0..restarts)
            .into_par_iter()
            .map(single)
            .try_reduce_with(|a, b| Ok(better(a, b)))
            .transpose()?
    } else {
        let mut best = single(0)?;
        for restart in 1..restarts {
            best = better(best, single(restart)?);
        }
        Some(best)
    };
    best.ok_or(MotifError::EmptyMotifSet)
}

/// Runs the search described by `config` over `dna`.
///
/// The greedy search runs once; the randomized search and the Gibbs sampler
/// run `config.restarts` times through [`best_of_seeded_restarts`].
pub fn run_search<S: AsRef<str> + Sync>(dna: &[S], config: &SearchConfig) -> Result<SearchOutcome> {
    config.validate()?;
    let k = config.k;
    let t = config.t.unwrap_or(dna.len());
    select_sequences(dna, k, t)?;

    info!(
        algorithm = %config.algorithm,
        k,
        t,
        restarts = config.restarts,
        "starting motif search"
    );

    let outcome = match config.algorithm {
        Algorithm::Greedy => SearchOutcome::new(greedy_motif_search(dna, k, t)?, 0)?,
        Algorithm::Randomized => {
            best_of_seeded_restarts(config.restarts, config.seed, config.parallel, |rng| {
                randomized_motif_search(dna, k, t, rng)
            })?
        }
        Algorithm::Gibbs => {
            best_of_seeded_restarts(config.restarts, config.seed, config.parallel, |rng| {
                gibbs_sampler(dna, k, t, config.iterations, rng)
            })?
        }
    };

    info!(
        score = outcome.score,
        consensus = %outcome.consensus,
        restart = outcome.restart,
        "motif search finished"
    );
    Ok(outcome)
}
