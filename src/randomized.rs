use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;
use crate::profile::{profile_with_pseudocounts, score};
use crate::sampling::{motifs_from_profile, random_motifs};
use crate::types::*;

/// One run of randomized motif search over the first `t` sequences of `dna`.
///
/// Starts from one random k-mer per sequence and repeatedly replaces the
/// whole motif set by the most probable k-mers under its own pseudocount
/// profile, for as long as the score strictly decreases. Since the score is
/// a non-negative integer the loop always terminates.
///
/// A single run settles in a local optimum; see [`crate::restart`] for the
/// usual many-restarts driver.
pub fn randomized_motif_search<S: AsRef<str>, R: Rng + ?Sized>(
    dna: &[S],
    k: usize,
    t: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    let dna = select_sequences(dna, k, t)?;

    let mut best_motifs = random_motifs(dna, k, rng)?;
    let mut best_score = score(&best_motifs)?;
    let mut rounds = 0;

    loop {
        let profile = profile_with_pseudocounts(&best_motifs)?;
        let motifs = motifs_from_profile(&profile, dna)?;
        let motifs_score = score(&motifs)?;
        rounds += 1;
        trace!(round = rounds, score = motifs_score, "randomized search step");

        if motifs_score < best_score {
            best_motifs = motifs;
            best_score = motifs_score;
        } else {
            debug!(rounds, score = best_score, "randomized search converged");
            return Ok(best_motifs);
        }
    }
}
