use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;
use crate::profile::{profile_with_pseudocounts, score};
use crate::sampling::{profile_randomly_generated_kmer, random_motifs};
use crate::types::*;

/// One run of Gibbs sampling over the first `t` sequences of `dna`, for
/// `n` iterations.
///
/// Each iteration picks a sequence `i` uniformly, builds a pseudocount
/// profile from the other `t - 1` motifs and resamples motif `i` from the
/// windows of sequence `i` weighted by their probability under that profile.
/// The working set always moves on from the resampled motifs; the best set
/// seen so far is what gets returned.
///
/// Per iteration `rng` is asked for one index and one uniform `f64`, after
/// the initial one-draw-per-sequence random start.
///
/// With `t == 1` the profile of the remaining motifs is uniform, so the
/// single motif is resampled uniformly and the score stays 0.
pub fn gibbs_sampler<S: AsRef<str>, R: Rng + ?Sized>(
    dna: &[S],
    k: usize,
    t: usize,
    n: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    let dna = select_sequences(dna, k, t)?;

    let mut motifs = random_motifs(dna, k, rng)?;
    let mut best_motifs = motifs.clone();
    let mut best_score = score(&best_motifs)?;

    for iteration in 0..n {
        let i = rng.gen_range(0..t);
        let held_out = motifs.remove(i);

        let profile = if motifs.is_empty() {
            uniform_profile(k)
        } else {
            profile_with_pseudocounts(&motifs)?
        };
        let replacement = profile_randomly_generated_kmer(dna[i].as_ref(), k, &profile, rng)?;
        trace!(iteration, index = i, %held_out, %replacement, "gibbs step");
        motifs.insert(i, replacement);

        let motifs_score = score(&motifs)?;
        if motifs_score < best_score {
            debug!(iteration, score = motifs_score, "gibbs sampler improved");
            best_motifs = motifs.clone();
            best_score = motifs_score;
        }
    }

    Ok(best_motifs)
}

/// Pseudocount profile of an empty motif set: every cell is 1/4.
fn uniform_profile(k: usize) -> ProfileMatrix {
    ProfileMatrix::from_elem((NUCLEOTIDES.len(), k), 1.0 / NUCLEOTIDES.len() as f64)
}
