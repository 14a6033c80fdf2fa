use tracing::debug;

use crate::error::Result;
use crate::profile::{profile_matrix, score, Pseudocounts};
use crate::sampling::most_probable_kmer;
use crate::types::*;

/// Greedy motif search over the first `t` sequences of `dna`, building every
/// intermediate profile with pseudocounts.
///
/// For each k-mer of the first sequence, a candidate motif set is grown one
/// sequence at a time: the motif picked for sequence `j` is its most probable
/// k-mer under the profile of the motifs already picked for sequences
/// `0..j`. The candidate with the lowest score is returned; on equal scores
/// the earliest candidate is kept.
///
/// The search is deterministic and not guaranteed to find the optimal motif
/// set.
///
/// # Example
/// ```
/// use motif_search_rs::greedy::greedy_motif_search;
///
/// let dna = ["GGCGTTCAGGCA", "AAGAATCAGTCA", "CAAGGAGTTCGC", "CACGTCAATCAC", "CAATAATATTCG"];
/// let motifs = greedy_motif_search(&dna, 3, 5).unwrap();
/// assert_eq!(motifs, ["TTC", "ATC", "TTC", "ATC", "TTC"]);
/// ```
pub fn greedy_motif_search<S: AsRef<str>>(dna: &[S], k: usize, t: usize) -> Result<MotifSet> {
    greedy_motif_search_with(dna, k, t, Pseudocounts::Laplace)
}

/// Greedy motif search with an explicit choice of profile smoothing.
///
/// `Pseudocounts::None` reproduces the unsmoothed baseline, where a single
/// unseen symbol zeroes a window's probability and the leftmost window tends
/// to win by default.
pub fn greedy_motif_search_with<S: AsRef<str>>(
    dna: &[S],
    k: usize,
    t: usize,
    pseudocounts: Pseudocounts,
) -> Result<MotifSet> {
    let dna = select_sequences(dna, k, t)?;

    let mut best_motifs: MotifSet = dna.iter().map(|s| s.as_ref()[..k].to_string()).collect();
    let mut best_score = score(&best_motifs)?;

    let first = dna[0].as_ref();
    for i in 0..=first.len() - k {
        let mut motifs: MotifSet = Vec::with_capacity(t);
        motifs.push(first[i..i + k].to_string());

        for sequence in &dna[1..] {
            let profile = profile_matrix(&motifs, pseudocounts)?;
            motifs.push(most_probable_kmer(sequence.as_ref(), k, &profile)?);
        }

        let candidate_score = score(&motifs)?;
        if candidate_score < best_score {
            debug!(offset = i, score = candidate_score, "greedy search improved");
            best_motifs = motifs;
            best_score = candidate_score;
        }
    }

    Ok(best_motifs)
}
