//! Probability of k-mers under a profile, and the weighted sampling used by
//! the randomized searches.
//!
//! None of these functions own a random source. Callers pass either an
//! explicit uniform draw or a generator, so that a fixed seed always produces
//! the same motifs.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::trace;

use crate::error::{MotifError, Result};
use crate::types::*;

fn check_profile(profile: &ProfileMatrix) -> Result<usize> {
    if profile.nrows() != NUCLEOTIDES.len() {
        return Err(MotifError::invalid_profile(format!(
            "expected {} rows, found {}",
            NUCLEOTIDES.len(),
            profile.nrows()
        )));
    }
    if profile.ncols() == 0 {
        return Err(MotifError::invalid_profile("profile has no columns"));
    }
    Ok(profile.ncols())
}

fn check_window(text: &str, k: usize) -> Result<()> {
    if k == 0 || k > text.len() {
        return Err(MotifError::invalid_parameter(
            "k",
            k,
            format!("must be between 1 and the sequence length {}", text.len()),
        ));
    }
    validate_sequence(text)
}

/// Computes the probability of `text` under `profile`: the product over
/// positions `i` of `profile[text[i]][i]`.
///
/// # Errors
/// * `MotifError::InvalidProfile` - If the profile is not 4 rows, or its width differs from `text`
/// * `MotifError::InvalidSequence` - If `text` contains a symbol outside {A, C, G, T}
pub fn probability(text: &str, profile: &ProfileMatrix) -> Result<f64> {
    let width = check_profile(profile)?;
    if text.len() != width {
        return Err(MotifError::invalid_profile(format!(
            "profile width {} does not match k-mer length {}",
            width,
            text.len()
        )));
    }

    let mut p = 1.0;
    for (i, symbol) in text.chars().enumerate() {
        p *= profile[[nucleotide_index(symbol, i)?, i]];
    }
    Ok(p)
}

/// Probability of every length-k window of `text`, keyed by start offset.
fn window_probabilities(text: &str, k: usize, profile: &ProfileMatrix) -> Result<Vec<f64>> {
    check_window(text, k)?;
    (0..=text.len() - k)
        .map(|i| probability(&text[i..i + k], profile))
        .collect()
}

/// Finds the most probable k-mer of `text` under `profile`.
///
/// Every window is scored with [`probability`]; only a strictly higher score
/// replaces the current best, so the leftmost window wins ties. With a
/// profile containing zeros every window may score 0, in which case the
/// first window is returned.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use motif_search_rs::sampling::most_probable_kmer;
///
/// let uniform = Array2::from_elem((4, 3), 0.25);
/// assert_eq!(most_probable_kmer("GATTACA", 3, &uniform).unwrap(), "GAT");
/// ```
pub fn most_probable_kmer(text: &str, k: usize, profile: &ProfileMatrix) -> Result<String> {
    let probabilities = window_probabilities(text, k, profile)?;

    let mut best = 0;
    for (i, &p) in probabilities.iter().enumerate() {
        if p > probabilities[best] {
            best = i;
        }
    }

    Ok(text[best..best + k].to_string())
}

/// Divides every weight by the sum of all weights.
///
/// # Errors
/// * `MotifError::DegenerateWeights` - If a weight is negative or not finite, or the total is zero
pub fn normalize<K: Ord + Clone>(weights: &BTreeMap<K, f64>) -> Result<BTreeMap<K, f64>> {
    if let Some(&w) = weights.values().find(|w| !(w.is_finite() && **w >= 0.0)) {
        return Err(MotifError::DegenerateWeights(w));
    }

    let total: f64 = weights.values().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(MotifError::DegenerateWeights(total));
    }

    Ok(weights
        .iter()
        .map(|(key, &w)| (key.clone(), w / total))
        .collect())
}

/// Picks a key from a normalized distribution using one uniform draw `r`.
///
/// Keys are walked in ascending order while accumulating their weights; the
/// first key whose running total exceeds `r` is returned. If rounding keeps
/// the total at or below `r`, the last key with positive weight is returned.
///
/// # Errors
/// * `MotifError::InvalidParameter` - If `r` is outside [0, 1)
/// * `MotifError::DegenerateWeights` - If no key has positive weight
pub fn weighted_draw<K: Ord + Clone>(weights: &BTreeMap<K, f64>, r: f64) -> Result<K> {
    if !(0.0..1.0).contains(&r) {
        return Err(MotifError::invalid_parameter(
            "r",
            r,
            "uniform draw must lie in [0, 1)",
        ));
    }

    let mut total = 0.0;
    let mut last = None;
    for (key, &w) in weights {
        if w <= 0.0 {
            continue;
        }
        total += w;
        if total > r {
            return Ok(key.clone());
        }
        last = Some(key);
    }

    last.cloned().ok_or(MotifError::DegenerateWeights(total))
}

/// Draws a k-mer of `text` with probability proportional to its probability
/// under `profile`.
///
/// Window offsets are the keys of the distribution, so a k-mer occurring
/// several times in `text` carries the mass of all its occurrences. Exactly
/// one `f64` is taken from `rng`.
pub fn profile_randomly_generated_kmer<R: Rng + ?Sized>(
    text: &str,
    k: usize,
    profile: &ProfileMatrix,
    rng: &mut R,
) -> Result<String> {
    let weights: BTreeMap<usize, f64> = window_probabilities(text, k, profile)?
        .into_iter()
        .enumerate()
        .collect();
    let distribution = normalize(&weights)?;
    let offset = weighted_draw(&distribution, rng.gen::<f64>())?;
    trace!(offset, "sampled window");

    Ok(text[offset..offset + k].to_string())
}

/// Takes the most probable k-mer of every sequence in `dna` under `profile`.
pub fn motifs_from_profile<S: AsRef<str>>(profile: &ProfileMatrix, dna: &[S]) -> Result<MotifSet> {
    let k = check_profile(profile)?;
    dna.iter()
        .map(|text| most_probable_kmer(text.as_ref(), k, profile))
        .collect()
}

/// Picks one uniformly random length-k window from every sequence in `dna`.
///
/// One `gen_range` draw is taken from `rng` per sequence, in order.
pub fn random_motifs<S: AsRef<str>, R: Rng + ?Sized>(
    dna: &[S],
    k: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    dna.iter()
        .map(|text| {
            let text = text.as_ref();
            check_window(text, k)?;
            let start = rng.gen_range(0..=text.len() - k);
            Ok(text[start..start + k].to_string())
        })
        .collect()
}
