//! Count, profile, consensus and score statistics of a motif set.
//!
//! Every search in this crate builds its profiles through the pseudocount
//! variants. The plain [`count`] and [`profile`] are kept as a baseline: they
//! can produce zero probabilities, which makes most-probable k-mer selection
//! ambiguous and weighted sampling undefined, so they must not be used inside
//! a search loop.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{MotifError, Result};
use crate::types::*;

/// Laplace pseudocount added to every cell of a smoothed count matrix
pub const PSEUDOCOUNT: usize = 1;

/// Selects how a count matrix is seeded before counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pseudocounts {
    /// Every cell starts at zero. Zero-probability cells are possible.
    None,
    /// Every cell starts at one.
    #[default]
    Laplace,
}

impl Pseudocounts {
    fn seed(self) -> usize {
        match self {
            Pseudocounts::None => 0,
            Pseudocounts::Laplace => PSEUDOCOUNT,
        }
    }
}

/// Validates a motif set and returns the shared motif length k.
///
/// # Errors
/// * `MotifError::EmptyMotifSet` - If `motifs` has no elements
/// * `MotifError::InvalidParameter` - If the motifs are empty strings
/// * `MotifError::UnequalMotifLengths` - If any motif differs in length from the first
/// * `MotifError::InvalidSequence` - If a motif contains a symbol outside {A, C, G, T}
pub fn validate_motifs<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let first = motifs.first().ok_or(MotifError::EmptyMotifSet)?;
    let k = first.as_ref().len();
    if k == 0 {
        return Err(MotifError::invalid_parameter(
            "k",
            k,
            "motifs must not be empty strings",
        ));
    }

    for (index, motif) in motifs.iter().enumerate() {
        let motif = motif.as_ref();
        if motif.len() != k {
            return Err(MotifError::UnequalMotifLengths {
                index,
                expected: k,
                found: motif.len(),
            });
        }
        validate_sequence(motif)?;
    }

    Ok(k)
}

/// Builds the count matrix of `motifs` with the requested seeding.
///
/// Column `j` of row `s` holds the number of motifs carrying symbol `s` at
/// position `j`, plus the seed value.
pub fn count_matrix<S: AsRef<str>>(
    motifs: &[S],
    pseudocounts: Pseudocounts,
) -> Result<CountMatrix> {
    let k = validate_motifs(motifs)?;
    let mut counts = Array2::from_elem((NUCLEOTIDES.len(), k), pseudocounts.seed());

    for motif in motifs {
        for (j, symbol) in motif.as_ref().chars().enumerate() {
            counts[[nucleotide_index(symbol, j)?, j]] += 1;
        }
    }

    Ok(counts)
}

/// Builds the profile matrix of `motifs` with the requested seeding.
///
/// Each column is divided by its total, which is `t` without pseudocounts
/// and `t + 4` with them.
pub fn profile_matrix<S: AsRef<str>>(
    motifs: &[S],
    pseudocounts: Pseudocounts,
) -> Result<ProfileMatrix> {
    let counts = count_matrix(motifs, pseudocounts)?;
    let total = (motifs.len() + NUCLEOTIDES.len() * pseudocounts.seed()) as f64;
    Ok(counts.mapv(|c| c as f64 / total))
}

/// Count matrix of `motifs` without pseudocounts.
///
/// Baseline only; see the module documentation.
pub fn count<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    count_matrix(motifs, Pseudocounts::None)
}

/// Count matrix of `motifs` with every cell seeded to one.
pub fn count_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    count_matrix(motifs, Pseudocounts::Laplace)
}

/// Profile matrix of `motifs` without pseudocounts (columns divided by `t`).
///
/// Baseline only; see the module documentation.
pub fn profile<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    profile_matrix(motifs, Pseudocounts::None)
}

/// Profile matrix of `motifs` with pseudocounts (columns divided by `t + 4`).
///
/// Every cell of the result is strictly positive.
pub fn profile_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    profile_matrix(motifs, Pseudocounts::Laplace)
}

/// Index of the most frequent symbol in each column; the first maximum in
/// A, C, G, T order wins.
fn consensus_rows(counts: &CountMatrix) -> Vec<usize> {
    counts
        .axis_iter(Axis(1))
        .map(|column| {
            column
                .iter()
                .enumerate()
                .fold((0, 0), |(best, max), (row, &c)| {
                    if c > max {
                        (row, c)
                    } else {
                        (best, max)
                    }
                })
                .0
        })
        .collect()
}

/// Computes the consensus string of `motifs`.
///
/// Position `j` is the symbol with the highest count in column `j`; ties are
/// broken in A, C, G, T order.
///
/// # Example
/// ```
/// use motif_search_rs::profile::consensus;
///
/// assert_eq!(consensus(&["ACGT", "ACCT", "TCGT"]).unwrap(), "ACGT");
/// ```
pub fn consensus<S: AsRef<str>>(motifs: &[S]) -> Result<String> {
    let counts = count(motifs)?;
    Ok(consensus_rows(&counts)
        .into_iter()
        .map(|row| NUCLEOTIDES[row])
        .collect())
}

/// Computes the score of `motifs`: the number of symbols, summed over all
/// columns, that disagree with the consensus symbol of their column.
///
/// A score of 0 means every motif is identical. Lower is better.
pub fn score<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let counts = count(motifs)?;
    let t = motifs.len();
    Ok(consensus_rows(&counts)
        .into_iter()
        .enumerate()
        .map(|(j, row)| t - counts[[row, j]])
        .sum())
}
