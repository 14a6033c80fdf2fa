use ndarray::Array2;
use phf::phf_map;

use crate::error::{MotifError, Result};

/// The closed DNA alphabet, in the scan order used for consensus tie-breaking
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Row index of each nucleotide in count and profile matrices
pub static NUCLEOTIDE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

/// Represents a count matrix of a motif set
/// Stored as a 4 x k array with rows A, C, G, T
pub type CountMatrix = Array2<usize>;

/// Represents a profile matrix of a motif set
/// Stored as a 4 x k array with rows A, C, G, T, each column summing to 1
pub type ProfileMatrix = Array2<f64>;

/// An ordered set of equal-length k-mers, one per sequence
pub type MotifSet = Vec<String>;

/// Returns the matrix row of `symbol`, rejecting anything outside {A, C, G, T}.
pub fn nucleotide_index(symbol: char, position: usize) -> Result<usize> {
    NUCLEOTIDE_INDEX.get(&symbol).copied().ok_or_else(|| {
        MotifError::invalid_sequence(position, format!("unexpected symbol '{}'", symbol))
    })
}

/// Checks that `sequence` only contains A, C, G or T.
pub fn validate_sequence(sequence: &str) -> Result<()> {
    for (position, symbol) in sequence.chars().enumerate() {
        nucleotide_index(symbol, position)?;
    }
    Ok(())
}

/// Returns the first `t` sequences of `dna` after checking that a motif of
/// length `k` can be drawn from each of them.
///
/// # Errors
/// * `MotifError::InvalidParameter` - If `t` is 0 or exceeds `dna.len()`, or `k` is 0 or longer than a sequence
/// * `MotifError::InvalidSequence` - If a sequence contains a symbol outside {A, C, G, T}
pub fn select_sequences<S: AsRef<str>>(dna: &[S], k: usize, t: usize) -> Result<&[S]> {
    if t == 0 || t > dna.len() {
        return Err(MotifError::invalid_parameter(
            "t",
            t,
            format!("must be between 1 and the number of sequences {}", dna.len()),
        ));
    }
    if k == 0 {
        return Err(MotifError::invalid_parameter("k", k, "must be positive"));
    }

    let selected = &dna[..t];
    for (index, sequence) in selected.iter().enumerate() {
        let sequence = sequence.as_ref();
        if sequence.len() < k {
            return Err(MotifError::invalid_parameter(
                "k",
                k,
                format!("sequence {} has only {} symbols", index, sequence.len()),
            ));
        }
        validate_sequence(sequence)?;
    }

    Ok(selected)
}
