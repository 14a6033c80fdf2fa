//! String primitives for locating a replication origin: pattern counting,
//! frequent k-mers, reverse complements, skew arrays and approximate
//! matching.
//!
//! The motif searches do not use these; they are the companion toolkit for
//! callers that scan a genome before looking for motifs in it.

use std::collections::BTreeMap;

use crate::error::{MotifError, Result};
use crate::types::*;

/// Every length-k window of `text` with its offset.
fn windows<'a>(text: &'a str, k: usize) -> impl Iterator<Item = (usize, &'a [u8])> + 'a {
    let bytes = text.as_bytes();
    let count = if k == 0 || k > bytes.len() {
        0
    } else {
        bytes.len() - k + 1
    };
    (0..count).map(move |i| (i, &bytes[i..i + k]))
}

/// Counts the occurrences of `pattern` in `text`, overlapping ones included.
///
/// An empty pattern occurs nowhere.
pub fn pattern_count(pattern: &str, text: &str) -> usize {
    windows(text, pattern.len())
        .filter(|(_, window)| *window == pattern.as_bytes())
        .count()
}

/// Returns every starting position of `pattern` in `genome`.
pub fn pattern_matching(pattern: &str, genome: &str) -> Vec<usize> {
    windows(genome, pattern.len())
        .filter(|(_, window)| *window == pattern.as_bytes())
        .map(|(i, _)| i)
        .collect()
}

/// Counts every k-mer of `text`.
pub fn frequency_map(text: &str, k: usize) -> BTreeMap<String, usize> {
    let mut freq = BTreeMap::new();
    for (_, window) in windows(text, k) {
        *freq
            .entry(String::from_utf8_lossy(window).into_owned())
            .or_insert(0) += 1;
    }
    freq
}

/// Returns the most frequent k-mers of `text` in lexicographic order.
pub fn frequent_words(text: &str, k: usize) -> Vec<String> {
    let freq = frequency_map(text, k);
    let max = freq.values().copied().max().unwrap_or(0);
    freq.into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(word, _)| word)
        .collect()
}

/// Generates the reverse complement of a DNA sequence.
///
/// # Arguments
/// * `pattern` - Input DNA sequence string
///
/// # Returns
/// * `Result<String>` - The reverse complement sequence where:
///   - A ↔ T
///   - C ↔ G
///
/// # Errors
/// * Returns `MotifError::InvalidSequence` if the input contains characters other than A, T, C, or G
pub fn reverse_complement(pattern: &str) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    chars
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &c)| -> Result<char> {
            Ok(NUCLEOTIDES[NUCLEOTIDES.len() - 1 - nucleotide_index(c, i)?])
        })
        .collect()
}

/// For each position `i` of the circular `genome`, counts `symbol` in the
/// half-genome window starting at `i`.
pub fn symbol_array(genome: &str, symbol: char) -> Vec<usize> {
    let n = genome.chars().count();
    let half = n / 2;
    let extended: Vec<char> = genome.chars().chain(genome.chars().take(half)).collect();

    (0..n)
        .map(|i| extended[i..i + half].iter().filter(|&&c| c == symbol).count())
        .collect()
}

/// Same result as [`symbol_array`], updating each window count from the
/// previous one instead of recounting.
pub fn faster_symbol_array(genome: &str, symbol: char) -> Vec<usize> {
    let n = genome.chars().count();
    if n == 0 {
        return Vec::new();
    }
    let half = n / 2;
    let extended: Vec<char> = genome.chars().chain(genome.chars().take(half)).collect();

    let mut array = Vec::with_capacity(n);
    array.push(extended[..half].iter().filter(|&&c| c == symbol).count());

    for i in 1..n {
        let mut current = array[i - 1];
        if extended[i + half - 1] == symbol {
            current += 1;
        }
        if extended[i - 1] == symbol {
            current -= 1;
        }
        array.push(current);
    }

    array
}

/// Computes the skew array of `genome`: entry `i` is the number of G minus
/// the number of C among the first `i` symbols.
///
/// # Errors
/// * `MotifError::InvalidSequence` - If `genome` contains a symbol outside {A, C, G, T}
pub fn skew_array(genome: &str) -> Result<Vec<i64>> {
    let mut skew = Vec::with_capacity(genome.len() + 1);
    skew.push(0);

    for (i, symbol) in genome.chars().enumerate() {
        let step = match nucleotide_index(symbol, i)? {
            1 => -1,
            2 => 1,
            _ => 0,
        };
        skew.push(skew[i] + step);
    }

    Ok(skew)
}

/// Returns every position where the skew array of `genome` is minimal.
pub fn minimum_skew(genome: &str) -> Result<Vec<usize>> {
    let skew = skew_array(genome)?;
    let minimum = skew.iter().copied().min().unwrap_or(0);
    Ok(skew
        .iter()
        .enumerate()
        .filter(|(_, value)| **value == minimum)
        .map(|(i, _)| i)
        .collect())
}

fn mismatches(p: &[u8], q: &[u8]) -> usize {
    p.iter().zip(q).filter(|(a, b)| a != b).count()
}

/// Computes the number of mismatched positions between two equal-length
/// strings.
///
/// # Errors
/// * `MotifError::InvalidParameter` - If the strings differ in length
pub fn hamming_distance(p: &str, q: &str) -> Result<usize> {
    if p.len() != q.len() {
        return Err(MotifError::invalid_parameter(
            "q",
            q,
            format!("length {} differs from {}", q.len(), p.len()),
        ));
    }
    Ok(mismatches(p.as_bytes(), q.as_bytes()))
}

/// Returns every starting position where `pattern` occurs in `text` with at
/// most `d` mismatches.
pub fn approximate_pattern_matching(pattern: &str, text: &str, d: usize) -> Vec<usize> {
    windows(text, pattern.len())
        .filter(|(_, window)| mismatches(window, pattern.as_bytes()) <= d)
        .map(|(i, _)| i)
        .collect()
}

/// Counts the occurrences of `pattern` in `text` with at most `d` mismatches.
pub fn approximate_pattern_count(text: &str, pattern: &str, d: usize) -> usize {
    approximate_pattern_matching(pattern, text, d).len()
}
