use crate::error::{MotifError, Result};
use crate::types::validate_sequence;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Reads sequences from a FASTA format file and converts them into a Polars DataFrame.
///
/// # Arguments
/// * `filename` - Path to the FASTA file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with two columns:
///   - "label": The sequence identifiers (without '>' prefix)
///   - "sequence": The corresponding DNA sequences in uppercase
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if no sequences are found
/// * Returns `MotifError::DataError` if DataFrame creation fails
/// * Returns `MotifError::Io` for file reading issues
pub fn read_fasta(filename: &str) -> Result<DataFrame> {
    let mut records: Vec<(String, String)> = Vec::new();
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    // A bare ">" line is a header with an empty label, so presence is
    // tracked separately from the label text.
    let mut current_header: Option<String> = None;
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            if let Some(label) = current_header.take() {
                records.push((label, current_sequence.to_uppercase()));
                current_sequence.clear();
            }
            current_header = Some(header.to_string());
        } else if !line.is_empty() {
            if current_header.is_none() {
                return Err(MotifError::InvalidFileFormat(
                    "Sequence data before the first header".into(),
                ));
            }
            current_sequence.push_str(line);
        }
    }

    if let Some(label) = current_header {
        records.push((label, current_sequence.to_uppercase()));
    }

    if records.is_empty() {
        return Err(MotifError::InvalidFileFormat("No sequences found".into()));
    }

    let (labels, sequences): (Vec<String>, Vec<String>) = records.into_iter().unzip();
    let df = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|_| MotifError::DataError("Failed to create DataFrame".into()))?;

    Ok(df)
}

/// Extracts the "sequence" column of a DataFrame produced by [`read_fasta`].
///
/// # Errors
/// * Returns `MotifError::DataError` if the column is missing or not a string column
/// * Returns `MotifError::InvalidSequence` if a sequence is null or contains symbols other than A, C, G, T
pub fn sequences(df: &DataFrame) -> Result<Vec<String>> {
    let column = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .map_err(|e| MotifError::DataError(e.to_string()))?;

    column
        .into_iter()
        .enumerate()
        .map(|(idx, seq)| -> Result<String> {
            let seq = seq.ok_or_else(|| {
                MotifError::invalid_sequence(0, format!("sequence {} is missing", idx))
            })?;
            validate_sequence(seq)?;
            Ok(seq.to_string())
        })
        .collect()
}
