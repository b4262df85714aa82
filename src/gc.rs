use crate::record::SequenceRecord;
use anyhow::{bail, Result};

/// Computes the GC-content of a record as a percentage.
///
/// Counting is case-insensitive, and every base in the sequence counts towards
/// the denominator, ambiguity codes included.
///
/// # Errors
///
/// Returns an error if the sequence is empty, since the percentage is
/// undefined in that case.
pub fn gc_content(record: &SequenceRecord) -> Result<f64> {
    if record.seq.is_empty() {
        bail!("empty sequence for record '{}'", record.id);
    }

    let gc = record
        .seq
        .iter()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();

    Ok(gc as f64 / record.seq.len() as f64 * 100.0)
}
