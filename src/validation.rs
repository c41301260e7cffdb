//! Validation helper functions for loaded documents
//!
//! This module contains the offset checks applied after JSON decoding and the
//! softer covered-text consistency check that only produces warnings.

use crate::error::SchemaViolation;
use crate::mdace::{Document, Note};

/// Check the offset invariant of every annotation in the document
///
/// # Arguments
/// * `document` - Decoded document
///
/// # Returns
/// The first violation found, in note order then annotation order
pub fn validate_document(document: &Document) -> Result<(), SchemaViolation> {
    document.notes.iter().try_for_each(validate_note)
}

/// Check `begin <= end <= length(text)` for each annotation of a note
///
/// Lengths are counted in characters.
pub fn validate_note(note: &Note) -> Result<(), SchemaViolation> {
    let text_len = note.char_len();
    for (index, annotation) in note.annotations.iter().enumerate() {
        if annotation.begin > annotation.end {
            return Err(SchemaViolation::InvertedSpan {
                note_id: note.note_id,
                index,
                code: annotation.code.clone(),
                begin: annotation.begin,
                end: annotation.end,
            });
        }
        if annotation.end > text_len {
            return Err(SchemaViolation::SpanOutOfBounds {
                note_id: note.note_id,
                index,
                code: annotation.code.clone(),
                end: annotation.end,
                text_len,
            });
        }
    }
    Ok(())
}

/// An annotation whose `covered_text` differs from the text at its offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveredTextMismatch {
    pub note_id: i64,
    pub index: usize,
    pub recorded: String,
    pub actual: String,
}

/// Compare each annotation's `covered_text` with the note text it points at
///
/// Assumes the note already passed `validate_note`; out-of-range spans are skipped.
pub fn covered_text_mismatches(note: &Note) -> Vec<CoveredTextMismatch> {
    note.annotations
        .iter()
        .enumerate()
        .filter_map(|(index, annotation)| {
            let actual = note.slice_chars(annotation.begin, annotation.end)?;
            (actual != annotation.covered_text).then(|| CoveredTextMismatch {
                note_id: note.note_id,
                index,
                recorded: annotation.covered_text.clone(),
                actual: actual.to_string(),
            })
        })
        .collect()
}
