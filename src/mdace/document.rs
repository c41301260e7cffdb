use serde::{Deserialize, Serialize};

/// One coded span inside a note.
///
/// `begin` and `end` are character offsets (Unicode scalar values) into the
/// owning note's `text`, half-open: `[begin, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub begin: usize,
    pub end: usize,
    /// ICD-10 code, e.g. "I61.8"
    pub code: String,
    /// "ICD-10-CM" or "ICD-10-PCS" in practice; not enforced
    pub code_system: String,
    pub description: String,
    /// Annotation type as recorded in the dataset
    #[serde(rename = "type")]
    pub kind: String,
    /// Expected to equal `text[begin..end]` of the owning note
    pub covered_text: String,
}

impl Annotation {
    /// Number of characters covered by the annotation
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single clinical note and its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: i64,
    pub category: String,
    pub description: String,
    pub text: String,
    pub annotations: Vec<Annotation>,
}

impl Note {
    /// Length of the note body in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Slice of the body covered by `[begin, end)` in character offsets.
    ///
    /// Returns `None` when the range is inverted or runs past the end of the text.
    pub fn slice_chars(&self, begin: usize, end: usize) -> Option<&str> {
        if begin > end {
            return None;
        }
        let start = byte_offset(&self.text, begin)?;
        let stop = byte_offset(&self.text, end)?;
        Some(&self.text[start..stop])
    }
}

/// An annotated hospital admission: the top-level JSON object of an MDACE file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub hadm_id: i64,
    pub notes: Vec<Note>,
}

impl Document {
    /// Total number of annotations across all notes
    pub fn annotation_count(&self) -> usize {
        self.notes.iter().map(|n| n.annotations.len()).sum()
    }
}

/// Byte offset of the `char_idx`-th character; `char_idx == char count` maps to `text.len()`.
pub(crate) fn byte_offset(text: &str, char_idx: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_idx)
}
