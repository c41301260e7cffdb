//! Highlight rendering
//!
//! `(notes, selection) -> styled notes`. Nothing here touches the terminal;
//! the TUI maps [`Segment`]s to ratatui spans.

use crate::mdace::{CodeSystem, Document, Note};
use crate::selection::SelectionState;

/// Which code won a highlighted segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub code: String,
    pub system: CodeSystem,
}

/// A maximal run of note text sharing one highlight state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlight: Option<Highlight>,
}

/// A highlighted character range, in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedRange {
    pub begin: usize,
    pub end: usize,
    pub code: String,
}

/// A note body split into plain and highlighted segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledNote {
    pub note_id: i64,
    pub segments: Vec<Segment>,
}

impl StyledNote {
    /// The body with all markup dropped
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_plain(&self) -> bool {
        self.segments.iter().all(|s| s.highlight.is_none())
    }

    pub fn highlighted_ranges(&self) -> Vec<HighlightedRange> {
        let mut ranges = Vec::new();
        let mut offset = 0;
        for segment in &self.segments {
            let len = segment.text.chars().count();
            if let Some(highlight) = &segment.highlight {
                ranges.push(HighlightedRange {
                    begin: offset,
                    end: offset + len,
                    code: highlight.code.clone(),
                });
            }
            offset += len;
        }
        ranges
    }
}

pub fn render_document(document: &Document, selection: &SelectionState) -> Vec<StyledNote> {
    render_notes(&document.notes, selection)
}

pub fn render_notes(notes: &[Note], selection: &SelectionState) -> Vec<StyledNote> {
    notes.iter().map(|note| render_note(note, selection)).collect()
}

/// Mark the spans of selected codes in one note
///
/// Annotations are applied in list order, so where two selected spans
/// overlap the later annotation owns the overlapping characters.
pub fn render_note(note: &Note, selection: &SelectionState) -> StyledNote {
    let text = note.text.as_str();
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let mut owner: Vec<Option<usize>> = vec![None; char_len];
    let mut any = false;
    for (i, annotation) in note.annotations.iter().enumerate() {
        if annotation.is_empty() || !selection.is_selected(&annotation.code) {
            continue;
        }
        let end = annotation.end.min(char_len);
        let begin = annotation.begin.min(end);
        owner[begin..end].iter_mut().for_each(|slot| *slot = Some(i));
        any = true;
    }

    if !any {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment {
                text: text.to_string(),
                highlight: None,
            }]
        };
        return StyledNote {
            note_id: note.note_id,
            segments,
        };
    }

    let segment = |start: usize, stop: usize, who: Option<usize>| Segment {
        text: text[bounds[start]..bounds[stop]].to_string(),
        highlight: who.map(|i| {
            let annotation = &note.annotations[i];
            Highlight {
                code: annotation.code.clone(),
                system: CodeSystem::classify(&annotation.code_system),
            }
        }),
    };

    let mut segments = Vec::new();
    let mut start = 0;
    for idx in 1..char_len {
        if owner[idx] != owner[start] {
            segments.push(segment(start, idx, owner[start]));
            start = idx;
        }
    }
    if char_len > 0 {
        segments.push(segment(start, char_len, owner[start]));
    }

    StyledNote {
        note_id: note.note_id,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdace::Annotation;

    fn ann(begin: usize, end: usize, code: &str) -> Annotation {
        Annotation {
            begin,
            end,
            code: code.to_string(),
            code_system: "ICD-10-CM".to_string(),
            description: String::new(),
            kind: "Human".to_string(),
            covered_text: String::new(),
        }
    }

    #[test]
    fn test_adjacent_spans_of_distinct_codes_stay_separate() {
        let note = Note {
            note_id: 1,
            category: String::new(),
            description: String::new(),
            text: "abcdef".to_string(),
            annotations: vec![ann(0, 3, "A"), ann(3, 6, "B")],
        };
        let mut selection = SelectionState::new();
        selection.toggle("A");
        selection.toggle("B");

        let styled = render_note(&note, &selection);
        let texts: Vec<&str> = styled.segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["abc", "def"]);
    }

    #[test]
    fn test_zero_width_span_marks_nothing() {
        let note = Note {
            note_id: 1,
            category: String::new(),
            description: String::new(),
            text: "abc".to_string(),
            annotations: vec![ann(1, 1, "A")],
        };
        let mut selection = SelectionState::new();
        selection.toggle("A");

        let styled = render_note(&note, &selection);
        assert!(styled.is_plain());
        assert_eq!(styled.plain_text(), "abc");
    }

    #[test]
    fn test_zero_width_span_keeps_earlier_owner() {
        let note = Note {
            note_id: 1,
            category: String::new(),
            description: String::new(),
            text: "abc".to_string(),
            annotations: vec![ann(0, 3, "A"), ann(1, 1, "B")],
        };
        let mut selection = SelectionState::new();
        selection.toggle("A");
        selection.toggle("B");

        let styled = render_note(&note, &selection);
        assert_eq!(styled.segments.len(), 1);
        assert_eq!(styled.segments[0].highlight.as_ref().unwrap().code, "A");
    }

    #[test]
    fn test_empty_body_has_no_segments() {
        let note = Note {
            note_id: 1,
            category: String::new(),
            description: String::new(),
            text: String::new(),
            annotations: Vec::new(),
        };
        assert!(render_note(&note, &SelectionState::new()).segments.is_empty());
    }
}
