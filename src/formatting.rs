//! Formatting helper functions for the viewer
//!
//! This module contains the text of labels, headers and summaries shown by
//! the TUI and the `view-json` command.

use crate::mdace::{AnnotationGroup, Document, Note};
use std::path::Path;

/// Truncate a description to `width` characters, appending "..." when cut
///
/// # Arguments
/// * `description` - Full code description
/// * `width` - Maximum number of characters kept
pub fn truncate_description(description: &str, width: usize) -> String {
    match description.char_indices().nth(width) {
        Some((byte, _)) => format!("{}...", &description[..byte]),
        None => description.to_string(),
    }
}

/// Checkbox label for an annotation group
///
/// Format: `[x] I61.8 (ICD-10-CM): Other nontraumatic intracerebral... (3)`
pub fn format_group_label(group: &AnnotationGroup, selected: bool, width: usize) -> String {
    format!(
        "[{}] {} ({}): {} ({})",
        if selected { 'x' } else { ' ' },
        group.code,
        group.code_system,
        truncate_description(&group.description, width),
        group.count()
    )
}

/// Header line shown above each note body
pub fn format_note_header(note: &Note) -> String {
    format!(
        "Note {} - {}: {}",
        note.note_id, note.category, note.description
    )
}

/// One-line summary of the loaded file
pub fn format_document_info(path: &Path, document: &Document, unique_codes: usize) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!(
        "File: {}  |  HADM ID: {}  |  Notes: {}  |  Unique Codes: {}",
        name,
        document.hadm_id,
        document.notes.len(),
        unique_codes
    )
}

/// Where a group's annotations appear, e.g. `note 17: "IPH", note 18: "hemorrhage"`
///
/// Fits the list into `width` characters. Occurrences that do not fit are
/// replaced by a `... (+N more)` tail.
pub fn format_occurrences(group: &AnnotationGroup, document: &Document, width: usize) -> String {
    let parts: Vec<String> = group
        .annotations(document)
        .map(|(note, annotation)| format!("note {}: {:?}", note.note_id, annotation.covered_text))
        .collect();
    if parts.is_empty() {
        return "no occurrences".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for (i, part) in parts.iter().enumerate() {
        let sep = if i == 0 { 0 } else { 2 };
        let remaining = parts.len() - i - 1;
        let tail = if remaining == 0 {
            0
        } else {
            more_suffix(remaining).chars().count() + 2
        };
        let len = part.chars().count();
        if used + sep + len + tail > width {
            let more = more_suffix(parts.len() - i);
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&more);
            return out;
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(part);
        used += sep + len;
    }
    out
}

fn more_suffix(hidden: usize) -> String {
    format!("... (+{} more)", hidden)
}

/// Human-readable file size in 1024 steps, two decimals
///
/// # Examples
/// ```
/// # use icd10_viewer::formatting::format_size;
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}
