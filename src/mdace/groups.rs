use super::code_system::CodeSystem;
use super::document::{Annotation, Document, Note};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of one annotation inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub note_index: usize,
    pub annotation_index: usize,
}

/// All annotations sharing one ICD-10 code, across every note of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationGroup {
    pub code: String,
    /// Code system of the first occurrence
    pub code_system: String,
    /// Description of the first occurrence
    pub description: String,
    pub(crate) occurrences: Vec<Occurrence>,
}

impl AnnotationGroup {
    fn new(code: &str, first: &Annotation) -> Self {
        Self {
            code: code.to_string(),
            code_system: first.code_system.clone(),
            description: first.description.clone(),
            occurrences: Vec::new(),
        }
    }

    /// Number of annotations with this code
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    /// Occurrences in document order (note by note, annotation by annotation)
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn system(&self) -> CodeSystem {
        CodeSystem::classify(&self.code_system)
    }

    /// Resolve the occurrences against the document they were built from
    pub fn annotations<'a>(
        &'a self,
        document: &'a Document,
    ) -> impl Iterator<Item = (&'a Note, &'a Annotation)> + 'a {
        self.occurrences.iter().filter_map(move |occ| {
            let note = document.notes.get(occ.note_index)?;
            let annotation = note.annotations.get(occ.annotation_index)?;
            Some((note, annotation))
        })
    }
}

/// Order in which groups are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Lexicographic by code
    #[default]
    Code,
    /// Order in which each code first appears in the document
    FirstSeen,
}

/// Annotation groups of one document, keyed by code
#[derive(Debug, Clone, Default)]
pub struct AnnotationGroups {
    /// Groups in first-seen order
    groups: Vec<AnnotationGroup>,

    /// code → position in `groups`
    ///
    /// Kept in sync with `groups`; both are only written by `from_notes`.
    index: HashMap<String, usize>,
}

impl AnnotationGroups {
    pub fn from_document(document: &Document) -> Self {
        Self::from_notes(&document.notes)
    }

    /// Partition every annotation of every note by its code
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut groups: Vec<AnnotationGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (note_index, note) in notes.iter().enumerate() {
            for (annotation_index, annotation) in note.annotations.iter().enumerate() {
                let slot = *index.entry(annotation.code.clone()).or_insert_with(|| {
                    groups.push(AnnotationGroup::new(&annotation.code, annotation));
                    groups.len() - 1
                });
                groups[slot].occurrences.push(Occurrence {
                    note_index,
                    annotation_index,
                });
            }
        }

        Self { groups, index }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&AnnotationGroup> {
        self.index.get(code).map(|&i| &self.groups[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &AnnotationGroup> {
        self.groups.iter()
    }

    /// Groups listed in the requested order
    pub fn ordered(&self, order: GroupOrder) -> Vec<&AnnotationGroup> {
        let mut out: Vec<&AnnotationGroup> = self.groups.iter().collect();
        if order == GroupOrder::Code {
            out.sort_by(|a, b| a.code.cmp(&b.code));
        }
        out
    }
}
