//! Annotation grouping tests
mod common;

use common::*;
use icd10_viewer::mdace::{GroupOrder, Occurrence};
use icd10_viewer::{AnnotationGroups, CodeSystem, parse_document};
use std::collections::HashMap;

#[test]
fn test_single_annotation_group() {
    let document = parse_document(&iph_document().to_string()).unwrap();
    let groups = AnnotationGroups::from_document(&document);

    assert_eq!(groups.len(), 1);
    let group = groups.get("I61.8").unwrap();
    assert_eq!(group.count(), 1);
    assert_eq!(group.code_system, "ICD-10-CM");
    assert_eq!(group.system(), CodeSystem::Diagnosis);
}

// Each group's count equals the number of annotations with that code across all notes
#[test]
fn test_group_counts_match_annotation_counts() {
    let document = parse_document(&multi_note_document().to_string()).unwrap();
    let groups = AnnotationGroups::from_document(&document);

    let mut expected: HashMap<&str, usize> = HashMap::new();
    for note in &document.notes {
        for annotation in &note.annotations {
            *expected.entry(annotation.code.as_str()).or_default() += 1;
        }
    }

    assert_eq!(groups.len(), expected.len());
    for (code, count) in expected {
        assert_eq!(groups.get(code).unwrap().count(), count, "count for {code}");
    }
}

// Every occurrence in a group points at an annotation carrying the group's code
#[test]
fn test_group_membership_equals_code() {
    let document = parse_document(&multi_note_document().to_string()).unwrap();
    let groups = AnnotationGroups::from_document(&document);

    for group in groups.iter() {
        for (_, annotation) in group.annotations(&document) {
            assert_eq!(annotation.code, group.code);
        }
        assert_eq!(group.annotations(&document).count(), group.count());
    }
}

#[test]
fn test_occurrences_span_notes() {
    let document = parse_document(&multi_note_document().to_string()).unwrap();
    let groups = AnnotationGroups::from_document(&document);

    assert_eq!(
        groups.get("A41.9").unwrap().occurrences(),
        &[
            Occurrence { note_index: 0, annotation_index: 0 },
            Occurrence { note_index: 1, annotation_index: 2 },
        ]
    );
    assert_eq!(groups.get("0BH17EZ").unwrap().system(), CodeSystem::Procedure);
}

#[test]
fn test_group_order_is_deterministic() {
    let document = parse_document(&multi_note_document().to_string()).unwrap();
    let groups = AnnotationGroups::from_document(&document);

    let first_seen: Vec<&str> = groups.iter().map(|g| g.code.as_str()).collect();
    assert_eq!(first_seen, vec!["A41.9", "J18.9", "0BH17EZ"]);

    let by_code: Vec<&str> = groups
        .ordered(GroupOrder::Code)
        .into_iter()
        .map(|g| g.code.as_str())
        .collect();
    assert_eq!(by_code, vec!["0BH17EZ", "A41.9", "J18.9"]);
}
