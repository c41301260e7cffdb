//! Common test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

/// Annotation object as it appears in an MDACE file
pub fn annotation(begin: usize, end: usize, code: &str, system: &str, covered: &str) -> Value {
    json!({
        "begin": begin,
        "end": end,
        "code": code,
        "code_system": system,
        "description": format!("Description of {}", code),
        "type": "Human",
        "covered_text": covered,
    })
}

/// Note object with the given body and annotations
pub fn note(note_id: i64, text: &str, annotations: Vec<Value>) -> Value {
    json!({
        "note_id": note_id,
        "category": "Discharge summary",
        "description": "Report",
        "text": text,
        "annotations": annotations,
    })
}

pub fn document(hadm_id: i64, notes: Vec<Value>) -> Value {
    json!({ "hadm_id": hadm_id, "notes": notes })
}

/// The single-note example: "Patient has IPH noted." with I61.8 on "IPH"
pub fn iph_document() -> Value {
    document(
        100001,
        vec![note(
            1,
            "Patient has IPH noted.",
            vec![annotation(12, 15, "I61.8", "ICD-10-CM", "IPH")],
        )],
    )
}

/// Two notes sharing codes, with a procedure code and overlapping spans
pub fn multi_note_document() -> Value {
    document(
        100002,
        vec![
            note(
                10,
                "Sepsis due to pneumonia.\nStarted antibiotics.",
                vec![
                    annotation(0, 6, "A41.9", "ICD-10-CM", "Sepsis"),
                    annotation(14, 23, "J18.9", "ICD-10-CM", "pneumonia"),
                ],
            ),
            note(
                11,
                "Intubated for pneumonia; sepsis resolving.",
                vec![
                    annotation(0, 9, "0BH17EZ", "ICD-10-PCS", "Intubated"),
                    annotation(14, 23, "J18.9", "ICD-10-CM", "pneumonia"),
                    annotation(25, 31, "A41.9", "ICD-10-CM", "sepsis"),
                ],
            ),
        ],
    )
}

/// Write `content` to a temporary `.json` file
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_temp_json(value: &Value) -> NamedTempFile {
    write_temp(&serde_json::to_string_pretty(value).unwrap())
}
