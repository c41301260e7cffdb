//! MDACE document model and derived groupings
//!
//! This module contains the in-memory form of an annotated admission.
//! It is split into submodules:
//! - `document`: Document, Note and Annotation as read from JSON
//! - `code_system`: classification of the `code_system` tag
//! - `groups`: annotations grouped by ICD-10 code across all notes

mod code_system;
mod document;
mod groups;

// Re-export all public types
pub use code_system::CodeSystem;
pub use document::{Annotation, Document, Note};
pub use groups::{AnnotationGroup, AnnotationGroups, GroupOrder, Occurrence};
