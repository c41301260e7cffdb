//! ICD-10 Annotation Viewer Library
//!
//! This library loads MDACE annotation files (ICD-10 codes over clinical
//! notes) and shows them in an interactive terminal viewer where each code
//! can be toggled to highlight its spans across every note.
//!
//! # Architecture
//!
//! - **Domain Layer**: `mdace` module - documents, notes, annotations and code groups
//! - **Loading Layer**: `loader` and `validation` - JSON decoding and offset checks
//! - **Presentation Layer**: `selection`, `render` and `tui` - selection state,
//!   pure highlight rendering and the ratatui front end
//!
//! # Example
//!
//! ```no_run
//! use icd10_viewer::{DocumentLoader, SelectionState, render_document};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let document = DocumentLoader::new("100001.json").load()?;
//!     let mut selection = SelectionState::new();
//!     selection.toggle("I61.8");
//!     for note in render_document(&document, &selection) {
//!         println!("{}: {} highlighted spans", note.note_id, note.highlighted_ranges().len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod json_view;
pub mod loader;
pub mod mdace;
pub mod render;
pub mod selection;
pub mod tui;
pub mod validation;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use error::{DocumentError, LoadError, SchemaViolation};
pub use loader::{DocumentLoader, parse_document};
pub use mdace::{Annotation, AnnotationGroup, AnnotationGroups, CodeSystem, Document, Note};
pub use render::{StyledNote, render_document, render_note};
pub use selection::SelectionState;

/// Load `path` and run the interactive viewer on it
///
/// The document is fully loaded and validated before the terminal is
/// switched to raw mode, so a bad file never shows a UI.
pub fn view(path: &Path, config: ViewerConfig) -> Result<()> {
    let document = DocumentLoader::new(path).load()?;
    let mut app = tui::App::new(path, document, config)?;
    tui::run(&mut app)
}
