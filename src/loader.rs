use crate::error::{DocumentError, LoadError};
use crate::mdace::Document;
use crate::validation;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Decode and validate an MDACE document from a JSON string
pub fn parse_document(content: &str) -> Result<Document, DocumentError> {
    let document: Document = serde_json::from_str(content)?;
    validation::validate_document(&document)?;
    Ok(document)
}

/// Reads an annotation file from disk
pub struct DocumentLoader {
    file_path: PathBuf,
}

impl DocumentLoader {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read the file as UTF-8 after checking it exists and is a regular file
    pub fn read_to_string(&self) -> Result<String, LoadError> {
        let path = &self.file_path;
        if !path.exists() {
            return Err(LoadError::NotFound { path: path.clone() });
        }
        if !path.is_file() {
            return Err(LoadError::NotAFile { path: path.clone() });
        }
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })
    }

    /// Load, decode and validate the document
    pub fn load(&self) -> Result<Document, LoadError> {
        info!("Loading annotations from {}", self.file_path.display());
        let content = self.read_to_string()?;
        let document = parse_document(&content)
            .map_err(|err| LoadError::from_document_error(self.file_path.clone(), err))?;

        for note in &document.notes {
            for mismatch in validation::covered_text_mismatches(note) {
                warn!(
                    "{}: note {} annotation {} covered_text {:?} differs from text {:?}",
                    self.file_path.display(),
                    mismatch.note_id,
                    mismatch.index,
                    mismatch.recorded,
                    mismatch.actual
                );
            }
        }

        info!(
            "Loaded hadm_id {} with {} notes and {} annotations",
            document.hadm_id,
            document.notes.len(),
            document.annotation_count()
        );
        Ok(document)
    }
}
