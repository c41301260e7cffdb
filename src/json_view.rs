//! `view-json`: pretty-print any JSON file
//!
//! Prints a short file header followed by the document re-indented. Key order
//! is preserved as written in the file.

use crate::error::LoadError;
use crate::formatting::format_size;
use crate::loader::DocumentLoader;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_INDENT: usize = 2;

/// Re-serialize `value` with `indent` spaces per level
pub fn to_pretty_json(value: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Load `path` as generic JSON and write the formatted view to `out`
pub fn write_json_view(path: &Path, indent: usize, out: &mut impl Write) -> Result<()> {
    let loader = DocumentLoader::new(path);
    let content = loader.read_to_string()?;
    let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    let size = fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    writeln!(out)?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "Size: {}", format_size(size))?;
    writeln!(out)?;
    writeln!(out, "=== {} ===", name)?;
    writeln!(out, "{}", to_pretty_json(&value, indent)?)?;
    Ok(())
}
