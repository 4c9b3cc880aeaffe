//! Unit file loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::document::{kind_name, Document};
use crate::error::ExportError;
use crate::tags::{resolve_tags, TagPolicy};

/// Read and parse a unit file.
///
/// Any failure to read `path` is reported as [`ExportError::InputNotFound`].
pub fn load(path: &Path, tags: TagPolicy) -> Result<Document, ExportError> {
    let bytes = fs::read(path).map_err(|source| ExportError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read unit file");

    parse(&bytes, path, tags)
}

/// Parse unit file contents. `path` is only used for error reporting.
///
/// The contents must hold at most one YAML document.
pub fn parse(yaml_data: &[u8], path: &Path, tags: TagPolicy) -> Result<Document, ExportError> {
    let mut documents = serde_yaml::Deserializer::from_slice(yaml_data);
    let raw = match documents.next() {
        Some(document) => {
            Value::deserialize(document).map_err(|e| ExportError::parse(path, e))?
        }
        None => Value::Null,
    };
    if let Some(extra) = documents.next() {
        Value::deserialize(extra).map_err(|e| ExportError::parse(path, e))?;
        return Err(ExportError::parse(
            path,
            "expected a single YAML document, found more than one",
        ));
    }

    let root = resolve_tags(raw, tags).map_err(|reason| ExportError::parse(path, reason))?;

    match root {
        // an empty file has no units
        Value::Null => Ok(Document::default()),
        Value::Mapping(map) => {
            let document = Document::from_mapping(map);
            tracing::debug!(
                units = document.units.len(),
                disabled = document.disabled_count(),
                "parsed unit file"
            );
            Ok(document)
        }
        other => Err(ExportError::parse(
            path,
            format!(
                "expected a mapping of unit names at the document root, found a {}",
                kind_name(&other)
            ),
        )),
    }
}
