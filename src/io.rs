//! Reading infrastructure descriptions and writing RailJson documents

use crate::core::error::{DescriptionError, InfraError, InfraResult, ResultExt};
use crate::model::Infra;
use crate::railjson::RailJsonInfra;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Default indentation of written documents
pub const DEFAULT_INDENT: usize = 4;

/// Load an infrastructure description (`.toml` or `.json`)
pub fn load_description(path: &Path) -> InfraResult<Infra> {
  let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);

  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read description from {}", path.display()))?;

  let malformed = |reason: String| {
    InfraError::Description(DescriptionError::Malformed {
      path: path.to_path_buf(),
      reason,
    })
  };

  let infra: Infra = match extension.as_deref() {
    Some("toml") => toml_edit::de::from_str(&content).map_err(|e| malformed(e.to_string()))?,
    Some("json") => serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?,
    _ => {
      return Err(InfraError::Description(DescriptionError::UnsupportedFormat {
        path: path.to_path_buf(),
      }));
    }
  };

  let non_finite = infra.non_finite_values();
  if !non_finite.is_empty() {
    return Err(malformed(format!("non-finite numbers cannot be written as JSON:\n{}", non_finite.join("\n"))));
  }

  tracing::debug!(
    path = %path.display(),
    track_sections = infra.track_sections.len(),
    operational_points = infra.operational_points.len(),
    "loaded description"
  );

  Ok(infra)
}

/// Pretty-print `value` as JSON with `indent` spaces and a trailing newline
pub fn to_json_string<T: Serialize>(value: &T, indent: usize) -> InfraResult<String> {
  let indent = " ".repeat(indent);
  let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
  let mut buffer = Vec::new();
  let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
  value.serialize(&mut serializer)?;
  buffer.push(b'\n');
  Ok(String::from_utf8(buffer)?)
}

/// Write `document` to `path`, returning the bytes written
pub fn write_document(document: &RailJsonInfra, path: &Path, indent: usize) -> InfraResult<String> {
  let text = to_json_string(document, indent)?;

  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }
  fs::write(path, &text).with_context(|| format!("Failed to write document to {}", path.display()))?;

  tracing::debug!(path = %path.display(), bytes = text.len(), "wrote document");
  Ok(text)
}

/// Parse an existing RailJson document
pub fn read_document(path: &Path) -> InfraResult<RailJsonInfra> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read document from {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("Failed to parse RailJson document {}", path.display()))
}

/// SHA-256 of a serialized document, hex encoded
pub fn document_digest(contents: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(contents);
  format!("{:x}", hasher.finalize())
}
