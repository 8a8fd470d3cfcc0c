//! `railjson inspect` - Summarize an existing RailJson document

use railjson_gen::core::error::{InfraError, InfraResult, ValidationError};
use railjson_gen::io::read_document;
use railjson_gen::railjson::{RAILJSON_VERSION, VersionCompatibility};
use std::path::Path;

/// Run the inspect command
pub fn run_inspect(document_path: &Path, json: bool) -> InfraResult<()> {
  let document = read_document(document_path)?;
  let compatibility = document.compatibility()?;
  let counts = document.counts();

  if json {
    let summary = serde_json::json!({
      "path": document_path.display().to_string(),
      "version": document.version,
      "schema_version": RAILJSON_VERSION,
      "compatibility": compatibility,
      "counts": counts,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
  } else {
    let status = match compatibility {
      VersionCompatibility::Current => "✅ current",
      VersionCompatibility::Compatible => "⚠️  compatible (same major version)",
      VersionCompatibility::Incompatible => "❌ incompatible",
    };
    println!("📄 {}", document_path.display());
    println!("   version: {} ({}, this build writes {})", document.version, status, RAILJSON_VERSION);
    println!();
    for (collection, count) in counts.entries() {
      println!("   {:<22} {}", collection, count);
    }
  }

  if compatibility == VersionCompatibility::Incompatible {
    return Err(InfraError::Validation(ValidationError::IncompatibleVersion {
      found: document.version,
      expected: RAILJSON_VERSION.to_string(),
    }));
  }
  Ok(())
}
