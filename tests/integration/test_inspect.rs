//! Tests for the `inspect` and `schema-version` commands

use crate::helpers::*;
use anyhow::Result;
use railjson_gen::RAILJSON_VERSION;

#[test]
fn test_schema_version() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_railjson(&dir.path, &["schema-version"])?;
  assert_eq!(stdout(&output).trim(), RAILJSON_VERSION);
  Ok(())
}

#[test]
fn test_inspect_generated_document() -> Result<()> {
  let dir = TestDir::with_line()?;
  run_railjson(&dir.path, &["generate", "line.toml", "-o", "infra.json"])?;

  let output = run_railjson(&dir.path, &["inspect", "infra.json", "--json"])?;
  let summary: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(summary["compatibility"], "current");
  assert_eq!(summary["counts"]["buffer_stops"], 2);
  assert_eq!(summary["counts"]["switches"], 1);

  let human = run_railjson(&dir.path, &["inspect", "infra.json"])?;
  assert!(stdout(&human).contains("current"));

  Ok(())
}

#[test]
fn test_inspect_version_compatibility() -> Result<()> {
  let dir = TestDir::with_line()?;
  run_railjson(&dir.path, &["generate", "line.toml", "-o", "infra.json"])?;
  let current = dir.read_file("infra.json")?;
  let tag = format!("\"version\": \"{}\"", RAILJSON_VERSION);

  dir.write_file("older.json", &current.replacen(&tag, "\"version\": \"3.0.0\"", 1))?;
  let output = run_railjson(&dir.path, &["inspect", "older.json", "--json"])?;
  let summary: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(summary["compatibility"], "compatible");

  dir.write_file("future.json", &current.replacen(&tag, "\"version\": \"4.0.0\"", 1))?;
  let output = railjson(&dir.path, &["inspect", "future.json"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("incompatible"));

  Ok(())
}

#[test]
fn test_inspect_rejects_non_railjson() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("other.json", "{\"hello\": \"world\"}")?;

  let output = railjson(&dir.path, &["inspect", "other.json"])?;
  assert!(!output.status.success());
  Ok(())
}
