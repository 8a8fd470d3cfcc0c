//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;
use railjson_gen::core::config::GeneratorConfig;

fn saved_config(dir: &TestDir) -> Result<GeneratorConfig> {
  Ok(toml_edit::de::from_str(&dir.read_file("railjson.toml")?)?)
}

#[test]
fn test_init_creates_config() -> Result<()> {
  let dir = TestDir::new()?;

  run_railjson(&dir.path, &["init"])?;
  assert!(dir.file_exists("railjson.toml"));

  let config = dir.read_file("railjson.toml")?;
  assert!(config.contains("indent = 4"));
  assert!(config.contains("fail_on_warnings = false"));
  assert_eq!(saved_config(&dir)?, GeneratorConfig::default());

  Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("railjson.toml", "[output]\nindent = 2\n")?;

  let output = railjson(&dir.path, &["init"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("--force"));
  assert_eq!(dir.read_file("railjson.toml")?, "[output]\nindent = 2\n");

  run_railjson(&dir.path, &["init", "--force"])?;
  assert_eq!(saved_config(&dir)?.output.indent, 4);

  Ok(())
}

#[test]
fn test_init_over_broken_config() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("railjson.toml", "this is not toml")?;

  run_railjson(&dir.path, &["init", "--force"])?;
  assert_eq!(saved_config(&dir)?, GeneratorConfig::default());

  Ok(())
}
