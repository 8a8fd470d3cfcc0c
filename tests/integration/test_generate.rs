//! Tests for the `generate` command

use crate::helpers::*;
use anyhow::Result;
use railjson_gen::RAILJSON_VERSION;

#[test]
fn test_generate_writes_document() -> Result<()> {
  let dir = TestDir::with_line()?;

  let output = run_railjson(&dir.path, &["generate", "line.toml", "-o", "out/infra.json"])?;
  assert!(stdout(&output).contains("Wrote"));
  assert!(stdout(&output).contains("sha256:"));

  let document = dir.read_json("out/infra.json")?;
  assert_eq!(document["version"], RAILJSON_VERSION);

  let keys: Vec<&str> = document
    .as_object()
    .map(|o| o.keys().map(String::as_str).collect())
    .unwrap_or_default();
  assert_eq!(keys.len(), 12);

  assert_eq!(document["track_sections"][0]["id"], "T1");
  assert_eq!(document["track_sections"][0]["extensions"]["sncf"]["line_code"], 420000);
  assert_eq!(document["switches"][0]["switch_type"], "link");
  assert_eq!(document["routes"][0]["entry_point"]["type"], "BufferStop");
  assert_eq!(document["signals"][0]["track"], "T1");
  assert_eq!(document["buffer_stops"].as_array().map(Vec::len), Some(2));
  assert_eq!(document["detectors"][0]["id"], "D1");
  assert_eq!(document["operational_points"][0]["parts"][0]["position"], 500.0);
  assert_eq!(document["extended_switch_types"], serde_json::json!([]));
  assert_eq!(document["speed_sections"][0]["speed_limit"], 27.78);

  Ok(())
}

#[test]
fn test_generate_key_order_and_indent() -> Result<()> {
  let dir = TestDir::with_line()?;
  run_railjson(&dir.path, &["generate", "line.toml", "-o", "infra.json"])?;

  let text = dir.read_file("infra.json")?;
  assert!(text.starts_with("{\n    \"version\": \""));
  assert!(text.ends_with("}\n"));

  let positions: Vec<usize> = [
    "\"track_sections\"",
    "\"switches\"",
    "\"routes\"",
    "\"signals\"",
    "\"buffer_stops\"",
    "\"detectors\"",
    "\"operational_points\"",
    "\"extended_switch_types\"",
    "\"speed_sections\"",
    "\"electrifications\"",
    "\"neutral_sections\"",
  ]
  .iter()
  .filter_map(|key| text.find(&format!("\n    {}", key)))
  .collect();
  assert_eq!(positions.len(), 11);
  assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

  Ok(())
}

#[test]
fn test_generate_is_reproducible() -> Result<()> {
  let dir = TestDir::with_line()?;
  run_railjson(&dir.path, &["generate", "line.toml", "-o", "a.json"])?;
  run_railjson(&dir.path, &["generate", "line.toml", "-o", "b.json"])?;

  assert_eq!(dir.read_file("a.json")?, dir.read_file("b.json")?);
  Ok(())
}

#[test]
fn test_generate_default_output_and_json_summary() -> Result<()> {
  let dir = TestDir::with_line()?;

  let output = run_railjson(&dir.path, &["generate", "line.toml", "--json"])?;
  assert!(dir.file_exists("line.railjson.json"));

  let summary: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(summary["version"], RAILJSON_VERSION);
  assert_eq!(summary["counts"]["track_sections"], 2);
  assert_eq!(summary["counts"]["operational_points"], 1);
  assert_eq!(summary["sha256"].as_str().map(str::len), Some(64));

  Ok(())
}

#[test]
fn test_generate_uses_configured_output() -> Result<()> {
  let dir = TestDir::with_line()?;
  dir.write_file("railjson.toml", "[output]\nindent = 2\npath = \"build/line.json\"\n")?;

  run_railjson(&dir.path, &["generate", "line.toml"])?;
  let text = dir.read_file("build/line.json")?;
  assert!(text.starts_with("{\n  \"version\""));

  Ok(())
}

#[test]
fn test_generate_refuses_duplicates() -> Result<()> {
  let dir = TestDir::with_line()?;
  let duplicated = format!("{}\n[[switches]]\nlabel = \"L1\"\nswitch_type = \"link\"\n", LINE_DESCRIPTION);
  dir.write_file("dup.toml", &duplicated)?;

  let output = railjson(&dir.path, &["generate", "dup.toml", "-o", "dup.json"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("switch 'L1'"));
  assert!(stderr(&output).contains("duplicate-labels"));
  assert!(!dir.file_exists("dup.json"));

  // the JSON form still explains the refusal
  let output = railjson(&dir.path, &["generate", "dup.toml", "-o", "dup.json", "--json"])?;
  assert_eq!(output.status.code(), Some(3));
  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let duplicates = report["results"]
    .as_array()
    .and_then(|results| results.iter().find(|r| r["check_name"] == "duplicate-labels"))
    .cloned()
    .unwrap_or_default();
  assert_eq!(duplicates["passed"], false);
  assert_eq!(duplicates["details"]["duplicates"][0]["label"], "L1");
  assert!(!dir.file_exists("dup.json"));

  // --skip-checks exports anyway
  run_railjson(&dir.path, &["generate", "dup.toml", "-o", "dup.json", "--skip-checks"])?;
  let document = dir.read_json("dup.json")?;
  assert_eq!(document["switches"].as_array().map(Vec::len), Some(2));

  Ok(())
}

#[test]
fn test_generate_drops_orphan_parts() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file(
    "orphan.toml",
    r#"
[[track_sections]]
label = "T1"
length = 100.0

[[track_sections.operational_points]]
operational_point = "GHOST"
position = 10.0
"#,
  )?;

  // an orphan is a warning, so export proceeds
  run_railjson(&dir.path, &["generate", "orphan.toml", "-o", "orphan.json"])?;
  let document = dir.read_json("orphan.json")?;
  assert_eq!(document["operational_points"], serde_json::json!([]));

  // unless warnings are failures
  dir.write_file("railjson.toml", "[validation]\nfail_on_warnings = true\n")?;
  let output = railjson(&dir.path, &["generate", "orphan.toml", "-o", "strict.json"])?;
  assert_eq!(output.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_generate_bad_input() -> Result<()> {
  let dir = TestDir::new()?;

  let missing = railjson(&dir.path, &["generate", "missing.toml"])?;
  assert!(!missing.status.success());

  dir.write_file("infra.yaml", "track_sections: []\n")?;
  let unsupported = railjson(&dir.path, &["generate", "infra.yaml"])?;
  assert_eq!(unsupported.status.code(), Some(1));
  assert!(stderr(&unsupported).contains("Unsupported"));

  Ok(())
}

#[test]
fn test_generate_rejects_non_finite_numbers() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file(
    "inf.toml",
    r#"
[[track_sections]]
label = "T1"
length = inf

[[speed_sections]]
label = "SP1"
speed_limit = inf
"#,
  )?;

  let output = railjson(&dir.path, &["generate", "inf.toml", "-o", "inf.json", "--skip-checks"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("length is inf"));
  assert!(stderr(&output).contains("speed limit is inf"));
  assert!(!dir.file_exists("inf.json"));

  Ok(())
}
