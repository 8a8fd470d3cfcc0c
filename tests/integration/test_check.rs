//! Tests for the `check` command

use crate::helpers::*;
use anyhow::Result;

const ISLANDS: &str = r#"
[[track_sections]]
label = "T1"
length = 100.0

[[track_sections]]
label = "T2"
length = 100.0
"#;

#[test]
fn test_check_clean_description() -> Result<()> {
  let dir = TestDir::with_line()?;

  let output = run_railjson(&dir.path, &["check", "line.toml", "--thorough", "--strict"])?;
  let out = stdout(&output);
  assert!(out.contains("✅ duplicate-labels"));
  assert!(out.contains("✅ track-connectivity"));
  assert!(out.contains("All 5 check(s) passed"));

  Ok(())
}

#[test]
fn test_check_json_report() -> Result<()> {
  let dir = TestDir::with_line()?;

  let output = run_railjson(&dir.path, &["check", "line.toml", "--json"])?;
  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let names: Vec<&str> = report["results"]
    .as_array()
    .map(|results| results.iter().filter_map(|r| r["check_name"].as_str()).collect())
    .unwrap_or_default();

  // track-connectivity needs --thorough
  assert_eq!(
    names,
    vec![
      "duplicate-labels",
      "orphan-operational-point-parts",
      "dangling-references",
      "positions-in-range",
    ]
  );
  Ok(())
}

#[test]
fn test_check_fails_on_duplicates() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file(
    "dup.toml",
    r#"
[[track_sections]]
label = "T1"
length = 100.0

[[track_sections.signals]]
label = "S1"
position = 10.0

[[track_sections]]
label = "T2"
length = 100.0

[[track_sections.signals]]
label = "S1"
position = 20.0
"#,
  )?;

  let output = railjson(&dir.path, &["check", "dup.toml", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let duplicates = &report["results"][0];
  assert_eq!(duplicates["check_name"], "duplicate-labels");
  assert_eq!(duplicates["passed"], false);
  assert_eq!(duplicates["details"]["duplicates"][0]["kind"], "signal");

  Ok(())
}

#[test]
fn test_check_strict_turns_warnings_into_failures() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("islands.toml", ISLANDS)?;

  let relaxed = railjson(&dir.path, &["check", "islands.toml", "--thorough"])?;
  assert!(relaxed.status.success());
  assert!(stdout(&relaxed).contains("2 disconnected parts"));

  let strict = railjson(&dir.path, &["check", "islands.toml", "--thorough", "--strict"])?;
  assert_eq!(strict.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_check_config_policy() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("islands.toml", ISLANDS)?;
  dir.write_file(
    "railjson.toml",
    "[validation]\nthorough = true\nfail_on_warnings = true\n",
  )?;

  let failing = railjson(&dir.path, &["check", "islands.toml"])?;
  assert_eq!(failing.status.code(), Some(3));

  dir.write_file(
    "railjson.toml",
    "[validation]\nthorough = true\nfail_on_warnings = true\ndisabled_checks = [\"track-connectivity\"]\n",
  )?;
  run_railjson(&dir.path, &["check", "islands.toml"])?;

  Ok(())
}

#[test]
fn test_check_rejects_invalid_config() -> Result<()> {
  let dir = TestDir::with_line()?;
  dir.write_file("railjson.toml", "[validation]\ndisabled_checks = [\"no-such-check\"]\n")?;

  let output = railjson(&dir.path, &["check", "line.toml"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("no-such-check"));

  Ok(())
}
