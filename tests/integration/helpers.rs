//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Two tracks joined by a link, bounded by buffer stops, with one operational point
pub const LINE_DESCRIPTION: &str = r#"
[[track_sections]]
label = "T1"
length = 1000.0
line_code = 420000
line_name = "Ligne de test"
track_number = 1
track_name = "V1"
coordinates = [[0.0, 0.0], [0.01, 0.0]]

[[track_sections.waypoints]]
kind = "buffer_stop"
label = "BS0"
position = 0.0

[[track_sections.waypoints]]
kind = "detector"
label = "D1"
position = 900.0

[[track_sections.signals]]
label = "S1"
position = 880.0
direction = "START_TO_STOP"
side = "RIGHT"

[[track_sections.operational_points]]
operational_point = "OP1"
position = 500.0

[[track_sections]]
label = "T2"
length = 500.0

[[track_sections.waypoints]]
kind = "buffer_stop"
label = "BS1"
position = 500.0

[[switches]]
label = "L1"
switch_type = "link"

[switches.ports.A]
endpoint = "END"
track = "T1"

[switches.ports.B]
endpoint = "BEGIN"
track = "T2"

[[routes]]
label = "rt.BS0->BS1"
entry_point = { type = "BufferStop", id = "BS0" }
exit_point = { type = "BufferStop", id = "BS1" }
entry_point_direction = "START_TO_STOP"
release_detectors = ["D1"]

[routes.switches_directions]
L1 = "STATIC"

[[speed_sections]]
label = "SP1"
speed_limit = 27.78

[[speed_sections.track_ranges]]
track = "T1"
begin = 0.0
end = 1000.0
applicable_directions = "BOTH"

[[operational_points]]
label = "OP1"
trigram = "TST"
uic = 87000001
"#;

/// A scratch directory the binary runs in
pub struct TestDir {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestDir {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Directory holding `line.toml` (see [`LINE_DESCRIPTION`])
  pub fn with_line() -> Result<Self> {
    let dir = Self::new()?;
    dir.write_file("line.toml", LINE_DESCRIPTION)?;
    Ok(dir)
  }

  pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full, content)?;
    Ok(full)
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }

  pub fn read_json(&self, path: &str) -> Result<serde_json::Value> {
    let content = self.read_file(path)?;
    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path))
  }
}

/// Run the railjson binary, whatever its exit status
pub fn railjson(cwd: &Path, args: &[&str]) -> Result<Output> {
  Command::new(env!("CARGO_BIN_EXE_railjson"))
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run railjson")
}

/// Run the railjson binary and require success
pub fn run_railjson(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = railjson(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "railjson command failed: railjson {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}
