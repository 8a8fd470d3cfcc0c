//! Library-level tests: building an infrastructure in code and exporting it

use anyhow::Result;
use railjson_gen::checks::{CheckContext, create_default_runner};
use railjson_gen::io::{load_description, to_json_string};
use railjson_gen::model::{Electrification, Infra, OperationalPoint, Route, Switch, SwitchType, TrackSection};
use railjson_gen::railjson::{Direction, Endpoint};
use railjson_gen::{RAILJSON_VERSION, RailJsonInfra};
use tempfile::TempDir;

/// Point switch at the end of T0, branching to T1 and T2
fn junction() -> Infra {
  let mut infra = Infra::new();
  let station = OperationalPoint::new("STATION", "STN", 87000002);

  let t0 = infra.add_track_section(TrackSection::new("T0", 2000.0));
  t0.add_buffer_stop("BS0", 0.0);
  t0.add_detector("D0", 1900.0);
  t0.add_signal("S0", 1880.0, Direction::StartToStop);
  station.add_part(t0, 1000.0);

  for (label, buffer_stop) in [("T1", "BS1"), ("T2", "BS2")] {
    let track = infra.add_track_section(TrackSection::new(label, 800.0));
    track.add_buffer_stop(buffer_stop, 800.0);
    station.add_part(track, 100.0);
  }

  infra.add_switch(
    Switch::new("SW0", SwitchType::PointSwitch)
      .with_port("A", "T0", Endpoint::End)
      .with_port("B1", "T1", Endpoint::Begin)
      .with_port("B2", "T2", Endpoint::Begin),
  );

  let entry = infra.track_sections[0].waypoints[0].clone();
  let exit = infra.track_sections[1].waypoints[0].clone();
  infra.add_route(
    Route::new("rt.BS0->BS1", &entry, &exit, Direction::StartToStop)
      .with_switch("SW0", "A_B1")
      .with_release_detector("D0"),
  );

  let mut electrification = Electrification::new("E0", "25000V");
  for track in &infra.track_sections {
    electrification.add_track(track);
  }
  infra.add_electrification(electrification);
  infra.add_operational_point(station);
  infra
}

#[test]
fn test_junction_passes_every_check() {
  let infra = junction();
  let report = create_default_runner().run_all(&CheckContext {
    infra: &infra,
    thorough: true,
  });

  let failed: Vec<&str> = report
    .results
    .iter()
    .filter(|r| !r.passed)
    .map(|r| r.check_name.as_str())
    .collect();
  assert!(failed.is_empty(), "unexpected failures: {:?}", failed);
  assert!(report.passed(true));
}

#[test]
fn test_junction_document() -> Result<()> {
  let document = junction().to_wire();

  assert_eq!(document.version, RAILJSON_VERSION);
  assert_eq!(document.switches[0].group_change_delay, 4.0);
  assert_eq!(document.electrifications[0].track_ranges.len(), 3);

  // parts gathered across tracks, in track order
  let parts: Vec<(&str, f64)> = document.operational_points[0]
    .parts
    .iter()
    .map(|p| (p.track.as_str(), p.position))
    .collect();
  assert_eq!(parts, vec![("T0", 1000.0), ("T1", 100.0), ("T2", 100.0)]);

  // the wire document reads back unchanged
  let text = to_json_string(&document, 2)?;
  let back: RailJsonInfra = serde_json::from_str(&text)?;
  assert_eq!(back, document);

  Ok(())
}

#[test]
fn test_description_round_trip_through_toml() -> Result<()> {
  let infra = junction();
  let dir = TempDir::new()?;
  let path = dir.path().join("junction.toml");
  std::fs::write(&path, toml_edit::ser::to_string_pretty(&infra)?)?;

  let loaded = load_description(&path)?;
  assert_eq!(loaded, infra);
  assert_eq!(
    serde_json::to_string(&loaded.to_wire())?,
    serde_json::to_string(&infra.to_wire())?
  );

  Ok(())
}
