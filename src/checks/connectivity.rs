//! Track connectivity check
//!
//! Builds an undirected graph with one node per track section and one edge per
//! pair of tracks joined by a switch, then reports the connected components.
//! An infrastructure split in several islands is usually a missing link.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::InfraResult;
use crate::model::Infra;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

pub struct TrackConnectivityCheck;

/// Track labels grouped by connected component, in track declaration order
fn connected_components(infra: &Infra) -> Vec<Vec<&str>> {
  let mut graph: UnGraph<&str, &str> = UnGraph::new_undirected();
  let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

  for track in &infra.track_sections {
    nodes
      .entry(track.label.as_str())
      .or_insert_with(|| graph.add_node(track.label.as_str()));
  }

  for switch in &infra.switches {
    // unknown tracks are reported by dangling-references
    let ports: Vec<NodeIndex> = switch
      .ports
      .values()
      .filter_map(|endpoint| nodes.get(endpoint.track.as_str()).copied())
      .collect();
    if let Some((first, rest)) = ports.split_first() {
      for other in rest {
        graph.add_edge(*first, *other, switch.label.as_str());
      }
    }
  }

  let mut components: Vec<Vec<&str>> = tarjan_scc(&graph)
    .into_iter()
    .map(|component| {
      let mut indices = component;
      indices.sort();
      indices.into_iter().map(|index| graph[index]).collect()
    })
    .collect();
  // node indices follow declaration order
  components.sort_by_key(|component| {
    component
      .first()
      .and_then(|label| nodes.get(label))
      .map(|index| index.index())
  });
  components
}

impl Check for TrackConnectivityCheck {
  fn name(&self) -> &'static str {
    "track-connectivity"
  }

  fn description(&self) -> &'static str {
    "Verify that switches join all track sections into one network"
  }

  fn run(&self, ctx: &CheckContext) -> InfraResult<CheckResult> {
    let components = connected_components(ctx.infra);

    if components.len() <= 1 {
      return Ok(CheckResult::pass(self.name(), "Track network is connected"));
    }

    Ok(
      CheckResult::warning(self.name(), format!("Track network is split into {} disconnected parts", components.len()))
        .with_suggestion("Add the links or switches joining the isolated tracks")
        .with_details(serde_json::json!({ "components": components })),
    )
  }

  fn is_expensive(&self) -> bool {
    true
  }
}
