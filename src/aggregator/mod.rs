//! Chain Aggregator: walks each chain once from its leader and emits the
//! simplified edge.

use crate::contractor::Links;
use crate::error::TraversalError;
use crate::network::{Edge, Key};
use crate::resolver::{Colour, SegmentId, WorkingSet};
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info};

/// One edge of the simplified network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputEdge {
    pub source: Key,
    pub target: Key,
    /// Colour of the chain leader.
    pub segment: Colour,
    /// Every node passed, starting at `source`.
    pub nodes: Vec<Key>,
    /// Way ids in traversal order with consecutive repeats collapsed.
    pub way_ids: Vec<Key>,
    pub length: f64,
}

impl OutputEdge {
    /// Reinterprets the simplified edge as an input edge, keyed by its leader
    /// colour and classified by its first way id.
    pub fn to_edge(&self) -> Edge {
        let way_id = self
            .way_ids
            .first()
            .cloned()
            .unwrap_or_else(|| Key::Text(self.segment.to_string()));
        Edge::new(
            self.segment.to_string(),
            self.source.clone(),
            self.target.clone(),
            self.length,
            way_id,
        )
    }
}

/// Emits one [`OutputEdge`] per chain leader, in arena order.
///
/// With `close_rings` unset a chain stops just before the segment that would
/// bring it back to its own start node, so rings are reported open. With it
/// set that closing segment is included.
pub fn aggregate(
    working: &WorkingSet<'_>,
    links: &Links,
    close_rings: bool,
) -> Result<Vec<OutputEdge>, TraversalError> {
    let mut output = Vec::new();
    for leader in working.ids().filter(|&id| working[id].is_leader()) {
        if output.len() % 8192 == 0 {
            debug!("Output\t\t{:>8} segments", output.len());
        }
        output.push(walk_chain(working, links, leader, close_rings)?);
    }
    info!("Output\t\t{:>8} segments", output.len());
    Ok(output)
}

fn walk_chain(
    working: &WorkingSet<'_>,
    links: &Links,
    leader: SegmentId,
    close_rings: bool,
) -> Result<OutputEdge, TraversalError> {
    let start_node = working[leader].source;
    let mut visited = vec![leader];

    let mut current = leader;
    while let Some(next) = links.next(current) {
        if visited.len() > working.len() {
            return Err(TraversalError::UnterminatedChain {
                colour: working[leader].colour.to_string(),
                steps: visited.len(),
            });
        }
        current = next;
        let closes = working[current].target == start_node;
        if closes && !close_rings {
            break;
        }
        visited.push(current);
        if closes {
            break;
        }
    }

    let last = visited[visited.len() - 1];
    let nodes = std::iter::once(working.source_key(leader))
        .chain(visited.iter().map(|&id| working.target_key(id)))
        .cloned()
        .collect();
    let way_ids = visited
        .iter()
        .map(|&id| working.way_id(id))
        .dedup()
        .cloned()
        .collect();

    Ok(OutputEdge {
        source: working.source_key(leader).clone(),
        target: working.target_key(last).clone(),
        segment: working[leader].colour,
        nodes,
        way_ids,
        length: visited.iter().map(|&id| working[id].length).sum(),
    })
}
