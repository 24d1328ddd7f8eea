//! Symmetry Resolver: turns the directed edge list into a working segment
//! arena in which every segment has an anti-parallel partner.
//!
//! An edge `(u, v)` is paired when the edge set also holds `(v, u)`; a
//! self-loop is its own partner. Unpaired edges get a reflected copy. After
//! reflection, segments repeating an already seen `(source, target)` pair are
//! diverted to the duplicate audit list.

use crate::network::{EdgeSet, NodeId, NodeTable};
use ahash::AHashSet;
use itertools::Itertools;
use tracing::{info, warn};

mod segment;

pub use segment::*;

/// Output of symmetry resolution.
#[derive(Debug, Clone)]
pub struct Resolution<'e> {
    pub working: WorkingSet<'e>,
    /// Dropped segments, sorted by `(source, target)`.
    pub duplicates: Vec<DuplicateSegment>,
    /// Number of synthesized reverse segments, counted before deduplication.
    pub reflected: usize,
}

/// Builds the deduplicated segment arena for `edges`.
///
/// Creation order, and therefore colour order, is every original edge in
/// input order followed by the reflections ordered by edge id.
pub fn resolve(edges: &EdgeSet) -> Resolution<'_> {
    let mut nodes = NodeTable::new();
    let endpoints: Vec<(NodeId, NodeId)> = edges
        .iter()
        .map(|e| (nodes.intern(&e.source), nodes.intern(&e.target)))
        .collect();

    info!("Adding missing edges");
    let present: AHashSet<(NodeId, NodeId)> = endpoints.iter().copied().collect();
    let unpaired: Vec<usize> = (0..edges.len())
        .filter(|&i| {
            let (source, target) = endpoints[i];
            !present.contains(&(target, source))
        })
        .sorted_by(|&a, &b| edges[a].id.cmp(&edges[b].id))
        .collect();
    info!("Added\t\t{:>8} edges", unpaired.len());

    let originals = endpoints
        .iter()
        .enumerate()
        .map(|(i, &(source, target))| (i, source, target, false));
    let reflections = unpaired.iter().map(|&i| {
        let (source, target) = endpoints[i];
        (i, target, source, true)
    });

    let mut seen: AHashSet<(NodeId, NodeId)> = AHashSet::with_capacity(endpoints.len() * 2);
    let mut segments = Vec::with_capacity(endpoints.len() + unpaired.len());
    let mut duplicates = Vec::new();

    for (position, (edge_index, source, target, reflected)) in
        originals.chain(reflections).enumerate()
    {
        let edge = &edges[edge_index];
        if !seen.insert((source, target)) {
            duplicates.push(DuplicateSegment {
                edge_id: edge.id.clone(),
                source: nodes.key(source).clone(),
                length: edge.length,
                target: nodes.key(target).clone(),
                way_id: edge.way_id.clone(),
            });
            continue;
        }

        let colour = Colour(position);
        segments.push(Segment {
            edge: edge_index,
            source,
            target,
            length: edge.length,
            colour,
            chain_label: colour,
            reflected,
        });
    }

    duplicates.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
    if !duplicates.is_empty() {
        warn!("Dropped\t\t{:>8} duplicate segments", duplicates.len());
    }
    info!("Created\t\t{:>8} segments", segments.len());

    Resolution {
        working: WorkingSet {
            edges,
            nodes,
            segments,
        },
        duplicates,
        reflected: unpaired.len(),
    }
}
