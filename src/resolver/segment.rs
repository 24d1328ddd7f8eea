use crate::network::{Edge, EdgeSet, Key, NodeId, NodeTable};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The creation label of a working segment, rendered as `C00042`.
///
/// Colours are handed out in creation order before deduplication, so a
/// dropped duplicate leaves a gap in the sequence. A colour is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour(pub usize);

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{:05}", self.0)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Position of a surviving segment in the working arena.
///
/// This is a traversal cursor only; the stable identity of a segment is its
/// [`Colour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub usize);

/// One directed piece of the symmetrized network.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Index of the originating edge in the [`EdgeSet`].
    pub edge: usize,
    pub source: NodeId,
    pub target: NodeId,
    pub length: f64,
    pub colour: Colour,
    pub chain_label: Colour,
    /// Set on synthesized reverse copies.
    pub reflected: bool,
}

impl Segment {
    pub fn is_leader(&self) -> bool {
        self.colour == self.chain_label
    }
}

/// The deduplicated segment arena together with the tables it refers to.
#[derive(Debug, Clone)]
pub struct WorkingSet<'e> {
    pub edges: &'e EdgeSet,
    pub nodes: NodeTable,
    pub segments: Vec<Segment>,
}

impl<'e> WorkingSet<'e> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SegmentId> {
        (0..self.segments.len()).map(SegmentId)
    }

    pub fn edge(&self, id: SegmentId) -> &'e Edge {
        let edges: &'e EdgeSet = self.edges;
        &edges[self[id].edge]
    }

    pub fn source_key(&self, id: SegmentId) -> &Key {
        self.nodes.key(self[id].source)
    }

    pub fn target_key(&self, id: SegmentId) -> &Key {
        self.nodes.key(self[id].target)
    }

    pub fn way_id(&self, id: SegmentId) -> &'e Key {
        &self.edge(id).way_id
    }

    /// Looks up the surviving segment running `source -> target`, if any.
    pub fn find(&self, source: &Key, target: &Key) -> Option<SegmentId> {
        let source = self.nodes.get(source)?;
        let target = self.nodes.get(target)?;
        self.segments
            .iter()
            .position(|s| s.source == source && s.target == target)
            .map(SegmentId)
    }

    /// Rows for the debug dump, in arena order.
    pub fn records(&self) -> Vec<SegmentRecord<'_>> {
        self.ids()
            .map(|id| {
                let segment = &self[id];
                let edge = self.edge(id);
                SegmentRecord {
                    segment_id: id.0,
                    edge_id: &edge.id,
                    source: self.nodes.key(segment.source),
                    target: self.nodes.key(segment.target),
                    length: segment.length,
                    way_id: &edge.way_id,
                    colour: segment.colour,
                    chain_label: segment.chain_label,
                    reflected: segment.reflected,
                    attributes: &edge.attributes,
                }
            })
            .collect()
    }
}

impl Index<SegmentId> for WorkingSet<'_> {
    type Output = Segment;

    fn index(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }
}

impl IndexMut<SegmentId> for WorkingSet<'_> {
    fn index_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.0]
    }
}

/// A segment row as written to the debug dump.
#[derive(Debug, Serialize)]
pub struct SegmentRecord<'a> {
    pub segment_id: usize,
    pub edge_id: &'a Key,
    pub source: &'a Key,
    pub target: &'a Key,
    pub length: f64,
    pub way_id: &'a Key,
    pub colour: Colour,
    pub chain_label: Colour,
    pub reflected: bool,
    #[serde(flatten)]
    pub attributes: &'a serde_json::Map<String, serde_json::Value>,
}

/// A segment dropped because an earlier one already covers its node pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateSegment {
    pub edge_id: Key,
    pub source: Key,
    pub length: f64,
    pub target: Key,
    pub way_id: Key,
}
