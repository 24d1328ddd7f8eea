use crate::resolver::{SegmentId, WorkingSet};
use std::ops::{Index, IndexMut};
use tracing::info;

/// Traversal state of one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    /// Degree of the segment's source node.
    pub source_degree: usize,
    /// Degree of the segment's target node.
    pub target_degree: usize,
    /// The segment continuing the path past the target node. Only set when
    /// the target node has degree below 3.
    pub next: Option<SegmentId>,
    pub visits: u32,
    pub is_active: bool,
    pub is_loop: bool,
}

/// Link table, one entry per segment of the working arena.
#[derive(Debug, Clone, Default)]
pub struct Links {
    links: Vec<Link>,
}

impl Links {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Link)> {
        self.links
            .iter()
            .enumerate()
            .map(|(i, link)| (SegmentId(i), link))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SegmentId, &mut Link)> {
        self.links
            .iter_mut()
            .enumerate()
            .map(|(i, link)| (SegmentId(i), link))
    }

    pub fn next(&self, id: SegmentId) -> Option<SegmentId> {
        self.links[id.0].next
    }

    /// Segments currently flagged active, in arena order.
    pub fn active(&self) -> Vec<SegmentId> {
        self.iter()
            .filter(|(_, link)| link.is_active)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn loops(&self) -> Vec<SegmentId> {
        self.iter()
            .filter(|(_, link)| link.is_loop)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of segments that have a successor.
    pub fn linked(&self) -> usize {
        self.links.iter().filter(|l| l.next.is_some()).count()
    }
}

impl Index<SegmentId> for Links {
    type Output = Link;

    fn index(&self, id: SegmentId) -> &Link {
        &self.links[id.0]
    }
}

impl IndexMut<SegmentId> for Links {
    fn index_mut(&mut self, id: SegmentId) -> &mut Link {
        &mut self.links[id.0]
    }
}

/// Counts, for every node, the segments leaving it.
///
/// The arena holds at most one segment per `(source, target)` pair and every
/// segment has its reverse, so this is the number of distinct edges meeting
/// at the node.
pub fn degrees(working: &WorkingSet<'_>) -> Vec<usize> {
    let mut degree = vec![0; working.nodes.len()];
    for segment in &working.segments {
        degree[segment.source.0] += 1;
    }
    info!("Counted\t\t{:>8} nodes\t", degree.len());
    degree
}

/// Builds the link table from the node degrees.
///
/// A segment `(a, x)` continues into the segment leaving `x` that does not
/// turn straight back to `a`. Nodes of degree 3 or more are junctions and
/// never continue a path.
pub fn build_links(working: &WorkingSet<'_>, degree: &[usize]) -> Links {
    let mut outgoing: Vec<Vec<SegmentId>> = vec![Vec::new(); working.nodes.len()];
    for id in working.ids() {
        outgoing[working[id].source.0].push(id);
    }

    let links = working
        .ids()
        .map(|id| {
            let segment = &working[id];
            let target_degree = degree[segment.target.0];
            let next = if target_degree < 3 {
                outgoing[segment.target.0]
                    .iter()
                    .copied()
                    .find(|&candidate| working[candidate].target != segment.source)
            } else {
                None
            };
            Link {
                source_degree: degree[segment.source.0],
                target_degree,
                next,
                ..Link::default()
            }
        })
        .collect();

    let links = Links { links };
    info!("Created\t\t{:>8} links\t", links.linked());
    links
}
