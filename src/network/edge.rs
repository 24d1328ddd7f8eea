use super::Key;
use crate::error::LoadError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;

/// A single directed input edge.
///
/// Column aliases found in the wild (`_key`, `edgeid`, `from`, `to`, `wayid`)
/// are folded into the canonical names on deserialization. Any other column is
/// kept verbatim in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(
        rename = "edge_id",
        alias = "_key",
        alias = "edgeid",
        alias = "edge"
    )]
    pub id: Key,
    #[serde(alias = "from")]
    pub source: Key,
    #[serde(alias = "to")]
    pub target: Key,
    pub length: f64,
    #[serde(alias = "wayid")]
    pub way_id: Key,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    pub fn new(
        id: impl Into<Key>,
        source: impl Into<Key>,
        target: impl Into<Key>,
        length: f64,
        way_id: impl Into<Key>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            length,
            way_id: way_id.into(),
            attributes: Map::new(),
        }
    }
}

/// A validated edge list: every edge id occurs exactly once.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
}

impl EdgeSet {
    /// Validates identifier uniqueness.
    ///
    /// On collision the error carries every record sharing a duplicated id,
    /// in input order, so the offending rows can be inspected together.
    pub fn new(edges: Vec<Edge>) -> Result<Self, LoadError> {
        let mut seen: AHashMap<&Key, usize> = AHashMap::with_capacity(edges.len());
        for edge in &edges {
            *seen.entry(&edge.id).or_default() += 1;
        }

        if seen.values().any(|&count| count > 1) {
            let mut ids: Vec<Key> = seen
                .iter()
                .filter(|(_, count)| **count > 1)
                .map(|(id, _)| (*id).clone())
                .collect();
            ids.sort();
            let records = edges
                .iter()
                .filter(|e| seen.get(&e.id).is_some_and(|&count| count > 1))
                .cloned()
                .collect();
            return Err(LoadError::DuplicateIdentifier { ids, records });
        }

        Ok(Self { edges })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }
}

impl Index<usize> for EdgeSet {
    type Output = Edge;

    fn index(&self, index: usize) -> &Edge {
        &self.edges[index]
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
