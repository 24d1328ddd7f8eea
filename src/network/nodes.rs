use super::Key;
use ahash::AHashMap;
use std::fmt;

/// Dense index of an interned node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Interns node keys into dense ids, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    keys: Vec<Key>,
    ids: AHashMap<Key, NodeId>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, key: &Key) -> NodeId {
        if let Some(id) = self.ids.get(key) {
            return *id;
        }
        let id = NodeId(self.keys.len());
        self.keys.push(key.clone());
        self.ids.insert(key.clone(), id);
        id
    }

    pub fn get(&self, key: &Key) -> Option<NodeId> {
        self.ids.get(key).copied()
    }

    /// The original key of an interned node.
    pub fn key(&self, id: NodeId) -> &Key {
        &self.keys[id.0]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
