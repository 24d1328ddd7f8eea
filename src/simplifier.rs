use crate::aggregator::{OutputEdge, aggregate};
use crate::contractor::{Links, LoopWalk, contract};
use crate::error::JunctionError;
use crate::network::EdgeSet;
use crate::resolver::{DuplicateSegment, WorkingSet, resolve};
use tracing::info;

/// Everything produced by one simplification run.
///
/// The working arena and link table are kept alongside the output so the
/// caller can dump them for inspection.
#[derive(Debug)]
pub struct Simplification<'e> {
    pub edges: Vec<OutputEdge>,
    pub duplicates: Vec<DuplicateSegment>,
    pub working: WorkingSet<'e>,
    pub links: Links,
}

/// Runs the resolve, contract and aggregate stages over an [`EdgeSet`].
#[derive(Debug, Clone, Default)]
pub struct Simplifier {
    loop_walk: LoopWalk,
    close_rings: bool,
}

pub struct SimplifierBuilder {
    loop_walk: LoopWalk,
    close_rings: bool,
}

impl SimplifierBuilder {
    pub fn new() -> Self {
        Self {
            loop_walk: LoopWalk::default(),
            close_rings: false,
        }
    }
    pub fn loop_walk(mut self, loop_walk: LoopWalk) -> Self {
        self.loop_walk = loop_walk;
        self
    }
    /// Include the segment that returns a chain to its start node.
    pub fn close_rings(mut self, close_rings: bool) -> Self {
        self.close_rings = close_rings;
        self
    }
    /// Full-cycle loop walking with closed rings.
    pub fn full_loops(self) -> Self {
        self.loop_walk(LoopWalk::FullCycle).close_rings(true)
    }
    pub fn build(self) -> Simplifier {
        Simplifier {
            loop_walk: self.loop_walk,
            close_rings: self.close_rings,
        }
    }
}

impl Default for SimplifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplifier {
    pub fn builder() -> SimplifierBuilder {
        SimplifierBuilder::new()
    }

    pub fn loop_walk(&self) -> LoopWalk {
        self.loop_walk
    }

    pub fn simplify<'e>(&self, edges: &'e EdgeSet) -> Result<Simplification<'e>, JunctionError> {
        info!("Creating segments");
        let resolution = resolve(edges);
        let mut working = resolution.working;

        info!("Processing segments");
        let links = contract(&mut working, self.loop_walk)?;

        info!("Outputting segments");
        let output = aggregate(&working, &links, self.close_rings)?;

        Ok(Simplification {
            edges: output,
            duplicates: resolution.duplicates,
            working,
            links,
        })
    }
}
