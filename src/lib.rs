//! # Junction - Network Edge-List Simplification
//!
//! **Junction** takes a directed, attributed edge list describing a physical
//! network (roads, pipes, rails) and collapses every maximal run of
//! pass-through nodes into a single aggregate edge. Nodes whose degree is not
//! exactly two are junctions and survive as distinct nodes.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Read a JSON Lines or TSV edge table with [`loader`]. Column
//!     aliases (`_key`, `edgeid`, `from`, `to`, `wayid`) are normalized and
//!     edge ids are checked for uniqueness.
//! 2.  **Resolve**: [`resolver::resolve`] gives every edge an anti-parallel
//!     partner, synthesizing reverse copies where needed, and diverts
//!     duplicate node pairs to an audit list.
//! 3.  **Contract**: [`contractor::contract`] builds successor links and
//!     relabels each chain of degree-2 segments with its leader's colour.
//! 4.  **Aggregate**: [`aggregator::aggregate`] walks each chain once and
//!     produces the simplified [`aggregator::OutputEdge`].
//!
//! [`Simplifier`](simplifier::Simplifier) runs steps 2 to 4 in one call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use junction::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let edges = EdgeSet::new(vec![
//!         Edge::new(1, "A", "B", 10.0, "high-street"),
//!         Edge::new(2, "B", "C", 5.0, "high-street"),
//!         Edge::new(3, "C", "D", 2.5, "mill-lane"),
//!     ])?;
//!
//!     let simplifier = Simplifier::builder().build();
//!     let result = simplifier.simplify(&edges)?;
//!
//!     for edge in &result.edges {
//!         println!("{} -> {} ({} m via {:?})", edge.source, edge.target, edge.length, edge.nodes);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod contractor;
pub mod error;
pub mod loader;
pub mod network;
pub mod output;
pub mod prelude;
pub mod resolver;
pub mod simplifier;
