//! Chain Contractor: relabels every run of degree-2 segments with the label
//! of the segment that enters it.
//!
//! Contraction happens in three steps over the working arena:
//!
//! 1. [`degrees`] and [`build_links`] derive node degrees and the successor
//!    of every segment.
//! 2. [`trace_chains`] walks forward from each segment that leaves a junction
//!    into a degree-2 node.
//! 3. [`close_loops`] handles cycles that contain no junction at all and were
//!    therefore never reached by step 2.
//!
//! Afterwards `chain_label` is shared by all segments of a chain and equals
//! `colour` only for the chain leader.

use crate::error::TraversalError;
use crate::resolver::WorkingSet;

mod chains;
mod links;
mod loops;

pub use chains::trace_chains;
pub use links::{Link, Links, build_links, degrees};
pub use loops::{DEFAULT_LOOP_STEPS, LoopWalk, close_loops};

/// Runs every contraction step and returns the final link table.
pub fn contract(working: &mut WorkingSet<'_>, walk: LoopWalk) -> Result<Links, TraversalError> {
    let degree = degrees(working);
    let mut links = build_links(working, &degree);
    trace_chains(working, &mut links)?;
    close_loops(working, &mut links, walk);
    Ok(links)
}
