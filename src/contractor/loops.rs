use super::Links;
use crate::resolver::{SegmentId, WorkingSet};
use tracing::{debug, info};

/// Steps walked from each loop segment by the default [`LoopWalk`].
pub const DEFAULT_LOOP_STEPS: usize = 3;

/// How isolated cycles are relabeled after the junction-anchored pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopWalk {
    /// Walk a fixed number of steps forward from every loop segment.
    ///
    /// Rings longer than the step count can end up split across several
    /// labels depending on arena order. A later walk can also relabel the
    /// leader of a whole direction, so that direction of the ring produces
    /// no output edge at all.
    Steps(usize),
    /// Walk each ring exactly once around from its first unvisited segment,
    /// giving the whole ring a single label.
    FullCycle,
}

impl Default for LoopWalk {
    fn default() -> Self {
        LoopWalk::Steps(DEFAULT_LOOP_STEPS)
    }
}

/// Flags and relabels segments lying on cycles without any junction.
///
/// A segment between two degree-2 nodes that no junction-anchored walk
/// reached is on such a cycle. Returns the number of loop segments found.
pub fn close_loops(working: &mut WorkingSet<'_>, links: &mut Links, walk: LoopWalk) -> usize {
    for (_, link) in links.iter_mut() {
        link.is_loop = link.source_degree == 2
            && link.target_degree == 2
            && link.visits == 0
            && link.next.is_some();
        link.is_active = link.is_loop;
    }

    let starts = links.loops();
    for (count, &start) in starts.iter().enumerate() {
        if count % 1024 == 0 {
            debug!("Active\t\t{:>8} loops\t", links.active().len());
        }
        match walk {
            LoopWalk::Steps(steps) => walk_steps(working, links, start, steps),
            LoopWalk::FullCycle => walk_cycle(working, links, start),
        }
    }

    info!("Processed\t{:>8} loops\t", starts.len());
    starts.len()
}

fn walk_steps(working: &mut WorkingSet<'_>, links: &mut Links, start: SegmentId, steps: usize) {
    let mut current = start;
    for _ in 0..steps {
        links[current].visits += 1;
        links[current].is_active = false;
        let Some(next) = links.next(current) else {
            break;
        };
        working[next].chain_label = working[current].chain_label;
        current = next;
    }
}

fn walk_cycle(working: &mut WorkingSet<'_>, links: &mut Links, start: SegmentId) {
    if !links[start].is_active {
        return;
    }
    let mut current = start;
    loop {
        links[current].visits += 1;
        links[current].is_active = false;
        let Some(next) = links.next(current) else {
            break;
        };
        if !links[next].is_active {
            break;
        }
        working[next].chain_label = working[current].chain_label;
        current = next;
    }
}
