use super::Links;
use crate::error::TraversalError;
use crate::resolver::WorkingSet;
use tracing::{debug, info};

/// Forward pass over chains anchored at a junction.
///
/// A segment leaving a non-degree-2 node into a degree-2 node starts a walk.
/// Every segment reached takes the starting segment's chain label. Returns the
/// number of walks performed.
pub fn trace_chains(
    working: &mut WorkingSet<'_>,
    links: &mut Links,
) -> Result<usize, TraversalError> {
    for (_, link) in links.iter_mut() {
        link.is_active =
            link.target_degree == 2 && link.source_degree != 2 && link.next.is_some();
    }

    let limit = working.len();
    let mut walks = 0;

    while !links.active().is_empty() {
        for start in links.active() {
            if walks % 1024 == 0 {
                debug!("Active\t\t{:>8} segments", links.active().len());
            }
            links[start].is_active = false;
            links[start].visits += 1;

            let label = working[start].chain_label;
            let mut current = start;
            let mut steps = 0;
            while let Some(next) = links.next(current) {
                if next == start {
                    break;
                }
                steps += 1;
                if steps > limit {
                    return Err(TraversalError::UnterminatedChain {
                        colour: working[start].colour.to_string(),
                        steps,
                    });
                }
                working[next].chain_label = label;
                current = next;
                if links.next(current).is_some() {
                    links[current].visits += 1;
                }
            }
            walks += 1;
        }
    }

    info!("Processed\t{:>8} segments", working.len());
    Ok(walks)
}
