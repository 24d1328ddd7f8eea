//! Common test utilities for building edge networks.
use junction::prelude::*;

/// Builds an `EdgeSet` from `(id, source, target, length)` rows, using the
/// edge id as way id.
#[allow(dead_code)]
pub fn edge_set(rows: &[(i64, &str, &str, f64)]) -> EdgeSet {
    let edges = rows
        .iter()
        .map(|&(id, source, target, length)| Edge::new(id, source, target, length, id))
        .collect();
    EdgeSet::new(edges).expect("test edges must have unique ids")
}

/// `A -> B -> C -> D -> E`, each edge one way only.
///
/// A and E are dead ends (degree 1), B, C and D pass through.
#[allow(dead_code)]
pub fn create_chain() -> EdgeSet {
    edge_set(&[
        (1, "A", "B", 1.0),
        (2, "B", "C", 2.0),
        (3, "C", "D", 3.0),
        (4, "D", "E", 4.0),
    ])
}

/// A closed ring `A -> B -> C -> A` with no junction.
#[allow(dead_code)]
pub fn create_ring() -> EdgeSet {
    edge_set(&[
        (1, "A", "B", 1.0),
        (2, "B", "C", 2.0),
        (3, "C", "A", 4.0),
    ])
}

/// Three arms meeting at junction `J`:
///
/// ```text
/// A - B - J - C - D
///         |
///         E
/// ```
#[allow(dead_code)]
pub fn create_star() -> EdgeSet {
    edge_set(&[
        (1, "A", "B", 1.0),
        (2, "B", "J", 1.5),
        (3, "J", "C", 2.0),
        (4, "C", "D", 2.5),
        (5, "J", "E", 3.0),
    ])
}

/// Runs the default simplifier and returns its output edges.
#[allow(dead_code)]
pub fn simplify(edges: &EdgeSet) -> Vec<OutputEdge> {
    Simplifier::builder()
        .build()
        .simplify(edges)
        .expect("simplification failed")
        .edges
}

/// Finds the single output edge running `source -> target`.
#[allow(dead_code)]
pub fn find_chain<'a>(output: &'a [OutputEdge], source: &str, target: &str) -> &'a OutputEdge {
    let matches: Vec<_> = output
        .iter()
        .filter(|e| e.source == Key::from(source) && e.target == Key::from(target))
        .collect();
    assert_eq!(
        matches.len(),
        1,
        "expected exactly one chain {} -> {}, found {:?}",
        source,
        target,
        output
    );
    matches[0]
}

#[allow(dead_code)]
pub fn keys(names: &[&str]) -> Vec<Key> {
    names.iter().map(|&n| Key::from(n)).collect()
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
