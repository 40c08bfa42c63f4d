//! Wireframe edge extraction
//!
//! Two hypercube vertices are joined by an edge exactly when their 4D
//! Euclidean distance is the minimal one (2.0 in this coordinate scaling).
//! The threshold sits above that but below the next-shortest diagonal
//! (2·√2 ≈ 2.83), so the scan selects precisely the 32 graph edges for any
//! rotation. Rotation is distance-preserving, so no per-angle tuning is
//! needed.

use wire4d_math::Vec4;

/// Distance cutoff selecting the 32 true edges of the unit hypercube
pub const DEFAULT_EDGE_THRESHOLD: f64 = 2.1;

/// Number of edges of the hypercube
pub const EDGE_COUNT: usize = 32;

/// Find all unordered vertex pairs closer than `threshold`
///
/// Exhaustive O(N²) scan; pairs come out as ascending `(i, j)` with i < j,
/// in scan order. For N = 16 clarity wins over cleverness, and the scan
/// order makes the output stable for a given input.
pub fn find_edges(points: &[Vec4], threshold: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].distance(points[j]) < threshold {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypercube::{Hypercube, RotationSpec};
    use wire4d_math::Plane;

    #[test]
    fn test_unrotated_hypercube_has_32_edges() {
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), DEFAULT_EDGE_THRESHOLD);
        assert_eq!(edges.len(), EDGE_COUNT);
    }

    #[test]
    fn test_edges_connect_adjacent_vertices_only() {
        // In binary-counting order, true edges differ in exactly one bit
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), DEFAULT_EDGE_THRESHOLD);
        for (i, j) in edges {
            assert_eq!((i ^ j).count_ones(), 1,
                "pair ({}, {}) is not a hypercube edge", i, j);
        }
    }

    #[test]
    fn test_every_vertex_has_four_neighbors() {
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), DEFAULT_EDGE_THRESHOLD);

        let mut degree = [0usize; 16];
        for (i, j) in edges {
            degree[i] += 1;
            degree[j] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }

    #[test]
    fn test_edge_count_is_rotation_invariant() {
        let cube = Hypercube::unit();
        let spec = RotationSpec::new(vec![Plane::XW, Plane::YW, Plane::ZW], 17.0);
        let rotated = cube.rotated(&spec);
        let edges = find_edges(&rotated, DEFAULT_EDGE_THRESHOLD);
        assert_eq!(edges.len(), EDGE_COUNT);
    }

    #[test]
    fn test_threshold_below_edge_length_finds_nothing() {
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), 1.9);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_threshold_above_diagonal_overselects() {
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), 2.9);
        assert!(edges.len() > EDGE_COUNT);
    }

    #[test]
    fn test_pairs_are_ascending_and_unique() {
        let cube = Hypercube::unit();
        let edges = find_edges(cube.vertices(), DEFAULT_EDGE_THRESHOLD);

        for &(i, j) in &edges {
            assert!(i < j);
        }
        let mut sorted = edges.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), edges.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_edges(&[], DEFAULT_EDGE_THRESHOLD).is_empty());
    }
}
