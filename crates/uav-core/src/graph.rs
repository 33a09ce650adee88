//! Connectivity graph over the free cells of a grid.
//!
//! Nodes are free cells; undirected edges join 4-connected free neighbours.
//! There is a single builder, parameterized by the free-cell predicate, so the
//! flat and height-threshold modes share one code path.

use crate::grid::{Coordinate, GridMap};
use crate::traversal::TraversalRule;
use std::collections::HashMap;

/// Weight of a single grid step.
pub const STEP_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Coordinate,
    pub weight: u32,
}

/// Undirected weighted graph keyed by grid coordinate.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    adjacency: HashMap<Coordinate, Vec<Edge>>,
    edge_count: usize,
}

impl FlightGraph {
    /// Build the graph for `grid` under `rule` at the given threshold.
    pub fn build(grid: &GridMap, rule: TraversalRule, threshold: f64) -> Self {
        Self::build_with(grid, rule.with_threshold(threshold))
    }

    /// Build the graph using an arbitrary free-cell predicate.
    pub fn build_with<F>(grid: &GridMap, is_free: F) -> Self
    where
        F: Fn(i32) -> bool,
    {
        let (rows, cols) = grid.shape();
        let mut graph = FlightGraph::default();

        let free: Vec<bool> = grid.cells().map(|(_, value)| is_free(value)).collect();
        for (coord, _) in grid.cells() {
            if free[coord.row * cols + coord.col] {
                graph.adjacency.insert(coord, Vec::new());
            }
        }

        // Only look east and south so every pair is visited once.
        for (coord, _) in grid.cells() {
            if !free[coord.row * cols + coord.col] {
                continue;
            }
            if coord.col + 1 < cols && free[coord.row * cols + coord.col + 1] {
                graph.add_edge(coord, Coordinate::new(coord.row, coord.col + 1), STEP_WEIGHT);
            }
            if coord.row + 1 < rows && free[(coord.row + 1) * cols + coord.col] {
                graph.add_edge(coord, Coordinate::new(coord.row + 1, coord.col), STEP_WEIGHT);
            }
        }

        for edges in graph.adjacency.values_mut() {
            edges.sort_by_key(|edge| edge.to);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built flight graph for {}x{} grid",
            rows,
            cols
        );
        graph
    }

    fn add_edge(&mut self, a: Coordinate, b: Coordinate, weight: u32) {
        if let Some(edges) = self.adjacency.get_mut(&a) {
            edges.push(Edge { to: b, weight });
        }
        if let Some(edges) = self.adjacency.get_mut(&b) {
            edges.push(Edge { to: a, weight });
        }
        self.edge_count += 1;
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.adjacency.contains_key(&coord)
    }

    /// Neighbours of `coord` in lexicographic order (N, W, E, S).
    /// Empty for coordinates that are not nodes.
    pub fn neighbors(&self, coord: Coordinate) -> &[Edge] {
        self.adjacency
            .get(&coord)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge_weight(&self, from: Coordinate, to: Coordinate) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_has_every_cell_and_lattice_edges() {
        let grid = GridMap::filled(3, 4, 0).unwrap();
        let graph = FlightGraph::build(&grid, TraversalRule::Flat, 0.0);
        assert_eq!(graph.node_count(), 12);
        // rows * (cols - 1) + cols * (rows - 1)
        assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    }

    #[test]
    fn edges_are_not_duplicated() {
        let grid = GridMap::filled(2, 2, 0).unwrap();
        let graph = FlightGraph::build(&grid, TraversalRule::Flat, 0.0);
        assert_eq!(graph.edge_count(), 4);
        for (coord, _) in grid.cells() {
            assert_eq!(graph.neighbors(coord).len(), 2);
        }
    }

    #[test]
    fn blocked_cells_are_not_nodes() {
        let grid = GridMap::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        let graph = FlightGraph::build(&grid, TraversalRule::Flat, 0.0);
        assert!(!graph.contains(Coordinate::new(0, 1)));
        assert!(graph.neighbors(Coordinate::new(0, 1)).is_empty());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edge_weight(Coordinate::new(0, 0), Coordinate::new(1, 0)),
            Some(STEP_WEIGHT)
        );
        assert_eq!(
            graph.edge_weight(Coordinate::new(0, 0), Coordinate::new(0, 1)),
            None
        );
    }

    #[test]
    fn neighbors_are_sorted_lexicographically() {
        let grid = GridMap::filled(3, 3, 0).unwrap();
        let graph = FlightGraph::build(&grid, TraversalRule::Flat, 0.0);
        let order: Vec<Coordinate> = graph
            .neighbors(Coordinate::new(1, 1))
            .iter()
            .map(|edge| edge.to)
            .collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn height_threshold_admits_low_obstacles() {
        let grid = GridMap::from_rows(vec![vec![0, 5, 10]]).unwrap();
        let low = FlightGraph::build(&grid, TraversalRule::HeightThreshold, 6.0);
        assert!(low.contains(Coordinate::new(0, 1)));
        assert!(!low.contains(Coordinate::new(0, 2)));

        let high = FlightGraph::build(&grid, TraversalRule::HeightThreshold, 11.0);
        assert_eq!(high.node_count(), 3);
        assert_eq!(high.edge_count(), 2);
    }

    #[test]
    fn custom_predicate() {
        let grid = GridMap::from_rows(vec![vec![2, 4, 3]]).unwrap();
        let graph = FlightGraph::build_with(&grid, |value| value % 2 == 0);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
