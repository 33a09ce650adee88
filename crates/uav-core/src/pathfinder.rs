//! Shortest-path search over a [`FlightGraph`].
//!
//! Dijkstra with a binary heap. Edge weights are uniform today, but the search
//! does not rely on that. Ties are broken deterministically: the heap orders by
//! `(cost, coordinate)`, neighbours are relaxed in lexicographic order, and a
//! predecessor is only replaced by a strictly cheaper one.

use crate::graph::FlightGraph;
use crate::grid::Coordinate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Ordered cells from start to goal, both inclusive. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Coordinate>);

impl Path {
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges traversed.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.0.contains(&coord)
    }
}

/// Search outcome with bookkeeping used for logging.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Option<Path>,
    pub cost: Option<u64>,
    pub nodes_visited: usize,
}

/// Shortest path from `start` to `goal`, or `None` when they are not
/// connected or either is not a node of the graph.
pub fn shortest_path(graph: &FlightGraph, start: Coordinate, goal: Coordinate) -> Option<Path> {
    search(graph, start, goal).path
}

/// Run the search and report how many nodes were settled.
pub fn search(graph: &FlightGraph, start: Coordinate, goal: Coordinate) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult {
            path: None,
            cost: None,
            nodes_visited: 0,
        };
    }

    let mut open_set: BinaryHeap<Reverse<(u64, Coordinate)>> = BinaryHeap::new();
    let mut closed_set: HashSet<Coordinate> = HashSet::new();
    let mut g_score: HashMap<Coordinate, u64> = HashMap::new();
    let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::new();

    g_score.insert(start, 0);
    open_set.push(Reverse((0, start)));

    let mut nodes_visited = 0usize;
    let mut final_cost = None;

    while let Some(Reverse((cost, current))) = open_set.pop() {
        if !closed_set.insert(current) {
            continue;
        }
        nodes_visited += 1;

        if current == goal {
            final_cost = Some(cost);
            break;
        }

        for edge in graph.neighbors(current) {
            if closed_set.contains(&edge.to) {
                continue;
            }
            let tentative = cost + u64::from(edge.weight);
            if tentative < g_score.get(&edge.to).copied().unwrap_or(u64::MAX) {
                g_score.insert(edge.to, tentative);
                came_from.insert(edge.to, current);
                open_set.push(Reverse((tentative, edge.to)));
            }
        }
    }

    let Some(cost) = final_cost else {
        return SearchResult {
            path: None,
            cost: None,
            nodes_visited,
        };
    };

    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from.get(&current) {
        cells.push(*prev);
        current = *prev;
    }
    cells.reverse();

    SearchResult {
        path: Some(Path(cells)),
        cost: Some(cost),
        nodes_visited,
    }
}
