use std::fmt;

use crate::graph::{Cost, GraphPath};
use crate::strategy::Strategy;

/// How far the goal turned out to be.
///
/// Breadth-first and depth-first search count edges, uniform-cost
/// search sums edge costs. The two are kept apart so a hop count is
/// never mistaken for a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Total {
    Hops(usize),
    Cost(Cost),

    /// The goal was not reached, standing in for an infinite distance.
    Unreachable,
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Hops(1) => write!(f, "1 hop"),
            Total::Hops(n) => write!(f, "{} hops", n),
            Total::Cost(c) => write!(f, "cost {}", c),
            Total::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Outcome of a search which ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N> {
    strategy: Strategy,
    path: Option<GraphPath<N>>,
    visited: Vec<N>,
}

impl<N> SearchResult<N> {
    pub(crate) fn reached(strategy: Strategy, path: GraphPath<N>, visited: Vec<N>) -> Self {
        SearchResult {
            strategy,
            path: Some(path),
            visited,
        }
    }

    pub(crate) fn exhausted(strategy: Strategy, visited: Vec<N>) -> Self {
        SearchResult {
            strategy,
            path: None,
            visited,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Nodes from start to goal inclusive, or nothing when the goal
    /// was not reached.
    pub fn path(&self) -> &[N] {
        self.path.as_ref().map(|p| p.nodes()).unwrap_or(&[])
    }

    pub fn route(&self) -> Option<&GraphPath<N>> {
        self.path.as_ref()
    }

    /// Every node expanded, in the order it was expanded.
    pub fn visited(&self) -> &[N] {
        &self.visited
    }

    /// Number of edges in the path found.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len())
    }

    /// Sum of edge costs along the path found.
    pub fn cost(&self) -> Option<Cost> {
        self.path.as_ref().map(|p| p.weight())
    }

    pub fn total(&self) -> Total {
        match &self.path {
            None => Total::Unreachable,
            Some(path) if self.strategy.is_cost_aware() => Total::Cost(path.weight()),
            Some(path) => Total::Hops(path.len()),
        }
    }
}
