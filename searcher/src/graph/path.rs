use std::fmt;

use super::Cost;

/// A walk through the graph, from an origin to a destination.
///
/// Stores the nodes in order along with the cost of each edge
/// taken between consecutive nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<N> {
    pub(crate) nodes: Vec<N>,
    pub(crate) costs: Vec<Cost>,
}

impl<N> GraphPath<N> {
    pub fn new(origin: N) -> Self {
        Self {
            nodes: vec![origin],
            costs: Vec::new(),
        }
    }

    /// Number of edges in this path.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// True when the path never leaves its origin.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub(crate) fn push(&mut self, node: N, cost: Cost) {
        self.nodes.push(node);
        self.costs.push(cost);
    }

    pub fn origin(&self) -> &N {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Sum of the edge costs along the path.
    pub fn weight(&self) -> Cost {
        self.costs.iter().sum()
    }

    /// Iterate over `(from, to, cost)` for each edge in the path.
    pub fn steps(&self) -> impl Iterator<Item = (&N, &N, Cost)> + '_ {
        self.nodes
            .windows(2)
            .zip(self.costs.iter())
            .map(|(pair, &cost)| (&pair[0], &pair[1], cost))
    }
}

impl<N> fmt::Display for GraphPath<N>
where
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.nodes.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{}", first)?;
        }
        for node in nodes {
            write!(f, " -> {}", node)?;
        }
        Ok(())
    }
}
