/// Weight carried by an edge. Costs are never negative.
pub type Cost = usize;

/// A directed edge to `target`, as stored in an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    target: N,
    cost: Cost,
}

impl<N> Edge<N> {
    pub fn new(target: N, cost: Cost) -> Self {
        Edge { target, cost }
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}
