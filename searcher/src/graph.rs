//! Graph datastructures.

use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;

mod edge;
mod parse;
mod path;

pub use edge::{Cost, Edge};
pub use parse::ParseGraphError;
pub use path::GraphPath;

use crate::traits::SearchNode;

/// Incrementally assembles a [Graph].
#[derive(Debug)]
pub struct GraphBuilder<N> {
    nodes: HashMap<N, Vec<Edge<N>>>,
    order: Vec<N>,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N> GraphBuilder<N>
where
    N: SearchNode,
{
    /// Create an empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Declaring a node twice keeps its edges.
    pub fn node(&mut self, node: N) -> &mut Self {
        if !self.nodes.contains_key(&node) {
            self.order.push(node.clone());
            self.nodes.insert(node, Vec::new());
        }
        self
    }

    /// Add a directed edge. Both endpoints become nodes of the graph,
    /// and edges leaving a node keep the order they were added in.
    pub fn edge(&mut self, from: N, to: N, cost: Cost) -> &mut Self {
        self.node(from.clone());
        self.node(to.clone());
        if let Some(edges) = self.nodes.get_mut(&from) {
            edges.push(Edge::new(to, cost));
        }
        self
    }

    /// Add a directed edge with unit cost.
    pub fn unit(&mut self, from: N, to: N) -> &mut Self {
        self.edge(from, to, 1)
    }

    pub fn build(&mut self) -> Graph<N> {
        Graph {
            nodes: std::mem::take(&mut self.nodes),
            order: std::mem::take(&mut self.order),
        }
    }
}

pub fn builder<N>() -> GraphBuilder<N>
where
    N: SearchNode,
{
    GraphBuilder::new()
}

/// A directed graph with weighted edges, stored as adjacency lists.
///
/// Each node's outgoing edges are kept in declaration order, which
/// decides how ties are broken between equally good paths.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: HashMap<N, Vec<Edge<N>>>,
    order: Vec<N>,
}

impl<N> Graph<N>
where
    N: SearchNode,
{
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in the order they were first declared.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Iterate through the edges leaving this node, in declaration order.
    ///
    /// Nodes without an adjacency list have no outgoing edges.
    pub fn edges(&self, node: &N) -> impl Iterator<Item = &Edge<N>> {
        self.nodes
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|edges| edges.len()).sum()
    }
}

impl<N> PartialEq for Graph<N>
where
    N: SearchNode,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<N> Eq for Graph<N> where N: SearchNode {}

impl<N> FromIterator<(N, Vec<(N, Cost)>)> for Graph<N>
where
    N: SearchNode,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, Cost)>)>>(iter: I) -> Self {
        let mut builder = GraphBuilder::new();
        for (node, edges) in iter {
            builder.node(node.clone());
            for (target, cost) in edges {
                builder.edge(node.clone(), target, cost);
            }
        }
        builder.build()
    }
}

impl<N> fmt::Display for Graph<N>
where
    N: SearchNode + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{}:", node)?;
            for edge in self.edges(node) {
                if edge.cost() == 1 {
                    write!(f, " {}", edge.target())?;
                } else {
                    write!(f, " {}={}", edge.target(), edge.cost())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_registers_targets() {
        let graph = builder().unit("S", "A").edge("A", "B", 3).build();

        assert_eq!(graph.len(), 3);
        assert!(graph.contains_node(&"B"));
        assert_eq!(graph.edges(&"B").count(), 0);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), vec!["S", "A", "B"]);
    }

    #[test]
    fn edges_keep_declaration_order() {
        let graph = builder()
            .edge("S", "D", 2)
            .edge("S", "A", 7)
            .unit("S", "B")
            .build();

        let targets: Vec<_> = graph.edges(&"S").map(|e| *e.target()).collect();
        assert_eq!(targets, vec!["D", "A", "B"]);
        let costs: Vec<_> = graph.edges(&"S").map(|e| e.cost()).collect();
        assert_eq!(costs, vec![2, 7, 1]);
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let graph: Graph<&str> = vec![("S", vec![("A", 1)])].into_iter().collect();
        assert_eq!(graph.edges(&"Q").count(), 0);
        assert!(!graph.contains_node(&"Q"));
    }

    #[test]
    fn from_adjacency() {
        let graph: Graph<&str> = vec![
            ("S", vec![("A", 5), ("B", 1)]),
            ("A", vec![("C", 1)]),
            ("B", vec![("C", 1)]),
        ]
        .into_iter()
        .collect();

        let expected = builder()
            .edge("S", "A", 5)
            .edge("S", "B", 1)
            .edge("A", "C", 1)
            .edge("B", "C", 1)
            .build();

        assert_eq!(graph, expected);
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn display() {
        let graph = builder()
            .edge("S", "A", 5)
            .unit("S", "B")
            .node("Z")
            .build();

        assert_eq!(graph.to_string(), "S: A=5 B\nA:\nB:\nZ:\n");
    }
}
