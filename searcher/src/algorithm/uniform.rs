//! Uniform-cost search

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use crate::algorithm::{Entry, Frontier};
use crate::errors::Result;
use crate::graph::Graph;
use crate::result::SearchResult;
use crate::search::Searcher;
use crate::strategy::Strategy;
use crate::traits::SearchNode;

/// Wrapper for frontier entries which sorts appropriately
/// for uniform-cost search: cheapest first, then oldest first.
#[derive(Debug)]
struct UniformElement<N> {
    entry: Entry<N>,
    sequence: usize,
}

impl<N> UniformElement<N> {
    fn key(&self) -> (usize, usize) {
        (self.entry.cost, self.sequence)
    }
}

impl<N> PartialEq for UniformElement<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl<N> Eq for UniformElement<N> {}

impl<N> Ord for UniformElement<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl<N> PartialOrd for UniformElement<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue to always expand the cheapest known walk next.
///
/// A node reached along several walks gets one entry per walk. The
/// extra entries are left in the queue and skipped when they surface,
/// rather than searching the heap to lower an existing entry's cost.
#[derive(Debug)]
pub struct UniformQueue<N> {
    queue: BinaryHeap<UniformElement<N>>,
    sequence: usize,
}

impl<N> Default for UniformQueue<N> {
    fn default() -> Self {
        UniformQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<N> Frontier<N> for UniformQueue<N>
where
    N: SearchNode,
{
    fn pop(&mut self) -> Option<Entry<N>> {
        self.queue.pop().map(|e| e.entry)
    }

    fn push(&mut self, entry: Entry<N>) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.queue.push(UniformElement { entry, sequence });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn admits(&self, _node: &N) -> bool {
        true
    }

    fn pending(&self) -> Vec<&N> {
        let mut elements: Vec<&UniformElement<N>> = self.queue.iter().collect();
        elements.sort_by(|a, b| b.cmp(a));
        elements.into_iter().map(|e| &e.entry.node).collect()
    }
}

/// Build a uniform-cost searcher
pub fn build<N>(graph: &Graph<N>) -> Searcher<'_, N>
where
    N: SearchNode,
{
    Searcher::new(graph, Strategy::UniformCost)
}

/// Perform a uniform-cost search.
///
/// Uniform-cost search behaves like a breadth first search, but always
/// expands the cheapest walk found so far even when walks have varying
/// numbers of edges. The path returned is a cheapest one as long as no
/// edge has a negative cost.
pub fn ucs<N>(graph: &Graph<N>, start: N, goal: N) -> Result<SearchResult<N>>
where
    N: SearchNode,
{
    build(graph).run(start, goal)
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(node: &'static str, cost: usize) -> Entry<&'static str> {
        Entry {
            node,
            cost,
            parent: None,
        }
    }

    #[test]
    fn cheapest_first() {
        let mut queue = UniformQueue::default();
        queue.push(entry("A", 5));
        queue.push(entry("B", 1));
        queue.push(entry("C", 3));

        assert_eq!(queue.pending(), vec![&"B", &"C", &"A"]);
        assert_eq!(queue.pop().map(|e| e.node), Some("B"));
        assert_eq!(queue.pop().map(|e| e.node), Some("C"));
        assert_eq!(queue.pop().map(|e| e.node), Some("A"));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn ties_break_by_insertion() {
        let mut queue = UniformQueue::default();
        queue.push(entry("X", 2));
        queue.push(entry("Y", 2));
        queue.push(entry("Z", 2));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn keeps_duplicates() {
        let mut queue = UniformQueue::default();
        queue.push(entry("C", 6));
        assert!(queue.admits(&"C"));
        queue.push(entry("C", 2));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(entry("C", 2)));
        assert_eq!(queue.pop(), Some(entry("C", 6)));
    }
}
