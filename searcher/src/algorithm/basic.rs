pub use bfs::{bfs, BreadthQueue};
pub use dfs::{dfs, DepthQueue};

mod bfs {
    use std::collections::{HashSet, VecDeque};
    use std::default::Default;

    use crate::algorithm::{Entry, Frontier};
    use crate::errors::Result;
    use crate::graph::Graph;
    use crate::result::SearchResult;
    use crate::search::Searcher;
    use crate::strategy::Strategy;
    use crate::traits::SearchNode;

    /// First-in, first-out frontier. A node is never queued twice.
    #[derive(Debug)]
    pub struct BreadthQueue<N> {
        queue: VecDeque<Entry<N>>,
        pending: HashSet<N>,
    }

    impl<N> Frontier<N> for BreadthQueue<N>
    where
        N: SearchNode,
    {
        fn pop(&mut self) -> Option<Entry<N>> {
            let entry = self.queue.pop_front()?;
            self.pending.remove(&entry.node);
            Some(entry)
        }

        fn push(&mut self, entry: Entry<N>) {
            self.pending.insert(entry.node.clone());
            self.queue.push_back(entry);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }

        fn admits(&self, node: &N) -> bool {
            !self.pending.contains(node)
        }

        fn pending(&self) -> Vec<&N> {
            self.queue.iter().map(|e| &e.node).collect()
        }
    }

    impl<N> Default for BreadthQueue<N> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
                pending: HashSet::new(),
            }
        }
    }

    fn build<N>(graph: &Graph<N>) -> Searcher<'_, N>
    where
        N: SearchNode,
    {
        Searcher::new(graph, Strategy::BreadthFirst)
    }

    /// Breadth-first search, where ties between equally short paths
    /// are broken by the order edges were declared in.
    pub fn bfs<N>(graph: &Graph<N>, start: N, goal: N) -> Result<SearchResult<N>>
    where
        N: SearchNode,
    {
        build(graph).run(start, goal)
    }
}

mod dfs {
    use std::collections::{HashSet, VecDeque};
    use std::default::Default;

    use crate::algorithm::{Entry, Frontier};
    use crate::errors::Result;
    use crate::graph::Graph;
    use crate::result::SearchResult;
    use crate::search::Searcher;
    use crate::strategy::Strategy;
    use crate::traits::SearchNode;

    /// Last-in, first-out frontier. A node is never stacked twice.
    #[derive(Debug)]
    pub struct DepthQueue<N> {
        queue: VecDeque<Entry<N>>,
        pending: HashSet<N>,
    }

    impl<N> Default for DepthQueue<N> {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
                pending: HashSet::new(),
            }
        }
    }

    impl<N> Frontier<N> for DepthQueue<N>
    where
        N: SearchNode,
    {
        fn pop(&mut self) -> Option<Entry<N>> {
            let entry = self.queue.pop_front()?;
            self.pending.remove(&entry.node);
            Some(entry)
        }

        fn push(&mut self, entry: Entry<N>) {
            self.pending.insert(entry.node.clone());
            self.queue.push_front(entry);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }

        fn admits(&self, node: &N) -> bool {
            !self.pending.contains(node)
        }

        fn pending(&self) -> Vec<&N> {
            self.queue.iter().map(|e| &e.node).collect()
        }
    }

    pub fn build<N>(graph: &Graph<N>) -> Searcher<'_, N>
    where
        N: SearchNode,
    {
        Searcher::new(graph, Strategy::DepthFirst)
    }

    /// Depth-first search. Children are stacked in declaration order,
    /// so the last edge declared is the first one followed.
    pub fn dfs<N>(graph: &Graph<N>, start: N, goal: N) -> Result<SearchResult<N>>
    where
        N: SearchNode,
    {
        build(graph).run(start, goal)
    }
}
