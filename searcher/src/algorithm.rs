//! Provides the building blocks for search algorithms

use std::collections::{HashMap, HashSet};
use std::default::Default;

use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::graph::{Cost, Graph, GraphPath};
use crate::result::SearchResult;
use crate::search::Searcher;
use crate::strategy::Strategy;
use crate::traits::{Observer, SearchNode};

pub(crate) mod basic;
pub(crate) mod uniform;

/// A node waiting in the frontier, along with the accumulated cost
/// of the walk which discovered it and the node it was discovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<N> {
    pub node: N,
    pub cost: Cost,
    pub parent: Option<N>,
}

impl<N> Entry<N> {
    fn origin(node: N) -> Self {
        Entry {
            node,
            cost: 0,
            parent: None,
        }
    }
}

/// Trait used to implement the frontier of nodes which
/// are waiting to be expanded.
///
/// The frontier decides both which entry comes out next and
/// whether a newly discovered node should go in at all.
pub trait Frontier<N>: Default {
    fn pop(&mut self) -> Option<Entry<N>>;

    fn push(&mut self, entry: Entry<N>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Should a node discovered by the current expansion be pushed?
    fn admits(&self, node: &N) -> bool;

    /// Nodes currently waiting, in the order they would be popped.
    fn pending(&self) -> Vec<&N>;
}

/// What happened in a single step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A node was expanded and its children went into the frontier.
    Expanded,

    /// The goal was popped from the frontier. This is the last step.
    GoalReached,
}

impl Event {
    pub fn is_goal(self) -> bool {
        self == Event::GoalReached
    }
}

/// Read-only view of the search, handed to an [Observer] after
/// every expansion.
#[derive(Debug)]
pub struct Step<'s, N> {
    /// Zero-based count of expansions before this one.
    pub index: usize,
    pub event: Event,
    pub current: &'s N,
    /// Every node expanded so far, including `current`.
    pub visited: &'s [N],
    /// Nodes waiting to be expanded, in the order they will be popped.
    pub frontier: Vec<&'s N>,
}

/// Options which apply to any search strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of nodes to expand before giving up.
    pub limit: Option<usize>,

    /// Log progress periodically while searching.
    pub verbose: bool,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        if self.current >= self.maximum {
            return Err(SearchError::StepLimitExhausted(self.current));
        }
        self.current += 1;
        Ok(())
    }
}

#[derive(Debug)]
struct Parent<N> {
    node: Option<N>,
    cost: Cost,
}

/// Implementation of search, using a generic frontier.
///
/// Every strategy shares this loop: pop an entry, drop it if the node
/// was already expanded, expand it, and push its children. Only the
/// frontier (F) differs between breadth-first, depth-first and
/// uniform-cost search.
pub(crate) struct SearchAlgorithm<'a, N, F>
where
    N: SearchNode,
    F: Frontier<N>,
{
    graph: &'a Graph<N>,
    strategy: Strategy,
    frontier: F,
    visited: Vec<N>,
    expanded: HashSet<N>,
    parents: HashMap<N, Parent<N>>,
    counter: Option<StepLimit>,
    verbose: bool,
    observer: Option<Box<dyn Observer<N> + 'a>>,
    cancel: Option<Box<dyn FnMut(usize) -> bool + 'a>>,
}

impl<'a, N, F> SearchAlgorithm<'a, N, F>
where
    N: SearchNode,
    F: Frontier<N>,
{
    pub(crate) fn new(searcher: Searcher<'a, N>) -> Self {
        SearchAlgorithm {
            graph: searcher.graph,
            strategy: searcher.strategy,
            frontier: F::default(),
            visited: Vec::new(),
            expanded: HashSet::new(),
            parents: HashMap::new(),
            counter: searcher.options.limit.map(StepLimit::new),
            verbose: searcher.options.verbose,
            observer: searcher.observer,
            cancel: searcher.cancel,
        }
    }

    /// Run the search to completion.
    pub(crate) fn run(mut self, start: N, goal: N) -> Result<SearchResult<N>> {
        let graph = self.graph;
        if !graph.contains_node(&start) {
            return Err(SearchError::InvalidStart(format!("{:?}", start)));
        }

        debug!(strategy = %self.strategy, start = ?start, goal = ?goal, "search started");
        self.frontier.push(Entry::origin(start));

        let mut n = 0;
        while let Some(entry) = self.frontier.pop() {
            if let Some(cancel) = self.cancel.as_mut() {
                if cancel(n) {
                    debug!(steps = n, "search cancelled");
                    return Err(SearchError::Cancelled(n));
                }
            }
            n += 1;

            // Several entries can name the same node when it was reached
            // along more than one walk. Only the first one out counts.
            if self.expanded.contains(&entry.node) {
                trace!(node = ?entry.node, cost = entry.cost, "discarding stale entry");
                continue;
            }

            if let Some(counter) = self.counter.as_mut() {
                counter.increment()?;
            }

            let Entry { node, cost, parent } = entry;
            trace!(node = ?node, cost, "expanding");
            self.expanded.insert(node.clone());
            self.visited.push(node.clone());
            self.parents.insert(
                node.clone(),
                Parent {
                    node: parent,
                    cost,
                },
            );

            if node == goal {
                self.notify(Event::GoalReached, &node);
                let path = self.reconstruct(&node);
                debug!(
                    strategy = %self.strategy,
                    hops = path.len(),
                    cost = path.weight(),
                    visited = self.visited.len(),
                    "goal reached"
                );
                return Ok(SearchResult::reached(self.strategy, path, self.visited));
            }

            for edge in graph.edges(&node) {
                let child = edge.target();
                if self.expanded.contains(child) || !self.frontier.admits(child) {
                    continue;
                }
                self.frontier.push(Entry {
                    node: child.clone(),
                    cost: cost.saturating_add(edge.cost()),
                    parent: Some(node.clone()),
                });
            }

            self.notify(Event::Expanded, &node);

            if self.verbose && n % 10_000 == 0 {
                debug!(
                    steps = n,
                    frontier = self.frontier.len(),
                    visited = self.visited.len(),
                    cost,
                    "searching"
                );
            }
        }

        debug!(
            strategy = %self.strategy,
            visited = self.visited.len(),
            "frontier exhausted without reaching the goal"
        );
        Ok(SearchResult::exhausted(self.strategy, self.visited))
    }

    fn notify(&mut self, event: Event, current: &N) {
        if let Some(observer) = self.observer.as_mut() {
            let step = Step {
                index: self.visited.len() - 1,
                event,
                current,
                visited: &self.visited,
                frontier: self.frontier.pending(),
            };
            observer.observe(&step);
        }
    }

    fn accumulated(&self, node: &N) -> Cost {
        self.parents.get(node).map(|p| p.cost).unwrap_or(0)
    }

    /// Walk the parent map back from the goal to the start.
    fn reconstruct(&self, goal: &N) -> GraphPath<N> {
        let mut trail = vec![goal];
        let mut current = goal;
        while let Some(Parent {
            node: Some(parent), ..
        }) = self.parents.get(current)
        {
            trail.push(parent);
            current = parent;
        }
        trail.reverse();

        let mut path = GraphPath::new(trail[0].clone());
        for pair in trail.windows(2) {
            let cost = self
                .accumulated(pair[1])
                .saturating_sub(self.accumulated(pair[0]));
            path.push(pair[1].clone(), cost);
        }
        path
    }
}
