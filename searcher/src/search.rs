use crate::algorithm::basic::{BreadthQueue, DepthQueue};
use crate::algorithm::uniform::UniformQueue;
use crate::algorithm::{SearchAlgorithm, SearchOptions, Step};
use crate::errors::Result;
use crate::graph::Graph;
use crate::result::SearchResult;
use crate::strategy::Strategy;
use crate::traits::{FnObserver, Observer, SearchNode};

/// Configures a single search over a borrowed graph.
///
/// The graph is only ever read, so any number of searchers can
/// share one graph at the same time.
pub struct Searcher<'a, N> {
    pub(crate) graph: &'a Graph<N>,
    pub(crate) strategy: Strategy,
    pub(crate) options: SearchOptions,
    pub(crate) observer: Option<Box<dyn Observer<N> + 'a>>,
    pub(crate) cancel: Option<Box<dyn FnMut(usize) -> bool + 'a>>,
}

impl<'a, N> Searcher<'a, N>
where
    N: SearchNode,
{
    pub fn new(graph: &'a Graph<N>, strategy: Strategy) -> Self {
        Searcher {
            graph,
            strategy,
            options: SearchOptions::default(),
            observer: None,
            cancel: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search.
    ///
    /// When this many nodes have been expanded without reaching
    /// the goal, the search will return an error.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.options.limit = Some(limit);
        self
    }

    /// Report every step of the search to an observer.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Observer<N> + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Report every step of the search to a closure.
    pub fn observe<F>(self, f: F) -> Self
    where
        F: FnMut(&Step<'_, N>) + 'a,
    {
        self.with_observer(FnObserver(f))
    }

    /// Check before each step whether the search should stop.
    ///
    /// The check receives the number of steps taken so far. Returning
    /// `true` ends the search with [crate::SearchError::Cancelled].
    pub fn with_cancel<C>(mut self, cancel: C) -> Self
    where
        C: FnMut(usize) -> bool + 'a,
    {
        self.cancel = Some(Box::new(cancel));
        self
    }

    /// Run the search to completion.
    pub fn run(self, start: N, goal: N) -> Result<SearchResult<N>> {
        match self.strategy {
            Strategy::BreadthFirst => {
                SearchAlgorithm::<N, BreadthQueue<N>>::new(self).run(start, goal)
            }
            Strategy::DepthFirst => SearchAlgorithm::<N, DepthQueue<N>>::new(self).run(start, goal),
            Strategy::UniformCost => {
                SearchAlgorithm::<N, UniformQueue<N>>::new(self).run(start, goal)
            }
        }
    }
}

/// Build a searcher for the given strategy.
pub fn build<N>(graph: &Graph<N>, strategy: Strategy) -> Searcher<'_, N>
where
    N: SearchNode,
{
    Searcher::new(graph, strategy)
}

/// Search `graph` for a path from `start` to `goal`.
///
/// Fails only when `start` is not a node of the graph. A goal which
/// cannot be reached produces a result which reports nothing found.
pub fn search<N>(
    graph: &Graph<N>,
    start: N,
    goal: N,
    strategy: Strategy,
) -> Result<SearchResult<N>>
where
    N: SearchNode,
{
    build(graph, strategy).run(start, goal)
}
