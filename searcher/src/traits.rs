use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::Step;

/// Anything which can name a node in a graph.
///
/// Node identifiers are copied into the frontier, the visited
/// list and the parent map, so they should be cheap to clone.
pub trait SearchNode: Debug + Clone + Eq + Hash {}

impl<T> SearchNode for T where T: Debug + Clone + Eq + Hash {}

/// Receives a snapshot of the search after every expansion.
///
/// Observers only ever see the search state through a shared
/// [Step], so they can render or record it but not change it.
pub trait Observer<N> {
    fn observe(&mut self, step: &Step<'_, N>);
}

/// Adapts a closure into an [Observer].
pub(crate) struct FnObserver<F>(pub(crate) F);

impl<N, F> Observer<N> for FnObserver<F>
where
    F: FnMut(&Step<'_, N>),
{
    fn observe(&mut self, step: &Step<'_, N>) {
        (self.0)(step)
    }
}

/// Collects every step as an owned record. Mostly useful in tests
/// and for callers which want to replay a search afterwards.
#[derive(Debug, Clone, Default)]
pub struct Recorder<N> {
    steps: Vec<Snapshot<N>>,
}

/// Owned copy of a [Step].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<N> {
    pub index: usize,
    pub current: N,
    pub goal_reached: bool,
    pub visited: Vec<N>,
    pub frontier: Vec<N>,
}

impl<N> Recorder<N> {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Snapshot<N>] {
        &self.steps
    }
}

impl<N> Observer<N> for Recorder<N>
where
    N: Clone,
{
    fn observe(&mut self, step: &Step<'_, N>) {
        self.steps.push(Snapshot {
            index: step.index,
            current: step.current.clone(),
            goal_reached: step.event.is_goal(),
            visited: step.visited.to_vec(),
            frontier: step.frontier.iter().map(|&n| n.clone()).collect(),
        });
    }
}

impl<N> Observer<N> for &mut Recorder<N>
where
    N: Clone,
{
    fn observe(&mut self, step: &Step<'_, N>) {
        (**self).observe(step)
    }
}
