//! Generalized graph search: breadth-first, depth-first and uniform-cost
//! search over a directed graph, sharing one exploration loop.
//!
//! Build a [graph::Graph], then call [search] with a [Strategy], or use
//! [build] to attach an observer, a cancellation check or a step limit.

pub mod algorithm;
mod errors;
pub mod graph;
mod result;
mod search;
mod strategy;
mod traits;

pub use errors::Result;
pub use errors::SearchError;
pub use result::{SearchResult, Total};
pub use search::{build, search, Searcher};
pub use strategy::Strategy;
pub use traits::{Observer, Recorder, SearchNode, Snapshot};

pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::uniform::ucs;
pub use algorithm::{Event, SearchOptions, Step};
