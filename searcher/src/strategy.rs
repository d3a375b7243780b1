use std::fmt;
use std::str::FromStr;

use crate::errors::SearchError;

/// Frontier discipline used to pick the next node to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// First in, first out. Finds a path with the fewest edges.
    BreadthFirst,

    /// Last in, first out.
    DepthFirst,

    /// Cheapest accumulated cost first, earliest insertion breaking ties.
    /// Finds a cheapest path when edge costs are non-negative.
    UniformCost,
}

impl Strategy {
    pub fn all() -> [Strategy; 3] {
        [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::UniformCost,
        ]
    }

    /// Whether this strategy reports a path cost rather than a hop count.
    pub fn is_cost_aware(self) -> bool {
        self == Strategy::UniformCost
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::UniformCost => "uniform-cost",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase().replace('_', "-");
        Ok(match token.as_str() {
            "bfs" | "breadth-first" => Strategy::BreadthFirst,
            "dfs" | "depth-first" => Strategy::DepthFirst,
            "ucs" | "uniform-cost" => Strategy::UniformCost,
            _ => return Err(SearchError::InvalidStrategy(s.to_string())),
        })
    }
}
