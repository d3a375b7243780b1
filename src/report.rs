use std::fmt;

use searcher::{SearchResult, Total};

/// Human readable summary of one search.
#[derive(Debug)]
pub struct Report<'r> {
    pub start: &'r str,
    pub goal: &'r str,
    pub result: &'r SearchResult<String>,
}

impl<'r> fmt::Display for Report<'r> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(
            f,
            "{} search from {} to {}",
            result.strategy(),
            self.start,
            self.goal
        )?;

        match result.route() {
            Some(route) => writeln!(f, "  path: {}", route)?,
            None => writeln!(f, "  path: none, {} cannot be reached", self.goal)?,
        }

        match result.total() {
            Total::Cost(cost) => writeln!(
                f,
                "  total: cost {} over {} hops",
                cost,
                result.hops().unwrap_or(0)
            )?,
            total => writeln!(f, "  total: {}", total)?,
        }

        writeln!(
            f,
            "  visited {}: {}",
            result.visited().len(),
            result.visited().join(", ")
        )
    }
}
