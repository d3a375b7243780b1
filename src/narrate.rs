//! Step-by-step narration of a search, one line per expansion.

use std::io::{self, Write};

use searcher::Step;

fn list(nodes: &[&String]) -> String {
    nodes
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Write a single step of the search.
pub fn write_step(out: &mut dyn Write, step: &Step<'_, String>) -> io::Result<()> {
    if step.event.is_goal() {
        writeln!(
            out,
            "step {}: reached goal {} (visited {})",
            step.index,
            step.current,
            step.visited.len()
        )
    } else {
        writeln!(
            out,
            "step {}: expanded {} (visited {}, frontier {}: [{}])",
            step.index,
            step.current,
            step.visited.len(),
            step.frontier.len(),
            list(&step.frontier)
        )
    }
}
