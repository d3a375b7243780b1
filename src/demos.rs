//! Graphs bundled with the binary.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

/// A built-in graph, with the query it was written to demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    pub name: &'static str,
    pub about: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub text: &'static str,
}

macro_rules! demo {
    ($name:tt, $start:tt, $goal:tt, $about:tt) => {
        (
            $name,
            Demo {
                name: $name,
                about: $about,
                start: $start,
                goal: $goal,
                text: include_str!(concat!("../graphs/", $name, ".txt")),
            },
        )
    };
}

lazy_static! {
    static ref DEMOS: BTreeMap<&'static str, Demo> = {
        let demos = vec![
            demo!("classroom", "S", "W", "search tree from the classroom exercise"),
            demo!("detour", "S", "C", "the cheap route takes a detour"),
            demo!("weighted", "S", "F", "weighted graph with cycles"),
        ];

        demos.into_iter().collect()
    };
}

pub const DEFAULT_DEMO: &str = "classroom";

pub fn get(name: &str) -> Option<&'static Demo> {
    DEMOS.get(name)
}

pub fn all() -> impl Iterator<Item = &'static Demo> {
    DEMOS.values()
}

#[cfg(test)]
mod test {
    use super::*;
    use searcher::graph::Graph;

    #[test]
    fn demos_parse() {
        for demo in all() {
            let graph: Graph<String> = demo.text.parse().unwrap();
            assert!(graph.contains_node(&demo.start.to_string()), "{}", demo.name);
            assert!(graph.contains_node(&demo.goal.to_string()), "{}", demo.name);
        }
    }

    #[test]
    fn classroom() {
        let demo = get(DEFAULT_DEMO).unwrap();
        let graph: Graph<String> = demo.text.parse().unwrap();
        assert_eq!(graph.len(), 32);
        assert_eq!(graph.edge_count(), 31);
    }

    #[test]
    fn unknown() {
        assert!(get("maze").is_none());
    }
}
