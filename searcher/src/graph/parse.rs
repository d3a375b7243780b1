//! Plain text adjacency format.
//!
//! Each line declares a node, then lists the edges leaving it:
//!
//! ```text
//! # comments run to the end of the line
//! S: A=5 B=1
//! A: C
//! C:
//! ```
//!
//! `TARGET=COST` gives an edge a cost, a bare `TARGET` costs 1.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::{Cost, Graph, GraphBuilder};

/// Error when parsing a graph from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGraphError {
    #[error("Line {0}: expected `NODE: EDGES...`")]
    MissingSeparator(usize),

    #[error("Line {0}: invalid edge {1:?}")]
    InvalidEdge(usize, String),

    #[error("Line {0}: invalid cost in edge {1:?}")]
    InvalidCost(usize, String),
}

fn parse_edge(lineno: usize, token: &str) -> Result<(String, Cost), ParseGraphError> {
    lazy_static! {
        static ref EDGE: Regex =
            Regex::new(r"^(?P<target>[^\s:=#]+)(?:=(?P<cost>\S*))?$").unwrap();
    };

    let cap = match EDGE.captures(token) {
        None => return Err(ParseGraphError::InvalidEdge(lineno, token.to_string())),
        Some(c) => c,
    };

    let cost = match cap.name("cost") {
        None => 1,
        Some(cost) => cost
            .as_str()
            .parse()
            .map_err(|_| ParseGraphError::InvalidCost(lineno, token.to_string()))?,
    };

    Ok((cap["target"].to_string(), cost))
}

impl FromStr for Graph<String> {
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref LINE: Regex =
                Regex::new(r"^\s*(?P<node>[^\s:=#]+)\s*:(?P<edges>.*)$").unwrap();
        };

        let mut builder = GraphBuilder::new();

        for (i, line) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            if line.trim().is_empty() {
                continue;
            }

            let cap = match LINE.captures(line) {
                None => return Err(ParseGraphError::MissingSeparator(lineno)),
                Some(c) => c,
            };

            let node = cap["node"].to_string();
            builder.node(node.clone());
            for token in cap["edges"].split_whitespace() {
                let (target, cost) = parse_edge(lineno, token)?;
                builder.edge(node.clone(), target, cost);
            }
        }

        Ok(builder.build())
    }
}
