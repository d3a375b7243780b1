use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use searcher::graph::{Graph, ParseGraphError};
use thiserror::Error;
use tracing::info;

use crate::demos::{self, Demo};

/// Where the graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Demo(&'static Demo),
}

impl Source {
    pub fn from_args(graph: Option<&str>, demo: &str) -> Result<Self, InputError> {
        Ok(match graph {
            Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
            None => Source::Demo(
                demos::get(demo).ok_or_else(|| InputError::DemoNotFound(demo.to_string()))?,
            ),
        })
    }

    /// The query a demo was written for, if any.
    pub fn canonical_query(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Source::Demo(demo) => Some((demo.start, demo.goal)),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Demo(demo) => format!("demo:{}", demo.name),
        }
    }

    fn text(&self) -> Result<String, InputError> {
        let mut text = String::new();
        match self {
            Source::Stdin => {
                io::stdin().read_to_string(&mut text)?;
            }
            Source::File(path) => {
                let mut f = File::open(path)
                    .map_err(|e| InputError::GraphNotFound(path.display().to_string(), e))?;
                f.read_to_string(&mut text)?;
            }
            Source::Demo(demo) => text.push_str(demo.text),
        }
        Ok(text)
    }

    /// Read and parse the graph.
    pub fn load(&self) -> Result<Graph<String>, InputError> {
        let graph: Graph<String> = self
            .text()?
            .parse()
            .map_err(|e| InputError::InvalidGraph(self.describe(), e))?;

        info!(
            source = %self.describe(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No demo graph named {0:?}")]
    DemoNotFound(String),

    #[error("Graph not found: {0}")]
    GraphNotFound(String, #[source] io::Error),

    #[error("Could not read graph")]
    ReadFailed(#[from] io::Error),

    #[error("Invalid graph in {0}")]
    InvalidGraph(String, #[source] ParseGraphError),

    #[error("START and GOAL are required when the graph is not a demo")]
    MissingQuery,
}
