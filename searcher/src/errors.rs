use thiserror::Error;

/// Error produced when a search cannot be carried out.
///
/// An unreachable goal is not an error: the search completes and
/// reports that nothing was found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Start node {0} is not in the graph")]
    InvalidStart(String),

    #[error("Unknown search strategy: {0:?}")]
    InvalidStrategy(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Search cancelled after {0} steps")]
    Cancelled(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
