use thiserror::Error;

/// Errors raised while building a campus graph
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown location: {0}")]
    UnknownLocation(String), // Location was never registered
    #[error("invalid weight {0}: weights must be non-negative")]
    InvalidWeight(String), // Negative edge weight
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("unknown location: {0}")]
    UnknownLocation(String), // Start or end is not on the map
    #[error("no path exists")]
    NoPathExists, // Start and end sit in disjoint components
    #[error("path distance overflowed the weight type")]
    DistanceOverflow,
}
