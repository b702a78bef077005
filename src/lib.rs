//! Shortest path wayfinding over small weighted campus maps
//!
//! Build a [`Graph`] with `add_location` / `add_path`, then ask
//! [`PathFinder::shortest_path`] for the cheapest route between two locations.

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod campus;
pub mod assistant;

pub use errors::{GraphError, PathPlannerError};
pub use graph::{Graph, Location};
pub use graph_algos::{PathFinder, Route};
