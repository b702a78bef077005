use crate::errors::PathPlannerError;
use crate::graph::{Graph, Location};
use super::dijkstra::dijkstra;

use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use tracing::debug;


/// Successful shortest path query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<C> {
    pub path: Vec<Location>, // start to end inclusive
    pub distance: C, // sum of the path weights along `path`
}


/// Shortest path queries over a campus graph
/// Borrows the graph for the duration of a query and never mutates it
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder;

impl PathFinder {

    /// Minimum total weight route from start to end
    /// Fails with UnknownLocation when start or end is not on the map
    /// and with NoPathExists when they sit in disjoint parts of the map
    pub fn shortest_path<C>(&self, graph: &Graph<C>, start: &str, end: &str) -> Result<Route<C>, PathPlannerError>
    where
        C: Zero + Ord + Copy + CheckedAdd + Debug,
    {
        for location in [start, end] {
            if !graph.contains(location) {
                return Err(PathPlannerError::UnknownLocation(location.to_string()));
            }
        }

        if start == end {
            return Ok(Route {
                path: vec![start.to_string()],
                distance: C::zero(),
            });
        }

        debug!(start, end, "searching for shortest path");

        // start and end are checked above and every neighbor entry names a registered
        // location, so the lookup never fails and flatten drops nothing
        let result = dijkstra(
            start,
            |node| graph.neighbors(node).into_iter().flatten().map(|(neighbor, weight)| (neighbor.as_str(), *weight)),
            |node| *node == end,
        );

        let (path, distance) = match result {
            Ok(found) => found,
            Err(PathPlannerError::NoPathExists) => {
                debug!(start, end, "no path between locations");
                return Err(PathPlannerError::NoPathExists);
            }
            Err(e) => return Err(e),
        };

        debug!(start, end, ?distance, hops = path.len() - 1, "found shortest path");

        Ok(Route {
            path: path.into_iter().map(str::to_string).collect(),
            distance,
        })
    }
}
