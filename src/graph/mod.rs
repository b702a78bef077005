use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::fmt::Debug;
use num_traits::Zero;
use tracing::trace;


/// Name of a place on the map
pub type Location = String;


/// Undirected weighted graph stored as an adjacency list
/// Locations keep their insertion order, as do the neighbors of each location
/// C: weight of a path between two locations - must never be negative
#[derive(Clone, Debug)]
pub struct Graph<C = u32> {
    adjacency: FxIndexMap<Location, Vec<(Location, C)>>,
    path_count: usize,
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            path_count: 0,
        }
    }
}

impl<C> Graph<C>
where
    C: Zero + PartialOrd + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, no-op if it already exists
    pub fn add_location(&mut self, location: impl Into<Location>) {
        let location = location.into();
        if !self.adjacency.contains_key(&location) {
            trace!(%location, "adding location");
            self.adjacency.insert(location, Vec::new());
        }
    }

    /// Connect two registered locations in both directions
    /// Parallel paths are kept, the search relaxes through the cheapest one
    /// The graph is left untouched when an endpoint is unknown or the weight is negative
    pub fn add_path(&mut self, from: &str, to: &str, weight: C) -> Result<(), GraphError> {
        for location in [from, to] {
            if !self.adjacency.contains_key(location) {
                return Err(GraphError::UnknownLocation(location.to_string()));
            }
        }

        // Also rejects NaN for float-like weights
        if !(weight >= C::zero()) {
            return Err(GraphError::InvalidWeight(format!("{weight:?}")));
        }

        trace!(from, to, ?weight, "adding path");

        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.push((to.to_string(), weight));
        }
        if let Some(neighbors) = self.adjacency.get_mut(to) {
            neighbors.push((from.to_string(), weight));
        }
        self.path_count += 1;

        Ok(())
    }

    /// All registered locations in insertion order
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a location with the weight of the connecting path
    pub fn neighbors(&self, location: &str) -> Result<&[(Location, C)], GraphError> {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownLocation(location.to_string()))
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Number of registered locations
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected paths added, parallel paths counted individually
    pub fn path_count(&self) -> usize {
        self.path_count
    }
}
