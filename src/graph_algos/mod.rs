pub mod dijkstra;
mod path_finder;
mod shortest_path;

pub use path_finder::{PathFinder, Route};
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map built while searching
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known total cost to reach this node from the start
pub(crate) type SearchMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;
