use crate::errors::PathPlannerError;
use crate::collections::FxIndexMap;
use super::{shortest_path, SearchMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::{CheckedAdd, Zero};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path from start to goal and its total cost
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + CheckedAdd + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal)?;

    // A goal that was never settled is unreachable
    let goal_index = goal_index.ok_or(PathPlannerError::NoPathExists)?;
    shortest_path(&node_map, goal_index)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
/// Nodes missing from the map were never reached (infinite cost)
pub(crate) fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<(SearchMap<N, C>, Option<usize>), PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + CheckedAdd + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Frontier - binary heap sorts Biggest to Smallest, NodeId reverses the order
    // Superseded entries stay in the heap and are skipped when popped
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to NO_PARENT
    let mut nodes_map: SearchMap<N, C> = FxIndexMap::default();

    // Set when a candidate cost did not fit in C
    let mut saw_overflow = false;

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Check if we've reached the goal
        if goal_fn(node) {
            trace!(?node, ?cost, discovered = nodes_map.len(), "goal reached");
            return Ok((nodes_map, Some(index)));
        }

        // Stale entry - a cheaper route to this node was already expanded
        if cost > c {
            continue;
        }

        let node = node.clone();

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            // an overflowed candidate exceeds every representable cost and never improves the neighbor
            let Some(new_cost) = c.checked_add(&edge_cost) else {
                saw_overflow = true;
                continue;
            };

            let neighbor_index;

            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    // Equal cost keeps the first route found
                    if e.get().1 > new_cost {
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    trace!(discovered = nodes_map.len(), saw_overflow, "frontier exhausted");

    // Goal may only be reachable through a cost C cannot hold
    if saw_overflow {
        return Err(PathPlannerError::DistanceOverflow);
    }

    Ok((nodes_map, None))
}


/// Frontier entry
/// - for ordering we only need cost and a way to identify the node
/// - ordering is reversed so the BinaryHeap pops the cheapest entry first
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}
