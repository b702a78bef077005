use crate::errors::PathPlannerError;
use super::{SearchMap, NO_PARENT};

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path from start to goal along with the goal's cost
/// node_map: SearchMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &SearchMap<N, C>, goal_index: usize) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Clone,
    C: Copy,
{

    let (_, &(_, cost)) = node_map.get_index(goal_index).ok_or(PathPlannerError::NoPathExists)?;

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, the start node has no parent
    while current_index != NO_PARENT {
        // A path can never be longer than the number of discovered nodes
        if path.len() > node_map.len() {
            return Err(PathPlannerError::NoPathExists);
        }

        let (node, &(parent_index, _)) = node_map.get_index(current_index).ok_or(PathPlannerError::NoPathExists)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok((path, cost))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::FxIndexMap;

    #[test]
    fn test_shortest_path_reconstruction() {
        let mut node_map: SearchMap<String, u32> = FxIndexMap::default();

        let a_index = node_map.insert_full("A".to_string(), (NO_PARENT, 0)).0;
        let b_index = node_map.insert_full("B".to_string(), (a_index, 1)).0;
        let c_index = node_map.insert_full("C".to_string(), (a_index, 3)).0;
        let d_index = node_map.insert_full("D".to_string(), (c_index, 4)).0;

        let (path, cost) = shortest_path(&node_map, d_index).unwrap();
        assert_eq!(path, vec!["A", "C", "D"]);
        assert_eq!(cost, 4);

        let (path, cost) = shortest_path(&node_map, b_index).unwrap();
        assert_eq!(path, vec!["A", "B"]);
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_shortest_path_start_only() {
        let mut node_map: SearchMap<&str, u32> = FxIndexMap::default();
        let a_index = node_map.insert_full("A", (NO_PARENT, 0)).0;

        assert_eq!(shortest_path(&node_map, a_index), Ok((vec!["A"], 0)));
    }

    #[test]
    fn test_shortest_path_bad_index() {
        let node_map: SearchMap<&str, u32> = FxIndexMap::default();
        assert_eq!(shortest_path(&node_map, 3), Err(PathPlannerError::NoPathExists));
    }

    #[test]
    fn test_shortest_path_parent_cycle_does_not_hang() {
        let mut node_map: SearchMap<&str, u32> = FxIndexMap::default();
        node_map.insert("A", (1, 0));
        node_map.insert("B", (0, 1));

        assert_eq!(shortest_path(&node_map, 1), Err(PathPlannerError::NoPathExists));
    }
}
