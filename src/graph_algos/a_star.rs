use crate::collections::FxIndexMap;
use super::frontier::Queued;
use super::{GraphNodeMap, NO_PARENT};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {

    /// Traverses the graph from `start` until a node meets the goal criteria
    /// Optimal as long as the heuristic is admissible and consistent
    ///
    /// Returns a map of nodes with their best known costs and parents, along with
    /// the index of the goal node if it was reached. The map is authoritative:
    /// a node whose cost improves while it is still queued gets a fresh heap entry,
    /// and the stale one is skipped when popped.
    ///
    /// `visit` is called once for every node expanded.
    pub fn build_graph<N, C, IT, NN, H, G, V>(
        &self,
        start: N,
        neighbors: NN,
        heuristic_fn: H,
        goal_fn: G,
        mut visit: V,
    ) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // heuristic function
        G: Fn(&N) -> bool, // Returns true if goal is met
        V: FnMut(&N),
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic), ties by insertion order
        let mut open_list: BinaryHeap<Queued<C>> = BinaryHeap::new();
        let mut pushed = 0;

        // Best known (parent_index, cost) per node, for the start node
        // parent_index is NO_PARENT
        let mut closed_list: GraphNodeMap<N, C> = FxIndexMap::default();

        let start_f = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
        open_list.push(Queued {
            index: start_index,
            priority: start_f,
            seq: pushed,
        });
        // g of each heap entry, parallel to `seq`
        let mut queued_cost: Vec<C> = vec![Zero::zero()];

        while let Some(Queued { index, seq, .. }) = open_list.pop() {

            // fetch current best cost for node
            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // A better path to this node was found after this entry was queued
            if queued_cost[seq] > c {
                continue;
            }
            let node = node.clone();

            visit(&node);

            // Check if we've reached the goal
            if goal_fn(&node) {
                return (closed_list, Some(index));
            }

            // loop over neighbors
            for (neighbor, edge_cost) in neighbors(&node) {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = edge_cost + c;
                let h_cost: C = heuristic_fn(&neighbor);

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            // We've found a better path to this neighbor
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                pushed += 1;
                queued_cost.push(new_cost);
                open_list.push(Queued {
                    index: neighbor_index,
                    priority: new_cost + h_cost,
                    seq: pushed,
                });
            }
        }

        (closed_list, None)
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::{reconstruct_path, shortest_path};
    use std::collections::HashMap;

    // Helper function to create a neighbor function from a graph
    // Assumes data stored as: HashMap<String, Vec<(String, u32)>>
    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    /// A* algorithm test
    #[test]
    fn test_a_star() {
        // Diamond-shaped graph: A -> B -> D and A -> C -> D
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 3)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);

        // Simple zero heuristic (makes A* behave like Dijkstra)
        let heuristic = |_node: &String| 0;

        let (node_map, goal_index) = AStar.build_graph(
            "A".to_string(),
            neighbors,
            heuristic,
            |node| node == "D",
            |_| {},
        );

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(shortest_path(&node_map, goal_index.unwrap()), names(&["A", "C", "D"]));
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        // Create a graph with no path to the goal
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let neighbors = create_neighbor_fn(&graph);

        // Try to find a path from A to D (which doesn't exist)
        let (node_map, goal_index) = AStar.build_graph(
            "A".to_string(),
            neighbors,
            |_node: &String| 0,
            |node| node == "D",
            |_| {},
        );

        assert!(goal_index.is_none());
        assert!(reconstruct_path(&node_map, &"D".to_string()).is_empty());
    }

    #[test]
    fn test_build_a_star_graph_with_cycle() {
        // Create a graph with a cycle: A -> B -> C -> A
        let mut graph = HashMap::new();

        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let neighbors = create_neighbor_fn(&graph);

        let mut expanded = Vec::new();
        let (result, _) = AStar.build_graph(
            "A".to_string(),
            neighbors,
            |_node: &String| 0,
            |node| node == "D",
            |node| expanded.push(node.clone()),
        );

        // Verify costs
        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();

        assert_eq!(costs.get("A").unwrap(), &0);
        assert_eq!(costs.get("B").unwrap(), &1);
        assert_eq!(costs.get("C").unwrap(), &2);
        assert_eq!(costs.get("D").unwrap(), &4);

        // Going back to A never beats its zero cost, so nothing is expanded twice
        assert_eq!(expanded, names(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        // A reaches C directly at cost 10 and through B at cost 2;
        // the first C entry goes stale once the cheaper one is queued
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("C".to_string(), 10), ("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);

        let mut expanded = Vec::new();
        let (node_map, goal_index) = AStar.build_graph(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |_node: &String| 0,
            |_node: &String| false,
            |node| expanded.push(node.clone()),
        );

        assert!(goal_index.is_none());
        assert_eq!(expanded, names(&["A", "B", "C"]));
        assert_eq!(reconstruct_path(&node_map, &"C".to_string()), names(&["A", "B", "C"]));
    }

    #[test]
    fn test_a_star_with_heuristic() {
        // Create a simple grid-like graph where nodes are represented as (x, y) coordinates
        // A(0,0) -> B(1,0) -> D(2,0)
        //   |
        //   v
        // C(0,1) ------> D(2,0)
        //
        // Both routes cost 2; the heuristic ranks B ahead of C

        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        // Coordinates for each node
        let coords = HashMap::from([
            ("A".to_string(), (0i32, 0i32)),
            ("B".to_string(), (1i32, 0i32)),
            ("C".to_string(), (0i32, 1i32)),
            ("D".to_string(), (2i32, 0i32)),
        ]);

        let neighbors = create_neighbor_fn(&graph);

        // Manhattan distance heuristic
        let heuristic = |node: &String| {
            let (nx, ny) = coords.get(node).unwrap();
            let (gx, gy) = coords.get("D").unwrap(); // Goal is D
            ((nx - gx).abs() + (ny - gy).abs()) as u32
        };

        let (node_map, goal_index) = AStar.build_graph(
            "A".to_string(),
            neighbors,
            heuristic,
            |node| node == "D",
            |_| {},
        );

        // The expected path is A -> B -> D (the path guided by heuristic)
        assert_eq!(shortest_path(&node_map, goal_index.unwrap()), names(&["A", "B", "D"]));
    }
}
