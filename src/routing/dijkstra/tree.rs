use std::collections::BinaryHeap;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::{Time, TransitNetwork};

/// Single-source shortest-path tree produced by [`shortest_path_tree`].
///
/// Distances and predecessors cover settled nodes only; a node absent
/// from the distance map is unreachable from the start.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: NodeIndex,
    distances: HashMap<NodeIndex, Time>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl ShortestPathTree {
    /// The node the search started from.
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Minimal cumulative travel time to `end`, or `None` when `end`
    /// cannot be reached from the start.
    pub fn travel_time_to(&self, end: NodeIndex) -> Option<Time> {
        self.distances.get(&end).copied()
    }

    /// Shortest route from the start to `end`, or `None` when `end`
    /// cannot be reached from the start.
    ///
    /// The route always begins with the start node; asking for the
    /// start itself yields a single-node route.
    pub fn route_to(&self, end: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.distances.contains_key(&end) {
            return None;
        }

        // Walk the predecessor chain once to size the allocation.
        let mut route_len = 1;
        let mut current = end;
        while let Some(&previous) = self.predecessors.get(&current) {
            route_len += 1;
            current = previous;
        }

        // Follow predecessors backward from `end`, then flip the result.
        let mut route = Vec::with_capacity(route_len);
        current = end;
        while current != self.start {
            route.push(current);
            match self.predecessors.get(&current) {
                Some(&previous) => current = previous,
                None => break,
            }
        }
        route.push(self.start);
        route.reverse();

        Some(route)
    }
}

/// Runs Dijkstra's algorithm from `start` over the whole network.
///
/// Settles every node reachable from `start` with its minimal
/// cumulative travel time and its predecessor on one shortest route.
/// The network is not mutated; all search state is allocated fresh for
/// this call. `start` must be a node of `network`.
pub fn shortest_path_tree(network: &TransitNetwork, start: NodeIndex) -> ShortestPathTree {
    let estimated_nodes = network.station_count();
    let mut distances: HashMap<NodeIndex, Time> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale entries: a shorter path to this node was already settled
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in network.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + *edge.weight();

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    ShortestPathTree {
        start,
        distances,
        predecessors,
    }
}
