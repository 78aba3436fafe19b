use std::collections::BinaryHeap;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::{Time, TransitNetwork};

/// Distance-only Dijkstra over the station graph.
///
/// Returns the travel time to every settled node. The search stops
/// early once `target` is popped, and entries beyond `cutoff` are never
/// expanded; both default to an unbounded full run. Used by the batch
/// surfaces where no route reconstruction is needed.
pub fn travel_times(
    network: &TransitNetwork,
    start: NodeIndex,
    target: Option<NodeIndex>,
    cutoff: Option<Time>,
) -> HashMap<NodeIndex, Time> {
    let mut distances: HashMap<NodeIndex, Time> =
        HashMap::with_capacity(network.station_count());
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        if target == Some(node) {
            break;
        }

        // Skip stale entries
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        if let Some(max) = cutoff {
            if cost > max {
                continue;
            }
        }

        for edge in network.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + *edge.weight();

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}
