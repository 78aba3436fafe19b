//! Dijkstra shortest-path search over the station graph

mod state;
mod tree;
mod weights;

pub use tree::{ShortestPathTree, shortest_path_tree};
pub use weights::travel_times;
