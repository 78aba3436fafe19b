//! Routing algorithms and the query surface

pub mod dijkstra;
pub mod matrix;
pub mod route;

// Re-export main interfaces
pub use dijkstra::{ShortestPathTree, shortest_path_tree, travel_times};
pub use matrix::{one_to_many_travel_times, travel_time_matrix};
pub use route::{RouteResult, find_route};
