//! Shortest-time routing over fixed transit networks
//!
//! A transit network is a set of named stations connected by travel-time
//! weighted links. This crate answers "what is the fastest route from A
//! to B" with Dijkstra's algorithm over an in-memory station graph:
//! every query runs a fresh single-source search and walks the
//! resulting predecessor tree backwards into an ordered route with its
//! total travel time.
//!
//! Networks are built programmatically through [`TransitNetwork`] or
//! ingested from JSON adjacency maps and CSV edge lists (see
//! [`loading`]). Queries go through [`routing::find_route`]; the lower
//! level solver and batch surfaces live in [`routing`] as well.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Station, TransitNetwork};
pub use routing::{RouteResult, ShortestPathTree, find_route};

/// Travel time between stations in the network's time unit
/// (the bundled sample data uses minutes).
pub type Time = u32;

/// Handle to a station inside a [`TransitNetwork`].
pub type StationIndex = petgraph::graph::NodeIndex;
