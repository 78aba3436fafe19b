//! Query facade: name resolution, search, route reconstruction

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::routing::dijkstra::shortest_path_tree;
use crate::{Error, Time, TransitNetwork};

/// Fastest route between two stations, with its total travel time.
///
/// `stations` runs from `start` to `end` inclusive; consecutive
/// entries are always directly connected in the queried network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    pub start: String,
    pub end: String,
    pub total_time: Time,
    pub stations: Vec<String>,
}

impl std::fmt::Display for RouteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stations.iter().join(" → "))
    }
}

/// Finds the fastest route between two named stations.
///
/// Runs a full single-source search from `start` and walks the
/// predecessor tree back from `end`. Each call is self-contained;
/// nothing is cached between queries.
///
/// # Errors
///
/// Returns [`Error::UnknownStation`] when either name is not in the
/// network, and [`Error::NoRoute`] when `end` cannot be reached from
/// `start`.
pub fn find_route(network: &TransitNetwork, start: &str, end: &str) -> Result<RouteResult, Error> {
    let start_index = network
        .station_index(start)
        .ok_or_else(|| Error::UnknownStation(start.to_string()))?;
    let end_index = network
        .station_index(end)
        .ok_or_else(|| Error::UnknownStation(end.to_string()))?;

    let tree = shortest_path_tree(network, start_index);

    let Some(total_time) = tree.travel_time_to(end_index) else {
        return Err(Error::NoRoute {
            from: start.to_string(),
            to: end.to_string(),
        });
    };
    let route = tree.route_to(end_index).unwrap_or_default();

    let stations: Vec<String> = route
        .iter()
        .map(|&index| network.station_name(index).unwrap_or_default().to_string())
        .collect();

    debug!(
        "Route {start} -> {end}: {total_time} through {} stations",
        stations.len()
    );

    Ok(RouteResult {
        start: start.to_string(),
        end: end.to_string(),
        total_time,
        stations,
    })
}
