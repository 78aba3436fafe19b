//! Data model for the transit network
//!
//! Contains the station graph and its name index.

pub mod network;

pub use network::{Station, TransitNetwork};
