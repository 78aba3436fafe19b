use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("No route from {from} to {to}")]
    NoRoute { from: String, to: String },
    #[error("Invalid travel time {weight} on connection {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: i64,
    },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
