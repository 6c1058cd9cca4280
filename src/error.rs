use thiserror::Error;

/// Errors reported by the containers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    NotFound,
    /// The container already holds the maximum number of elements.
    #[error("capacity exceeded: container cannot hold more than {max} elements")]
    CapacityExceeded { max: usize },
}
