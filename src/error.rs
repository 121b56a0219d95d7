use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Allocation failure: could not reserve {slots} buckets")]
    AllocationFailure { slots: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The probe sequence ran out without finding a free slot. Unreachable while `count < size`.
    #[error("Capacity exhausted: no free bucket among {size}")]
    CapacityExhausted { size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
