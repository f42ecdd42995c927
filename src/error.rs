use thiserror::Error;

/// Error types for `DoubleBufferedList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DualBufError {
    /// Invalid parameters provided to `DoubleBufferedList::new`
    #[error("Invalid DoubleBufferedList initialization: {reason}")]
    InvalidInitialization {
        /// Description of why initialization failed
        reason: &'static str,
    },
    /// Index is beyond the live region of the list
    #[error("Index out of bounds: index {index} is beyond list length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the list (or of the destination, for copies)
        length: usize,
    },
    /// The list is full and cannot grow past the platform limit
    #[error("Capacity exhausted: list is full at the maximum capacity of {capacity} elements")]
    CapacityExhausted {
        /// Capacity the list is clamped to
        capacity: usize,
    },
}
