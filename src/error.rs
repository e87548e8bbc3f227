//! Error types.

/// Errors reported by `RingBuffer` and `SequenceProducer`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// The requested capacity is not representable as a non-negative size.
    #[error("invalid capacity")]
    InvalidCapacity,

    /// An element was addressed outside `0..len`.
    #[error("index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange {
        /// The logical index that was requested.
        index: usize,
        /// Number of elements held when the access was made.
        len: usize,
    },

    /// `to_array` was called on a sequence that reports no length.
    #[error("cannot determine sequence length")]
    CannotDetermineLength,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidCapacity.to_string(), "invalid capacity");
        assert_eq!(Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
                   "index out of range: the len is 2 but the index is 4");
        assert_eq!(Error::CannotDetermineLength.to_string(),
                   "cannot determine sequence length");
    }
}
