use thiserror::Error;

/// The only way an operation on a collection can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside the accepted range, or a stack or queue was
    /// popped or peeked while empty (reported as index 0 of length 0).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn empty() -> Self {
        Error::IndexOutOfRange { index: 0, len: 0 }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
