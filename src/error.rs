//! Error types returned by the checked and fallible APIs.

use alloc::{collections::TryReserveError, string::String};

/// Result type used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by [`BitVector`](crate::BitVector) operations.
///
/// The infallible methods never return these: they take `usize` indices and
/// abort on allocation failure like the standard collections. The `try_*`
/// methods surface both conditions to the caller instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bit index was negative or did not fit in `usize`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing store could not be grown. The bit vector is unchanged.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Converts a caller supplied index into a bit position.
pub(crate) fn bit_index<I>(index: I) -> Result<usize>
where
    I: TryInto<usize> + Copy + core::fmt::Display,
{
    index.try_into().map_err(|_| {
        Error::invalid_argument(alloc::format!("bit index {index} is not a valid position"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn negative_index_is_rejected() {
        let err = bit_index(-1i64).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "invalid argument: bit index -1 is not a valid position"
        );
    }

    #[test]
    fn non_negative_index_converts() {
        assert_eq!(bit_index(0i32), Ok(0));
        assert_eq!(bit_index(42u8), Ok(42));
        assert_eq!(bit_index(1_000_000i64), Ok(1_000_000));
    }

    #[test]
    fn reservation_failure_converts() {
        let mut v: alloc::vec::Vec<u64> = alloc::vec::Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(Error::from(err), Error::OutOfMemory(_)));
    }
}
