use thiserror::Error;

/// Errors returned by this crate. The trees never fail; only callers handing the array routines
/// bounds that don't fit their input end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A search range that is reversed or runs past the end of the slice.
    #[error("invalid range {start}..{end} for a slice of length {len}")]
    InvalidRange {
        /// The requested (inclusive) start index.
        start: usize,
        /// The requested (exclusive) end index.
        end: usize,
        /// The length of the slice being searched.
        len: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
