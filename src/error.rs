//! Error type for trie operations.

use thiserror::Error;

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`HybridTrie`](crate::HybridTrie).
///
/// Only argument validation can fail. Every query on an empty trie is valid and
/// returns a neutral value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A word or a word list was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    pub(crate) const EMPTY_WORD: Error = Error::InvalidArgument("word must not be empty");
    pub(crate) const EMPTY_WORD_LIST: Error =
        Error::InvalidArgument("word list must not be empty");
    pub(crate) const EMPTY_WORD_IN_LIST: Error =
        Error::InvalidArgument("word list must not contain empty words");
}
