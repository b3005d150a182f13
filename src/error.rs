//! Configuration errors. Board commands never fail, so this is only returned by constructors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("max depth must be at least 1, got {0}")]
    InvalidMaxDepth(u32),

    #[error("colour palette is empty")]
    EmptyPalette,

    #[error("board size {size} cannot be halved {splits} times")]
    IndivisibleSize { size: u32, splits: u32 },
}
