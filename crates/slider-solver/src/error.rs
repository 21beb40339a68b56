//! Errors raised while reading boards.

use thiserror::Error;

use crate::board::ShapeError;

pub type Result<T> = std::result::Result<T, InputError>;

/// Errors raised while reading a board from text or JSON
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is empty")]
    Empty,

    #[error("invalid integer at token {index}: {value}")]
    Token {
        index: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("board dimension must be at least 1")]
    ZeroDimension,

    #[error("expected {expected} tiles for a {dim}x{dim} board, got {got}")]
    TileCount {
        dim: usize,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("tiles are not a permutation of 0..{max}")]
    NotPermutation { max: usize },
}
