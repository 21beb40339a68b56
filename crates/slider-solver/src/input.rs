//! Reading boards from text.
//!
//! Two formats are accepted:
//!
//! - the plain format: the dimension N followed by N*N whitespace-separated
//!   labels in row-major order, 0 for the blank;
//! - a JSON array of rows, e.g. `[[1,2],[3,0]]`.
//!
//! Unlike `Board` itself, this layer rejects grids whose labels are not a
//! permutation of `0..N*N`.

use std::fs;
use std::path::Path;

use log::debug;

use crate::board::Board;
use crate::error::{InputError, Result};

/// Parse a board, detecting JSON by a leading `[`
pub fn parse_board(input: &str) -> Result<Board> {
    let trimmed = input.trim_start();
    let board = if trimmed.starts_with('[') {
        debug!("parsing board as JSON");
        serde_json::from_str::<Board>(trimmed)?
    } else {
        parse_plain(trimmed)?
    };

    if !board.is_permutation() {
        let max = board.dimension() * board.dimension() - 1;
        return Err(InputError::NotPermutation { max });
    }
    Ok(board)
}

/// Read and parse a board file
pub fn read_board_file(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    debug!("reading board from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_board(&content)
}

fn parse_plain(input: &str) -> Result<Board> {
    let mut numbers = Vec::new();
    for (index, token) in input.split_whitespace().enumerate() {
        let value = token.parse::<u32>().map_err(|source| InputError::Token {
            index,
            value: token.to_string(),
            source,
        })?;
        numbers.push(value);
    }

    let (&dim, tiles) = numbers.split_first().ok_or(InputError::Empty)?;
    let dim = dim as usize;
    if dim == 0 {
        return Err(InputError::ZeroDimension);
    }
    let expected = dim * dim;
    if tiles.len() != expected {
        return Err(InputError::TileCount {
            dim,
            expected,
            got: tiles.len(),
        });
    }

    let rows = tiles.chunks(dim).map(|row| row.to_vec()).collect::<Vec<_>>();
    Ok(Board::try_from(rows)?)
}
