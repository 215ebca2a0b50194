//! Reads the textual puzzle format: the dimension N followed by N*N cell
//! values in row-major order, 0 for the blank. Tokens are separated by any
//! whitespace; anything after the last cell is ignored.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::{PuzzleError, Result};

pub fn read_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

pub fn parse_board(text: &str) -> Result<Board> {
    let mut tokens = text.split_whitespace();

    let dimension = match tokens.next() {
        Some(token) => parse_token(token)? as usize,
        None => return Err(PuzzleError::BadDimension(0)),
    };
    if dimension < 2 {
        return Err(PuzzleError::BadDimension(dimension));
    }

    let expected = dimension * dimension;
    let mut flat = Vec::with_capacity(expected);
    for token in tokens.by_ref().take(expected) {
        flat.push(parse_token(token)?);
    }
    if flat.len() < expected {
        return Err(PuzzleError::MissingCells {
            dimension,
            expected,
            found: flat.len(),
        });
    }

    // With the count right, range and uniqueness checks pin a permutation.
    let mut seen = vec![false; expected];
    for &value in &flat {
        if value as usize >= expected {
            return Err(PuzzleError::ValueOutOfRange { value, dimension });
        }
        if seen[value as usize] {
            return Err(PuzzleError::DuplicateValue(value));
        }
        seen[value as usize] = true;
    }

    let cells = flat.chunks(dimension).map(|chunk| chunk.to_vec()).collect();
    Ok(Board::from_grid(cells))
}

fn parse_token(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| PuzzleError::BadToken(token.to_string()))
}
