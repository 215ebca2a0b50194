use std::fmt;

use rand::{seq::SliceRandom, Rng};

/// A single slide, named for the direction the blank travels.
///
/// Declaration order is the order `Board::neighbors` emits successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable snapshot of an N-by-N sliding puzzle.
///
/// Cells hold a permutation of 0..N*N with 0 as the blank. Every
/// transformation returns a fresh board; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<u32>>,
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// The canonical goal arrangement: tiles in row-major ascending order,
    /// blank in the last cell.
    pub fn goal(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size);
        let mut value = 1;

        for row in 0..size {
            let mut cols = Vec::with_capacity(size);
            for col in 0..size {
                if row == size - 1 && col == size - 1 {
                    cols.push(0); // the blank is represented by 0
                } else {
                    cols.push(value);
                    value += 1;
                }
            }
            cells.push(cols);
        }

        Self {
            size,
            cells,
            blank_row: size - 1,
            blank_col: size - 1,
        }
    }

    /// Build a board from a square grid of cell values.
    ///
    /// The grid must be a permutation of 0..N*N; validation belongs to the
    /// input layer, not here.
    pub fn from_grid(cells: Vec<Vec<u32>>) -> Self {
        let size = cells.len();
        let mut blank_row = 0;
        let mut blank_col = 0;

        for (row, cols) in cells.iter().enumerate() {
            for (col, &value) in cols.iter().enumerate() {
                if value == 0 {
                    blank_row = row;
                    blank_col = col;
                }
            }
        }

        Self {
            size,
            cells,
            blank_row,
            blank_col,
        }
    }

    fn from_flat(size: usize, flat: &[u32]) -> Self {
        let cells = flat.chunks(size).map(|chunk| chunk.to_vec()).collect();
        Self::from_grid(cells)
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Number of tiles out of place.
    ///
    /// Counts every cell whose value differs from its row-major expectation,
    /// then subtracts one: the blank never equals its expectation, so this
    /// leaves exactly the misplaced tiles.
    pub fn hamming(&self) -> u32 {
        let mut out_of_place = 0;
        let mut expected = 1;

        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row][col] != expected {
                    out_of_place += 1;
                }
                expected += 1;
            }
        }

        out_of_place - 1
    }

    /// Sum of per-tile grid distances to the goal position, blank excluded.
    pub fn manhattan(&self) -> u32 {
        let mut distance = 0;

        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.cells[row][col];
                if value != 0 {
                    let target_row = (value - 1) as usize / self.size;
                    let target_col = (value - 1) as usize % self.size;
                    distance += row.abs_diff(target_row) as u32;
                    distance += col.abs_diff(target_col) as u32;
                }
            }
        }

        distance
    }

    pub fn is_goal(&self) -> bool {
        let mut expected = 1;

        for row in 0..self.size {
            for col in 0..self.size {
                if row == self.size - 1 && col == self.size - 1 {
                    if self.cells[row][col] != 0 {
                        return false;
                    }
                } else {
                    if self.cells[row][col] != expected {
                        return false;
                    }
                    expected += 1;
                }
            }
        }

        true
    }

    /// A board with the first adjacent non-blank pair (row-major scan)
    /// swapped.
    ///
    /// A board and its twin can never both be solvable, which is what lets
    /// the solver decide solvability by racing the two searches. Boards
    /// smaller than 2x2 have no such pair and come back unchanged.
    pub fn twin(&self) -> Self {
        let mut cells = self.cells.clone();

        for row in 0..self.size {
            for col in 0..self.size.saturating_sub(1) {
                if cells[row][col] != 0 && cells[row][col + 1] != 0 {
                    cells[row].swap(col, col + 1);
                    return Self {
                        size: self.size,
                        cells,
                        blank_row: self.blank_row,
                        blank_col: self.blank_col,
                    };
                }
            }
        }

        self.clone()
    }

    /// Apply one slide, or `None` if the blank would leave the grid.
    pub fn slide(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();

        let row = self.blank_row as isize + dr;
        let col = self.blank_col as isize + dc;
        if row < 0 || col < 0 || row >= self.size as isize || col >= self.size as isize {
            return None;
        }

        let row = row as usize;
        let col = col as usize;
        let mut cells = self.cells.clone();
        cells[self.blank_row][self.blank_col] = cells[row][col];
        cells[row][col] = 0;

        Some(Self {
            size: self.size,
            cells,
            blank_row: row,
            blank_col: col,
        })
    }

    /// All boards one slide away, emitted in up, left, down, right order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Move::ALL.iter().filter_map(|&movement| self.slide(movement))
    }

    /// Inversion-parity solvability test.
    ///
    /// Odd N: solvable iff the inversion count is even. Even N: solvable iff
    /// inversions plus the blank's row index is odd.
    pub fn parity_solvable(&self) -> bool {
        let flat: Vec<u32> = self
            .cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();
        let inversions = Self::count_inversions(&flat);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank_row) % 2 == 1
        }
    }

    fn count_inversions(flat: &[u32]) -> usize {
        flat.iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }

    /// A uniformly shuffled solvable board: reshuffle until the parity test
    /// passes.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut flat: Vec<u32> = (0..(size * size) as u32).collect();

        loop {
            flat.shuffle(rng);
            let board = Self::from_flat(size, &flat);
            if board.parity_solvable() {
                return board;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in &self.cells {
            for &value in row {
                write!(f, "{:2} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
