use crate::{GameError, Position, Result};
use itertools::Itertools;
use ndarray::{Array2, Zip};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Snapshot of a single cell as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    pub is_mine: bool,
    pub is_opened: bool,
    pub is_flagged: bool,
    pub mines_around: u8,
}

/// A square mine field. Mine layout is fixed at construction; the opened
/// grid only ever gains cells, and a cell is never opened and flagged at
/// the same time.
#[derive(Debug, Clone)]
pub struct MineField {
    mines: Array2<bool>,
    opened: Array2<bool>,
    flagged: Array2<bool>,
    grid_size: usize,
    mines_count: usize,
}

impl MineField {
    /// Creates a field with `mines_count` mines placed by the thread-local RNG.
    pub fn new(grid_size: usize, mines_count: usize) -> Result<Self> {
        Self::with_rng(grid_size, mines_count, &mut rand::thread_rng())
    }

    /// Creates a field, drawing mine coordinates from `rng`. Coordinates that
    /// already hold a mine are redrawn until `mines_count` distinct cells
    /// are mined.
    pub fn with_rng<R: Rng + ?Sized>(
        grid_size: usize,
        mines_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut field = Self::empty(grid_size, mines_count)?;

        let mut placed = 0;
        while placed < mines_count {
            let r = rng.gen_range(0..grid_size);
            let c = rng.gen_range(0..grid_size);

            if !field.mines[(r, c)] {
                field.mines[(r, c)] = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} field",
            mines_count,
            grid_size,
            grid_size
        );
        Ok(field)
    }

    /// Creates a field with an explicit mine layout.
    pub fn from_mines(grid_size: usize, mines: &[Position]) -> Result<Self> {
        let mut field = Self::empty(grid_size, mines.len())?;

        for &pos in mines {
            let idx = pos
                .to_index(grid_size)
                .ok_or(GameError::MineOutOfBounds(pos))?;
            if field.mines[idx] {
                return Err(GameError::DuplicateMine(pos));
            }
            field.mines[idx] = true;
        }

        Ok(field)
    }

    fn empty(grid_size: usize, mines_count: usize) -> Result<Self> {
        // Every cell must be addressable by a signed `Position`.
        if i32::try_from(grid_size).is_err() {
            return Err(GameError::GridTooLarge(grid_size));
        }
        if mines_count >= grid_size.saturating_mul(grid_size) {
            return Err(GameError::TooManyMines {
                grid_size,
                mines: mines_count,
            });
        }

        let shape = (grid_size, grid_size);
        Ok(Self {
            mines: Array2::from_elem(shape, false),
            opened: Array2::from_elem(shape, false),
            flagged: Array2::from_elem(shape, false),
            grid_size,
            mines_count,
        })
    }

    /// Opens a cell. Returns `false` without touching the field for
    /// coordinates outside the grid and for opened or flagged cells.
    /// Returns `false` after opening a mine (the round is lost), `true`
    /// otherwise. An empty cell (no adjacent mines) opens its whole
    /// connected empty region plus the numbered cells bordering it.
    pub fn open_cell(&mut self, pos: Position) -> bool {
        let Some(idx) = pos.to_index(self.grid_size) else {
            return false;
        };
        if self.opened[idx] || self.flagged[idx] {
            return false;
        }

        self.opened[idx] = true;

        if self.mines[idx] {
            return false;
        }

        if self.count_mines_around(pos) == 0 {
            let opened = self.open_empty_region(pos);
            log::trace!("flood from {:?} opened {} cells", pos, opened);
        }

        true
    }

    /// Work-list flood fill starting from an already-opened empty cell.
    /// Returns the number of cells it opened.
    fn open_empty_region(&mut self, start: Position) -> usize {
        let mut pending = vec![start];
        let mut opened = 0;

        while let Some(current) = pending.pop() {
            for neighbor in current.neighbors() {
                let Some(idx) = neighbor.to_index(self.grid_size) else {
                    continue;
                };
                if self.opened[idx] || self.flagged[idx] || self.mines[idx] {
                    continue;
                }

                self.opened[idx] = true;
                opened += 1;

                if self.count_mines_around(neighbor) == 0 {
                    pending.push(neighbor);
                }
            }
        }

        opened
    }

    /// Flips the flag on an unopened cell. Opened and out-of-range cells are
    /// left alone.
    pub fn toggle_flag(&mut self, pos: Position) {
        if let Some(idx) = pos.to_index(self.grid_size) {
            if !self.opened[idx] {
                self.flagged[idx] = !self.flagged[idx];
            }
        }
    }

    pub fn count_mines_around(&self, pos: Position) -> u8 {
        if pos.to_index(self.grid_size).is_none() {
            return 0;
        }

        pos.neighbors()
            .filter_map(|p| p.to_index(self.grid_size))
            .filter(|&idx| self.mines[idx])
            .count() as u8
    }

    /// True once every cell without a mine is open. Flags play no part.
    pub fn check_win(&self) -> bool {
        Zip::from(&self.mines)
            .and(&self.opened)
            .all(|&mine, &opened| mine || opened)
    }

    pub fn cell_state(&self, pos: Position) -> Result<CellState> {
        let idx = pos
            .to_index(self.grid_size)
            .ok_or(GameError::OutOfBounds(pos))?;

        Ok(CellState {
            is_mine: self.mines[idx],
            is_opened: self.opened[idx],
            is_flagged: self.flagged[idx],
            mines_around: self.count_mines_around(pos),
        })
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.to_index(self.grid_size).is_some()
    }

    pub fn is_mine(&self, pos: Position) -> bool {
        pos.to_index(self.grid_size).is_some_and(|idx| self.mines[idx])
    }

    pub fn is_opened(&self, pos: Position) -> bool {
        pos.to_index(self.grid_size).is_some_and(|idx| self.opened[idx])
    }

    pub fn is_flagged(&self, pos: Position) -> bool {
        pos.to_index(self.grid_size).is_some_and(|idx| self.flagged[idx])
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn mines_count(&self) -> usize {
        self.mines_count
    }

    pub fn opened_count(&self) -> usize {
        self.opened.iter().filter(|&&opened| opened).count()
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.iter().filter(|&&flagged| flagged).count()
    }

    pub fn mine_positions(&self) -> HashSet<Position> {
        self.positions().filter(|&pos| self.is_mine(pos)).collect()
    }

    /// All coordinates of the field in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.grid_size as i32;
        (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| Position::new(row, col))
    }
}

impl fmt::Display for MineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MineField: {size}x{size}, Mines: {}, Opened cells: {}",
            self.mines_count,
            self.opened_count(),
            size = self.grid_size
        )
    }
}
