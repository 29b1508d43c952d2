use std::fmt::{self, Write as _};

use rayon::prelude::*;

use super::{Cell, Result, SeedStrategy, UniverseError};

/// Universe owns a fixed-size toroidal grid of cells.
///
/// Cells live in one contiguous row-major buffer indexed `row * width + col`.
/// A second buffer of the same length receives each new generation and is
/// swapped in once the whole pass has finished, so a generation is never
/// read while it is being overwritten.
#[derive(Clone, Debug)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Universe {
    /// Create a universe seeded with the reference pattern
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_seed(width, height, &SeedStrategy::Reference)
    }

    /// Create a universe using an explicit seed strategy
    pub fn with_seed(width: u32, height: u32, seed: &SeedStrategy) -> Result<Self> {
        let mut cells = Self::alloc_cells(width, height)?;
        let scratch = Self::alloc_cells(width, height)?;
        seed.fill(&mut cells);
        tracing::debug!(width, height, seed = seed.name(), "creating universe");

        Ok(Self { width, height, cells, scratch })
    }

    /// Create a universe whose cell at `(row, col)` is alive when `f` says so
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Result<Self> {
        let mut cells = Self::alloc_cells(width, height)?;
        let scratch = Self::alloc_cells(width, height)?;
        for (line, row) in cells.chunks_mut(width as usize).zip(0..height) {
            for (cell, col) in line.iter_mut().zip(0..width) {
                *cell = Cell::from_alive(f(row, col));
            }
        }
        tracing::debug!(width, height, seed = "fn", "creating universe");

        Ok(Self { width, height, cells, scratch })
    }

    /// Allocate one all-dead buffer, rejecting sizes that cannot be allocated
    fn alloc_cells(width: u32, height: u32) -> Result<Vec<Cell>> {
        let invalid = UniverseError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Dead);
        Ok(cells)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to the row-major index
    const fn get_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(self.get_index(row, col))
        } else {
            Err(UniverseError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Raw cell states in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get_cell(&self, row: u32, col: u32) -> Result<Cell> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite a single cell. Out-of-range coordinates are rejected, not wrapped.
    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = Cell::from_alive(alive);
        Ok(())
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Count live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Overwrite every cell from `seed`, keeping the dimensions
    pub fn reseed(&mut self, seed: &SeedStrategy) {
        seed.fill(&mut self.cells);
        tracing::debug!(
            width = self.width,
            height = self.height,
            seed = seed.name(),
            "reseeded universe"
        );
    }

    /// Live Moore neighbors of `(row, col)` on the torus, always in `0..=8`
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8> {
        self.checked_index(row, col)?;
        Ok(neighbor_count(&self.cells, self.width, self.height, row, col))
    }

    /// Advance one generation (serial)
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;

        self.scratch
            .chunks_mut(width as usize)
            .zip(0..height)
            .for_each(|(out, row)| next_row(cells, width, height, row, out));

        std::mem::swap(&mut self.cells, &mut self.scratch);
        tracing::trace!(width, height, "advanced generation");
    }

    /// Advance one generation computing rows in parallel with rayon.
    /// Produces exactly the same grid as [`Universe::tick`].
    pub fn tick_parallel(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;

        self.scratch
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, out)| next_row(cells, width, height, row as u32, out));

        std::mem::swap(&mut self.cells, &mut self.scratch);
        tracing::trace!(width, height, "advanced generation (parallel)");
    }

    /// Text snapshot: `height` lines of `width` glyphs, each ending in `\n`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Count live neighbors using toroidal wrapping.
/// Offsets are skipped by position, not coordinate, so a 1-wide or 1-high
/// torus still sees 8 candidates (some of them the cell itself).
fn neighbor_count(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let rows = [
        row.checked_sub(1).unwrap_or(height - 1),
        row,
        if row + 1 == height { 0 } else { row + 1 },
    ];
    let cols = [
        col.checked_sub(1).unwrap_or(width - 1),
        col,
        if col + 1 == width { 0 } else { col + 1 },
    ];

    let mut count = 0u8;
    for (i, &r) in rows.iter().enumerate() {
        let base = r as usize * width as usize;
        for (j, &c) in cols.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            count += cells[base + c as usize] as u8;
        }
    }
    count
}

/// Write the next state of one row into `out`
fn next_row(cells: &[Cell], width: u32, height: u32, row: u32, out: &mut [Cell]) {
    let base = row as usize * width as usize;
    for (col, next) in (0..width).zip(out.iter_mut()) {
        let neighbors = neighbor_count(cells, width, height, row, col);
        *next = cells[base + col as usize].evolve(neighbors);
    }
}

impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Universe {}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
