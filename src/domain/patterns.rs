use super::{Result, Universe, UniverseError};

/// A named shape that can be stamped onto a universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u32, u32)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a pattern from (row, col) offsets of its alive cells
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let height = cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Self { name, description, width, height, cells }
    }

    /// Build from plaintext rows where `O` marks an alive cell
    pub fn from_plaintext(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .zip(0u32..)
            .flat_map(|(line, row)| {
                line.chars()
                    .zip(0u32..)
                    .filter(|&(ch, _)| ch == 'O')
                    .map(move |(_, col)| (row, col))
            })
            .collect();
        Self::new(name, description, cells)
    }

    /// Stamp the pattern with its top-left corner at `(row, col)`.
    /// Nothing is written unless every cell of the pattern fits.
    pub fn place_on(&self, universe: &mut Universe, row: u32, col: u32) -> Result<()> {
        let (width, height) = universe.dimensions();
        let targets = self
            .cells
            .iter()
            .map(|&(dr, dc)| {
                let (r, c) = (row.saturating_add(dr), col.saturating_add(dc));
                if r < height && c < width {
                    Ok((r, c))
                } else {
                    Err(UniverseError::IndexOutOfBounds { row: r, col: c, width, height })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        for (r, c) in targets {
            universe.set_cell(r, c, true)?;
        }
        tracing::debug!(pattern = self.name, row, col, "placed pattern");
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_plaintext(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                ".O.",
                "..O",
                "OOO",
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::from_plaintext("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    pub fn toad() -> Pattern {
        Pattern::from_plaintext(
            "Toad",
            "Oscillator (period 2)",
            &[
                ".OOO",
                "OOO.",
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::from_plaintext(
            "Beacon",
            "Oscillator (period 2)",
            &[
                "OO..",
                "O...",
                "...O",
                "..OO",
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::from_plaintext(
            "Pulsar",
            "Oscillator (period 3)",
            &[
                "..OOO...OOO..",
                ".............",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                "..OOO...OOO..",
                ".............",
                "..OOO...OOO..",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                ".............",
                "..OOO...OOO..",
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_plaintext(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                ".O..O",
                "O....",
                "O...O",
                "OOOO.",
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_plaintext(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                "........................O...........",
                "......................O.O...........",
                "............OO......OO............OO",
                "...........O...O....OO............OO",
                "OO........O.....O...OO..............",
                "OO........O...O.OO....O.O...........",
                "..........O.....O.......O...........",
                "...........O...O....................",
                "............OO......................",
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::from_plaintext(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                ".OO",
                "OO.",
                ".O.",
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_plaintext(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                ".O.....",
                "...O...",
                "OO..OOO",
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::from_plaintext("Block", "Still life", &["OO", "OO"])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
