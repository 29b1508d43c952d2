/// Cell represents the fundamental unit of the universe.
/// Each cell is either Dead or Alive, stored as a single byte.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Glyph used by the text export for a live cell
    pub const ALIVE_GLYPH: char = '◼';
    /// Glyph used by the text export for a dead cell
    pub const DEAD_GLYPH: char = '◻';

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23 given the number of live Moore neighbors:
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Live cell with more than 3 neighbors dies
    /// 4. Dead cell with exactly 3 neighbors becomes alive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, n) if n < 2 => Cell::Dead,
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_GLYPH,
            Cell::Dead => Self::DEAD_GLYPH,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_alive(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead_otherwise() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "{} neighbors", n);
        }
    }

    #[test]
    fn test_toggle_and_glyphs() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_ne!(Cell::Alive.glyph(), Cell::Dead.glyph());
        assert_eq!(Cell::Alive as u8, 1);
        assert_eq!(Cell::default(), Cell::Dead);
        assert_eq!(Cell::from(true), Cell::Alive);
    }
}
