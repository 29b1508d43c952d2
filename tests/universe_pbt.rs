use proptest::prelude::*;
use toroidal_life::{Cell, SeedStrategy, Universe, UniverseError};

prop_compose! {
    fn arb_seed()(
        seed in any::<u64>(),
        density in 0.0f64..=1.0
    ) -> SeedStrategy {
        SeedStrategy::Random { seed, density }
    }
}

prop_compose! {
    fn arb_universe()(
        width in 1u32..24,
        height in 1u32..24,
        seed in arb_seed()
    ) -> Universe {
        Universe::with_seed(width, height, &seed).unwrap()
    }
}

/// Straightforward signed-offset count, independent of the engine's own
fn reference_neighbors(universe: &Universe, row: u32, col: u32) -> u8 {
    let (w, h) = (universe.width() as i64, universe.height() as i64);
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = (row as i64 + dr).rem_euclid(h) as u32;
            let c = (col as i64 + dc).rem_euclid(w) as u32;
            count += universe.get_cell(r, c).unwrap() as u8;
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_tick_is_deterministic(universe in arb_universe(), generations in 0usize..12) {
        let mut a = universe.clone();
        let mut b = universe;
        for _ in 0..generations {
            a.tick();
            b.tick();
        }
        prop_assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_render_dimensions(mut universe in arb_universe(), generations in 0usize..4) {
        for _ in 0..generations {
            universe.tick();
        }
        let rendered = universe.render();
        let lines: Vec<&str> = rendered.lines().collect();

        prop_assert_eq!(lines.len(), universe.height() as usize);
        for line in lines {
            prop_assert_eq!(line.chars().count(), universe.width() as usize);
            prop_assert!(line.chars().all(|ch| ch == Cell::ALIVE_GLYPH || ch == Cell::DEAD_GLYPH));
        }
    }

    #[test]
    fn test_neighbor_count_in_range_and_wrapped(universe in arb_universe()) {
        for row in 0..universe.height() {
            for col in 0..universe.width() {
                let count = universe.live_neighbor_count(row, col).unwrap();
                prop_assert!(count <= 8);
                prop_assert_eq!(count, reference_neighbors(&universe, row, col));
            }
        }
    }

    #[test]
    fn test_tick_applies_rule_to_every_cell(universe in arb_universe()) {
        let mut next = universe.clone();
        next.tick();

        for row in 0..universe.height() {
            for col in 0..universe.width() {
                let current = universe.get_cell(row, col).unwrap();
                let expected = current.evolve(reference_neighbors(&universe, row, col));
                prop_assert_eq!(next.get_cell(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial(universe in arb_universe(), generations in 1usize..6) {
        let mut serial = universe.clone();
        let mut parallel = universe;
        for _ in 0..generations {
            serial.tick();
            parallel.tick_parallel();
        }
        prop_assert_eq!(serial, parallel);
    }

    #[test]
    fn test_mutation_is_seen_by_next_tick(
        universe in arb_universe(),
        row_frac in 0.0f64..1.0,
        col_frac in 0.0f64..1.0
    ) {
        let row = (row_frac * universe.height() as f64) as u32;
        let col = (col_frac * universe.width() as f64) as u32;

        let mut mutated = universe.clone();
        mutated.set_cell(row, col, true).unwrap();
        let snapshot = mutated.clone();
        mutated.tick();

        for r in 0..snapshot.height() {
            for c in 0..snapshot.width() {
                let current = snapshot.get_cell(r, c).unwrap();
                let expected = current.evolve(reference_neighbors(&snapshot, r, c));
                prop_assert_eq!(mutated.get_cell(r, c).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_rejected_without_change(
        mut universe in arb_universe(),
        extra_row in 0u32..5,
        extra_col in 0u32..5,
        alive in any::<bool>()
    ) {
        let before = universe.render();
        let (width, height) = universe.dimensions();

        let row_err = universe.set_cell(height + extra_row, 0, alive);
        prop_assert!(
            matches!(row_err, Err(UniverseError::IndexOutOfBounds { .. })),
            "expected IndexOutOfBounds, got {:?}",
            row_err
        );
        let col_err = universe.set_cell(0, width + extra_col, alive);
        prop_assert!(
            matches!(col_err, Err(UniverseError::IndexOutOfBounds { .. })),
            "expected IndexOutOfBounds, got {:?}",
            col_err
        );
        prop_assert_eq!(universe.render(), before);
    }

    #[test]
    fn test_zero_dimension_rejected(size in 1u32..1000) {
        prop_assert_eq!(
            Universe::new(0, size).unwrap_err(),
            UniverseError::InvalidDimensions { width: 0, height: size }
        );
        prop_assert_eq!(
            Universe::new(size, 0).unwrap_err(),
            UniverseError::InvalidDimensions { width: size, height: 0 }
        );
    }

    #[test]
    fn test_block_is_still_life(
        width in 4u32..20,
        height in 4u32..20,
        row_frac in 0.0f64..1.0,
        col_frac in 0.0f64..1.0,
        generations in 1usize..10
    ) {
        // Any anchor works on a torus at least 4 wide, even across the seams
        let row = (row_frac * height as f64) as u32;
        let col = (col_frac * width as f64) as u32;
        let mut universe = Universe::with_seed(width, height, &SeedStrategy::Empty).unwrap();
        for (dr, dc) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            universe.set_cell((row + dr) % height, (col + dc) % width, true).unwrap();
        }
        let block = universe.clone();

        for _ in 0..generations {
            universe.tick();
        }
        prop_assert_eq!(universe, block);
    }
}
