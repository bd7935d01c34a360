#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use torus_life::{Grid, GridEngine, Palette, Rasterizer, Rules};

    const SEED: u64 = 42;

    /// Straightforward rendition of the rules with `rem_euclid` wrapping.
    fn reference_step(grid: &Grid, rules: &Rules) -> Grid {
        let n = grid.size() as i64;
        let mut next = Grid::blank(grid.size()).unwrap();
        for row in 0..n {
            for column in 0..n {
                let mut neibs = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx, dy) == (0, 0) {
                            continue;
                        }
                        let (r, c) = ((row + dy).rem_euclid(n), (column + dx).rem_euclid(n));
                        neibs += grid.get(r as usize, c as usize) as u8;
                    }
                }
                let state = rules.next_state(grid.get(row as usize, column as usize), neibs);
                next.set(row as usize, column as usize, state);
            }
        }
        next
    }

    /// Moves every cell by `(dr, dc)` with wraparound.
    fn shifted(grid: &Grid, dr: usize, dc: usize) -> Grid {
        let n = grid.size();
        let mut result = Grid::blank(n).unwrap();
        for row in 0..n {
            for column in 0..n {
                result.set((row + dr) % n, (column + dc) % n, grid.get(row, column));
            }
        }
        result
    }

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..12).prop_flat_map(|n| {
            prop::collection::vec(0u8..2, n * n).prop_map(move |cells| {
                let rows = cells.chunks(n).map(|r| r.to_vec()).collect::<Vec<_>>();
                Grid::from_rows(&rows).unwrap()
            })
        })
    }

    fn rules_strategy() -> impl Strategy<Value = Rules> {
        (0u8..=8, 0u8..=8)
            .prop_flat_map(|(reanimate, under)| {
                (Just(reanimate), Just(under), under + 1..=9)
            })
            .prop_map(|(reanimate, under, over)| Rules::new(reanimate, under, over).unwrap())
    }

    #[test]
    fn test_consistency_with_reference() {
        const N: usize = 64;
        const DENSITY: f64 = 0.7;

        let rules = Rules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut engine = GridEngine::new(N, rules).unwrap();
        engine.seed(N, DENSITY, false, &mut rng).unwrap();

        let mut expected = engine.grid().clone();
        for generation in 0..N {
            expected = reference_step(&expected, &rules);
            engine.step();
            assert_eq!(engine.grid(), &expected, "generation {}", generation + 1);
        }
    }

    #[test]
    fn test_glider_wraps_around() {
        let rules = Rules::default();
        let glider = Grid::from_rows(&[
            [0u8, 1, 0, 0, 0, 0],
            [0, 0, 1, 0, 0, 0],
            [1, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let mut engine = GridEngine::from_grid(glider.clone(), rules).unwrap();
        // a glider moves one cell diagonally every 4 generations
        for _ in 0..4 * 6 {
            engine.step();
            assert_eq!(engine.population(), 5);
        }
        assert_eq!(engine.grid(), &glider);
    }

    proptest! {
        #[test]
        fn step_matches_reference(grid in grid_strategy(), rules in rules_strategy()) {
            let mut engine = GridEngine::from_grid(grid.clone(), rules).unwrap();
            prop_assert_eq!(engine.step(), &reference_step(&grid, &rules));
        }

        #[test]
        fn step_commutes_with_toroidal_shift(
            grid in grid_strategy(),
            dr in 0usize..12,
            dc in 0usize..12,
        ) {
            let rules = Rules::default();
            prop_assert_eq!(
                shifted(&grid, dr, dc).next_generation(&rules),
                shifted(&grid.next_generation(&rules), dr, dc)
            );
        }

        #[test]
        fn render_is_deterministic(grid in grid_strategy(), canvas in 1usize..64) {
            let rasterizer = Rasterizer::new(canvas, Palette::default()).unwrap();
            let first = rasterizer.render(&grid);
            prop_assert_eq!(first.pixels().len(), canvas * canvas);
            prop_assert_eq!(rasterizer.render(&grid), first);
        }
    }
}
