mod grid;
mod neighbors;
mod rules;

pub use grid::Grid;
pub use neighbors::NeighborCounts;
pub use rules::Rules;

use crate::Result;
use rand::Rng;
use tracing::debug;

/// Owns the field and evolves it one generation at a time.
///
/// The next generation is written into a second buffer which is then swapped in,
/// so every cell sees the neighbor counts of the same (previous) generation.
pub struct GridEngine {
    cells_curr: Grid,
    cells_next: Grid,
    neighbors: NeighborCounts,
    rules: Rules,
}

impl GridEngine {
    /// Creates a blank `size x size` field; fails if `size == 0` or `rules` are malformed.
    pub fn new(size: usize, rules: Rules) -> Result<Self> {
        rules.validate()?;
        Self::from_grid(Grid::blank(size)?, rules)
    }

    /// Takes over an existing field; fails if `rules` are malformed.
    pub fn from_grid(grid: Grid, rules: Rules) -> Result<Self> {
        rules.validate()?;
        let neighbors = NeighborCounts::compute(&grid);
        Ok(Self {
            cells_next: grid.clone(),
            cells_curr: grid,
            neighbors,
            rules,
        })
    }

    /// Replaces the field with a new `size x size` one.
    ///
    /// With `fill_mode` every cell is dead, otherwise cells are alive with
    /// probability `1 - density`. On error the current field is kept.
    pub fn seed<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        density: f64,
        fill_mode: bool,
        rng: &mut R,
    ) -> Result<&Grid> {
        if fill_mode && size == self.size() {
            self.cells_curr.clear();
            self.cells_next.clear();
            debug!(size, "cleared field");
            return Ok(&self.cells_curr);
        }
        let grid = if fill_mode {
            Grid::blank(size)?
        } else {
            Grid::random(size, density, rng)?
        };
        debug!(size, fill_mode, population = grid.population(), "seeded field");
        self.cells_next = grid.clone();
        self.cells_curr = grid;
        Ok(&self.cells_curr)
    }

    /// Counts live neighbors of every cell of the current generation.
    pub fn compute_neighbor_counts(&self) -> NeighborCounts {
        NeighborCounts::compute(&self.cells_curr)
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) -> &Grid {
        self.neighbors.recompute(&self.cells_curr);
        self.cells_next
            .apply(&self.cells_curr, &self.neighbors, &self.rules);
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        &self.cells_curr
    }

    pub fn set_cell_alive(&mut self, row: usize, column: usize) -> Result<()> {
        self.cells_curr.set_alive(row, column)
    }

    pub fn grid(&self) -> &Grid {
        &self.cells_curr
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn size(&self) -> usize {
        self.cells_curr.size()
    }

    pub fn population(&self) -> usize {
        self.cells_curr.population()
    }
}
