use super::{NeighborCounts, Rules};
use crate::{ConfigError, Error, Result};
use rand::{distributions::OpenClosed01, Rng};

/// Square field of cells with edges stitched together.
///
/// Cells are stored row-major; `(row, column)` addresses `cells[row * size + column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    size: usize,
}

impl Grid {
    /// Creates a field filled with dead cells
    pub fn blank(size: usize) -> Result<Self> {
        crate::utils::validate_grid_size(size)?;
        Ok(Self {
            cells: vec![false; size * size],
            size,
        })
    }

    /// Creates a field where every cell is alive iff a draw from `(0, 1]` exceeds `density`.
    ///
    /// `density` is the probability of a cell staying dead: `1.0` gives a blank field,
    /// `0.0` a completely filled one.
    pub fn random<R: Rng + ?Sized>(size: usize, density: f64, rng: &mut R) -> Result<Self> {
        crate::utils::validate_density(density)?;
        let mut grid = Self::blank(size)?;
        for cell in grid.cells.iter_mut() {
            let draw: f64 = rng.sample(OpenClosed01);
            *cell = draw > density;
        }
        Ok(grid)
    }

    /// Builds a field from rows of `0`/`1` values.
    pub fn from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::blank(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(ConfigError::NotSquare {
                    rows: size,
                    columns: values.len(),
                }
                .into());
            }
            for (column, &value) in values.iter().enumerate() {
                grid.cells[row * size + column] = value != 0;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if the cell is outside of the field
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.size + column]
    }

    /// Panics if the cell is outside of the field
    pub fn set(&mut self, row: usize, column: usize, state: bool) {
        self.cells[row * self.size + column] = state;
    }

    /// Marks a single cell alive; coordinates outside of the field are rejected.
    pub fn set_alive(&mut self, row: usize, column: usize) -> Result<()> {
        if row >= self.size || column >= self.size {
            return Err(Error::CellOutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        self.set(row, column, true);
        Ok(())
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Computes the next generation from a snapshot of the current one.
    pub fn next_generation(&self, rules: &Rules) -> Grid {
        let counts = NeighborCounts::compute(self);
        let mut next = self.clone();
        next.apply(self, &counts, rules);
        next
    }

    /// Writes into `self` the successor of `curr` given `counts` computed from `curr`.
    pub(super) fn apply(&mut self, curr: &Grid, counts: &NeighborCounts, rules: &Rules) {
        debug_assert_eq!(self.size, curr.size);
        debug_assert_eq!(counts.size(), curr.size);
        for ((next, &alive), &neibs) in self
            .cells
            .iter_mut()
            .zip(curr.cells.iter())
            .zip(counts.as_slice().iter())
        {
            *next = rules.next_state(alive, neibs);
        }
    }
}
