use super::Grid;

/// Number of live neighbors of every cell, row-major, each value in `0..=8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: Vec<u8>,
    size: usize,
}

impl NeighborCounts {
    pub fn compute(grid: &Grid) -> Self {
        let mut counts = Self {
            counts: vec![],
            size: 0,
        };
        counts.recompute(grid);
        counts
    }

    /// Overwrites the counts from `grid`, reusing the allocation.
    pub fn recompute(&mut self, grid: &Grid) {
        let n = grid.size();
        self.size = n;
        self.counts.resize(n * n, 0);
        let cells = grid.cells();
        for y in 0..n {
            let y1 = if y == 0 { n - 1 } else { y - 1 };
            let y2 = if y == n - 1 { 0 } else { y + 1 };
            let (row_prev, row_curr, row_next) = (y1 * n, y * n, y2 * n);
            for x in 0..n {
                let x1 = if x == 0 { n - 1 } else { x - 1 };
                let x2 = if x == n - 1 { 0 } else { x + 1 };
                self.counts[row_curr + x] = cells[row_prev + x1] as u8
                    + cells[row_prev + x] as u8
                    + cells[row_prev + x2] as u8
                    + cells[row_curr + x1] as u8
                    + cells[row_curr + x2] as u8
                    + cells[row_next + x1] as u8
                    + cells[row_next + x] as u8
                    + cells[row_next + x2] as u8;
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.counts[row * self.size + column]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}
