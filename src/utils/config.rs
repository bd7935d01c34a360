use super::ConfigError;
use std::time::Duration;

/// Scalar parameters of a run.
///
/// `canvas_size` is read once from the host surface and stays fixed; the cell
/// pixel size is derived from it every time `grid_size` changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub grid_size: usize,     // Side length of the square field in cells.
    pub canvas_size: usize,   // Side length of the rendered image in pixels.
    pub density: f64,         // Probability that a seeded cell stays dead.
    pub tick_interval: Duration,
    pub seed: Option<u64>,    // Random seed (if `None`, then random seed is generated).
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: Self::GRID_SIZE,
            canvas_size: Self::CANVAS_SIZE,
            density: Self::DENSITY,
            tick_interval: Duration::from_millis(Self::TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl Settings {
    pub const GRID_SIZE: usize = 100;
    pub const CANVAS_SIZE: usize = 600;
    pub const DENSITY: f64 = 0.8;
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// Width of one cell in pixels; may be below 1 when the grid is finer than the canvas.
    pub fn cell_size(&self) -> f64 {
        self.canvas_size as f64 / self.grid_size as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_grid_size(self.grid_size)?;
        if self.canvas_size == 0 {
            return Err(ConfigError::CanvasSize(self.canvas_size));
        }
        validate_density(self.density)?;
        validate_tick_interval(self.tick_interval)
    }
}

pub fn validate_grid_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::GridSize(size));
    }
    Ok(())
}

pub fn validate_density(density: f64) -> Result<(), ConfigError> {
    // written this way so that NaN is rejected too
    if !(0.0..=1.0).contains(&density) {
        return Err(ConfigError::Density(density));
    }
    Ok(())
}

pub fn validate_tick_interval(interval: Duration) -> Result<(), ConfigError> {
    if interval.is_zero() {
        return Err(ConfigError::TickInterval);
    }
    Ok(())
}
