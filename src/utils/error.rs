use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected configuration. Raised before any state is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    GridSize(usize),

    #[error("field must be square, got {rows} rows of {columns} cells")]
    NotSquare { rows: usize, columns: usize },

    #[error("canvas size must be at least 1 pixel, got {0}")]
    CanvasSize(usize),

    #[error("seed density must be within [0, 1], got {0}")]
    Density(f64),

    #[error("tick interval must be positive")]
    TickInterval,

    #[error("reanimate threshold must be at most 8, got {0}")]
    Reanimate(u8),

    #[error("survival range ({under}, {over}) is empty or exceeds 8 neighbors")]
    SurvivalRange { under: u8, over: u8 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cell ({row}, {column}) is outside of the {size}x{size} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("pixel ({x}, {y}) is outside of the {canvas}x{canvas} canvas")]
    PixelOutOfBounds { x: usize, y: usize, canvas: usize },
}
