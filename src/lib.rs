mod engine;
mod gui;
mod raster;
mod simulation;
mod utils;

pub use engine::{Grid, GridEngine, NeighborCounts, Rules};
pub use gui::{App, Config};
pub use raster::{render, Palette, PixelBuffer, Rasterizer};
pub use simulation::{LoopState, Simulation};
pub use utils::{init_logging, ConfigError, Error, Result, Settings, TickTimer};
